//! Tests for view navigation

use proptest::prelude::*;

use super::*;

#[test]
fn test_initial_view_is_search() {
    assert_eq!(ViewState::default(), ViewState::Search);
}

#[test]
fn test_select_tab() {
    let mut view = ViewState::default();
    view.select_tab(Tab::Chat);
    assert_eq!(view, ViewState::Chat);
    assert_eq!(view.tab(), Tab::Chat);
}

#[test]
fn test_history_resets_to_menu() {
    let mut view = ViewState::History(HistoryView::RideHistory);
    view.select_tab(Tab::History);
    assert_eq!(view, ViewState::History(HistoryView::Menu));
}

#[test]
fn test_back_from_booking_history() {
    let mut view = ViewState::History(HistoryView::BookingHistory);
    view.back();
    assert_eq!(view, ViewState::History(HistoryView::Menu));
}

#[test]
fn test_back_from_menu_stays_on_menu() {
    let mut view = ViewState::History(HistoryView::Menu);
    view.back();
    assert_eq!(view, ViewState::History(HistoryView::Menu));
}

#[test]
fn test_back_outside_history_is_noop() {
    let mut view = ViewState::Profile;
    view.back();
    assert_eq!(view, ViewState::Profile);
}

#[test]
fn test_open_lists_only_inside_history() {
    let mut view = ViewState::Search;
    view.open_booking_history();
    view.open_ride_history();
    assert_eq!(view, ViewState::Search);

    let mut view = ViewState::History(HistoryView::Menu);
    view.open_history_item(HistoryMenuItem::Rides);
    assert_eq!(view, ViewState::History(HistoryView::RideHistory));
    view.open_booking_history();
    assert_eq!(view, ViewState::History(HistoryView::BookingHistory));
}

#[test]
fn test_tab_positions() {
    assert_eq!(Tab::from_position(1), Some(Tab::Search));
    assert_eq!(Tab::from_position(4), Some(Tab::History));
    assert_eq!(Tab::from_position(5), Some(Tab::Chat));
    assert_eq!(Tab::from_position(0), None);
    assert_eq!(Tab::from_position(6), None);
}

#[test]
fn test_history_view_accessor() {
    assert_eq!(ViewState::Search.history_view(), None);
    assert_eq!(
        ViewState::History(HistoryView::RideHistory).history_view(),
        Some(HistoryView::RideHistory)
    );
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Select(Tab),
    OpenBookings,
    OpenRides,
    Back,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(Tab::ALL.to_vec()).prop_map(Action::Select),
        Just(Action::OpenBookings),
        Just(Action::OpenRides),
        Just(Action::Back),
    ]
}

fn apply(view: &mut ViewState, action: Action) {
    match action {
        Action::Select(tab) => view.select_tab(tab),
        Action::OpenBookings => view.open_booking_history(),
        Action::OpenRides => view.open_ride_history(),
        Action::Back => view.back(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_entering_history_lands_on_menu(
        actions in prop::collection::vec(arb_action(), 0..20)
    ) {
        let mut view = ViewState::default();
        for action in actions {
            apply(&mut view, action);
        }
        view.select_tab(Tab::History);
        prop_assert_eq!(view, ViewState::History(HistoryView::Menu));
    }

    #[test]
    fn prop_back_never_leaves_current_tab(
        actions in prop::collection::vec(arb_action(), 0..20)
    ) {
        let mut view = ViewState::default();
        for action in actions {
            apply(&mut view, action);
        }
        let tab = view.tab();
        view.back();
        prop_assert_eq!(view.tab(), tab);
        if tab == Tab::History {
            prop_assert_eq!(view, ViewState::History(HistoryView::Menu));
        }
    }
}
