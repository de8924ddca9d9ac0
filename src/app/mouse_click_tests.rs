//! Tests for mouse click handling

use std::time::{Duration, Instant};

use super::handle_click;
use crate::form::{FormFocus, SubmitOutcome};
use crate::layout::Region;
use crate::suggest::FieldId;
use crate::test_utils::test_helpers::{app_with_results, test_app, tick_until, type_str};
use crate::view::{HistoryMenuItem, HistoryView, Tab, ViewState};

#[test]
fn test_click_tab() {
    let mut app = test_app();
    handle_click(&mut app, Some(Region::Tab(Tab::Publish)), Instant::now());
    assert_eq!(app.view, ViewState::Publish);
}

#[test]
fn test_click_control_moves_focus() {
    let mut app = test_app();
    handle_click(
        &mut app,
        Some(Region::FormControl(FormFocus::Destination)),
        Instant::now(),
    );
    assert_eq!(app.form.focus(), FormFocus::Destination);
    assert!(app.form.destination.is_focused());
    assert!(!app.form.origin.is_focused());
    assert!(app.message.is_none());
}

#[test]
fn test_click_submit_button_submits() {
    let mut app = test_app();
    app.form.origin.select("Mumbai");
    app.form.destination.select("Pune");

    handle_click(&mut app, Some(Region::FormControl(FormFocus::Submit)), Instant::now());
    assert!(app.message.as_ref().is_some_and(SubmitOutcome::is_confirmed));
}

#[test]
fn test_click_suggestion_selects_it() {
    let mut app = app_with_results(&["Pune, Maharashtra, India", "Punawale, Maharashtra, India"]);
    let start = Instant::now();
    type_str(&mut app, "Pun", start);
    let later = start + Duration::from_millis(300);
    assert!(tick_until(&mut app, later, |app| app.form.origin.dropdown_visible()));

    handle_click(
        &mut app,
        Some(Region::Suggestion {
            field: FieldId::Origin,
            index: 1,
        }),
        later,
    );
    assert_eq!(app.form.origin.value(), "Punawale, Maharashtra, India");
    assert!(!app.form.origin.dropdown_visible());
}

#[test]
fn test_click_history_item_opens_list() {
    let mut app = test_app();
    app.select_tab(Tab::History);
    handle_click(
        &mut app,
        Some(Region::HistoryItem(HistoryMenuItem::Rides)),
        Instant::now(),
    );
    assert_eq!(app.view, ViewState::History(HistoryView::RideHistory));
    assert_eq!(app.history_selection, HistoryMenuItem::Rides);
}

#[test]
fn test_click_modal_button_dismisses() {
    let mut app = test_app();
    app.message = Some(SubmitOutcome::Confirmed("ok".to_string()));
    handle_click(&mut app, Some(Region::ModalButton), Instant::now());
    assert!(app.message.is_none());
}

#[test]
fn test_click_nowhere_keeps_view_and_focus_position() {
    let mut app = test_app();
    handle_click(&mut app, None, Instant::now());
    assert_eq!(app.view, ViewState::Search);
    assert_eq!(app.form.focus(), FormFocus::Origin);
}

#[test]
fn test_click_history_close_returns_to_menu() {
    let mut app = test_app();
    app.select_tab(Tab::History);
    app.view.open_booking_history();

    handle_click(&mut app, Some(Region::HistoryBack), Instant::now());
    assert_eq!(app.view, ViewState::History(HistoryView::Menu));
}

#[test]
fn test_click_empty_space_closes_dropdown_after_blur_delay() {
    let mut app = app_with_results(&["Pune, Maharashtra, India"]);
    let start = Instant::now();
    type_str(&mut app, "Pun", start);
    let later = start + Duration::from_millis(300);
    assert!(tick_until(&mut app, later, |app| app.form.origin.dropdown_visible()));

    handle_click(&mut app, None, later);
    assert!(!app.form.origin.is_focused());
    assert!(app.form.origin.dropdown_visible());

    app.tick(later + Duration::from_millis(100));
    assert!(!app.form.origin.dropdown_visible());
    assert_eq!(app.form.origin.value(), "Pun");
    assert_eq!(app.form.focus(), FormFocus::Origin);
}

#[test]
fn test_typing_after_empty_click_refocuses_field() {
    let mut app = test_app();
    let now = Instant::now();
    handle_click(&mut app, None, now);
    assert!(!app.form.origin.is_focused());

    type_str(&mut app, "Goa", now);
    assert!(app.form.origin.is_focused());
    assert_eq!(app.form.origin.value(), "Goa");
}

#[test]
fn test_click_blurred_field_refocuses_it() {
    let mut app = test_app();
    let now = Instant::now();
    handle_click(&mut app, None, now);
    handle_click(&mut app, Some(Region::FormControl(FormFocus::Origin)), now);
    assert!(app.form.origin.is_focused());
}

#[test]
fn test_empty_click_under_modal_keeps_focus() {
    let mut app = test_app();
    app.message = Some(SubmitOutcome::Confirmed("ok".to_string()));
    handle_click(&mut app, None, Instant::now());
    assert!(app.form.origin.is_focused());
    assert!(app.message.is_some());
}
