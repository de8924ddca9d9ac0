//! Tests for app state and the tick loop

use std::time::{Duration, Instant};

use super::*;
use crate::form::FormFocus;
use crate::test_utils::test_helpers::{app_with_results, test_app, tick_until, type_str};

#[test]
fn test_new_app_starts_on_search() {
    let app = test_app();
    assert_eq!(app.view, ViewState::Search);
    assert!(app.message.is_none());
    assert!(!app.should_quit());
    assert!(app.is_offline());
    assert_eq!(app.form.focus(), FormFocus::Origin);
}

#[test]
fn test_typed_place_gets_suggestions_from_worker() {
    let mut app = app_with_results(&["Pune, Maharashtra, India", "Punawale, Maharashtra, India"]);
    assert!(!app.is_offline());
    let start = Instant::now();
    type_str(&mut app, "Pun", start);

    // Still inside the quiet period
    app.tick(start + Duration::from_millis(100));
    assert!(app.form.origin.is_lookup_pending());

    let later = start + Duration::from_millis(300);
    assert!(tick_until(&mut app, later, |app| app.form.origin.dropdown_visible()));
    assert_eq!(
        app.form.origin.suggestions(),
        ["Pune, Maharashtra, India", "Punawale, Maharashtra, India"]
    );
}

#[test]
fn test_edit_after_lookup_discards_its_response() {
    let mut app = app_with_results(&["Pune, Maharashtra, India"]);
    let start = Instant::now();
    type_str(&mut app, "Pun", start);
    // Issue the lookup, then keep typing before any response is drained
    app.tick(start + Duration::from_millis(300));
    assert!(app.form.origin.has_in_flight_request());
    type_str(&mut app, "e", start + Duration::from_millis(310));

    std::thread::sleep(Duration::from_millis(50));
    app.tick(start + Duration::from_millis(320));
    assert!(!app.form.origin.dropdown_visible());
    assert!(app.form.origin.is_lookup_pending());
}

#[test]
fn test_offline_tick_issues_nothing() {
    let mut app = test_app();
    let start = Instant::now();
    type_str(&mut app, "Mumbai", start);

    app.tick(start + Duration::from_millis(300));
    app.tick(start + Duration::from_millis(600));
    assert!(!app.form.origin.dropdown_visible());
}

#[test]
fn test_select_tab_closes_search_dropdowns() {
    let mut app = app_with_results(&["Pune, Maharashtra, India"]);
    let start = Instant::now();
    type_str(&mut app, "Pune", start);
    assert!(tick_until(&mut app, start + Duration::from_millis(300), |app| {
        app.form.origin.dropdown_visible()
    }));

    app.select_tab(Tab::Profile);
    assert_eq!(app.view, ViewState::Profile);
    assert!(!app.form.origin.dropdown_visible());
    assert_eq!(app.form.origin.value(), "Pune");
}

#[test]
fn test_history_records_follow_view() {
    let mut app = test_app();
    app.select_tab(Tab::History);
    assert!(app.history_records().is_empty());

    app.view.open_ride_history();
    assert!(app.history_records().is_empty());
}

#[test]
fn test_history_records_come_from_source() {
    struct OneRide;
    impl HistorySource for OneRide {
        fn bookings(&self) -> Vec<HistoryRecord> {
            Vec::new()
        }
        fn rides(&self) -> Vec<HistoryRecord> {
            vec![HistoryRecord {
                from: "Delhi".to_string(),
                to: "Agra".to_string(),
                date: "2024-06-01".to_string(),
                status: "Published".to_string(),
            }]
        }
    }

    let mut app = App::new(&Config::default(), None, Box::new(OneRide));
    app.select_tab(Tab::History);
    app.view.open_booking_history();
    assert!(app.history_records().is_empty());

    app.view.open_ride_history();
    assert_eq!(app.history_records().len(), 1);
}
