//! Tests for AutocompleteField

use std::time::Duration;

use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn origin() -> AutocompleteField {
    AutocompleteField::origin(&SuggestConfig::default())
}

/// Type `text`, wait out the debounce and answer the lookup with `results`
fn with_suggestions(text: &str, results: &[&str], start: Instant) -> AutocompleteField {
    let mut field = origin();
    field.on_focus();
    field.set_value(text, start);
    let request = field.tick(start + ms(300)).expect("lookup should be due");
    assert!(field.apply_lookup(
        request.request_id,
        results.iter().map(|s| s.to_string()).collect()
    ));
    field
}

#[test]
fn test_new_field_is_empty_and_unfocused() {
    let field = origin();
    assert_eq!(field.id(), FieldId::Origin);
    assert_eq!(field.label(), "Pickup Location");
    assert_eq!(field.value(), "");
    assert!(!field.is_focused());
    assert!(!field.dropdown_visible());
}

#[test]
fn test_set_value_updates_value_and_schedules_lookup() {
    let start = Instant::now();
    let mut field = origin();
    field.set_value("Mumbai", start);

    assert_eq!(field.value(), "Mumbai");
    assert!(field.is_lookup_pending());
    assert_eq!(field.tick(start + ms(299)), None);

    let request = field.tick(start + ms(300)).unwrap();
    assert_eq!(request.field, FieldId::Origin);
    assert_eq!(request.query, "Mumbai");
}

#[test]
fn test_dropdown_follows_suggestion_list() {
    let start = Instant::now();
    let field = with_suggestions("Pune", &["Pune, Maharashtra, India"], start);
    assert!(field.dropdown_visible());

    let field = with_suggestions("Pune", &[], start);
    assert!(!field.dropdown_visible());
}

#[test]
fn test_select_sets_value_verbatim_and_closes_dropdown() {
    let start = Instant::now();
    let mut field = with_suggestions(
        "Pune",
        &["Pune, Maharashtra, India", "Punawale, Maharashtra, India"],
        start,
    );

    field.select("Punawale, Maharashtra, India");
    assert_eq!(field.value(), "Punawale, Maharashtra, India");
    assert!(field.suggestions().is_empty());
    assert!(!field.is_lookup_pending());
}

#[test]
fn test_select_wins_over_pending_timer() {
    let start = Instant::now();
    let mut field = origin();
    field.set_value("Nashik", start);
    field.select("Nashik, Maharashtra, India");

    assert_eq!(field.tick(start + ms(1_000)), None);
    assert_eq!(field.value(), "Nashik, Maharashtra, India");
}

#[test]
fn test_select_wins_over_in_flight_lookup() {
    let start = Instant::now();
    let mut field = origin();
    field.set_value("Nashik", start);
    let request = field.tick(start + ms(300)).unwrap();

    field.select("Nashik, Maharashtra, India");
    assert!(!field.apply_lookup(request.request_id, vec!["Nashik Road".to_string()]));
    assert!(!field.dropdown_visible());
}

#[test]
fn test_blur_dismisses_after_delay() {
    let start = Instant::now();
    let mut field = with_suggestions("Pune", &["Pune, India"], start);

    let blur_at = start + ms(400);
    field.on_blur(blur_at);
    field.tick(blur_at + ms(99));
    assert!(field.dropdown_visible());

    field.tick(blur_at + ms(100));
    assert!(!field.dropdown_visible());
}

#[test]
fn test_refocus_before_blur_check_keeps_dropdown() {
    let start = Instant::now();
    let mut field = with_suggestions("Pune", &["Pune, India"], start);

    let blur_at = start + ms(400);
    field.on_blur(blur_at);
    field.on_focus();
    field.tick(blur_at + ms(150));

    assert!(field.dropdown_visible());
}

#[test]
fn test_selection_inside_blur_window_wins() {
    let start = Instant::now();
    let mut field = with_suggestions("Pune", &["Pune, India", "Punalur"], start);

    let blur_at = start + ms(400);
    field.on_blur(blur_at);
    assert!(field.select_index(1));
    field.tick(blur_at + ms(100));

    assert_eq!(field.value(), "Punalur");
    assert!(!field.dropdown_visible());
}

#[test]
fn test_blur_cancels_scheduled_lookup() {
    let start = Instant::now();
    let mut field = origin();
    field.on_focus();
    field.set_value("Kolkata", start);
    field.on_blur(start + ms(50));

    assert_eq!(field.tick(start + ms(150)), None);
    assert_eq!(field.tick(start + ms(400)), None);
}

#[test]
fn test_blur_suppresses_in_flight_result() {
    let start = Instant::now();
    let mut field = origin();
    field.on_focus();
    field.set_value("Kolkata", start);
    let request = field.tick(start + ms(300)).unwrap();

    field.on_blur(start + ms(310));
    field.tick(start + ms(410));

    assert!(!field.apply_lookup(request.request_id, vec!["Kolkata, India".to_string()]));
    assert!(!field.dropdown_visible());
}

#[test]
fn test_highlight_wraps_both_ways() {
    let start = Instant::now();
    let mut field = with_suggestions("Pune", &["a", "b", "c"], start);

    assert_eq!(field.highlighted(), None);
    field.highlight_next();
    assert_eq!(field.highlighted(), Some(0));
    field.highlight_previous();
    assert_eq!(field.highlighted(), Some(2));
    field.highlight_next();
    assert_eq!(field.highlighted(), Some(0));
}

#[test]
fn test_highlight_without_suggestions_is_noop() {
    let mut field = origin();
    field.highlight_next();
    field.highlight_previous();
    assert_eq!(field.highlighted(), None);
    assert!(!field.select_highlighted());
}

#[test]
fn test_select_index_out_of_range() {
    let start = Instant::now();
    let mut field = with_suggestions("Pune", &["Pune, India"], start);
    assert!(!field.select_index(3));
    assert_eq!(field.value(), "Pune");
}

#[test]
fn test_new_suggestions_reset_highlight() {
    let start = Instant::now();
    let mut field = with_suggestions("Pune", &["a", "b"], start);
    field.highlight_next();

    field.set_value("Punea", start + ms(500));
    assert_eq!(field.highlighted(), None);
}
