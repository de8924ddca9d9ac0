use std::time::Instant;

use chrono::NaiveDate;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{FormFocus, SearchForm, SubmitOutcome};
use crate::field::handle_field_key;

/// Handle a key in the search form
///
/// The focused control gets the key first; what it leaves over moves focus
/// or submits. Returns the outcome when the form was submitted.
pub fn handle_form_key(
    form: &mut SearchForm,
    key: KeyEvent,
    now: Instant,
    today: NaiveDate,
) -> Option<SubmitOutcome> {
    let consumed = match form.focus() {
        FormFocus::Origin | FormFocus::Destination => match form.focus().field_id() {
            Some(id) => {
                let field = form.field_mut(id);
                if !field.is_focused() {
                    field.on_focus();
                }
                handle_field_key(field, key, now)
            }
            None => false,
        },
        FormFocus::Date => handle_date_key(form, key, today),
        FormFocus::Passengers => handle_passengers_key(form, key),
        FormFocus::Submit => false,
    };
    if consumed {
        return None;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(now),
        KeyCode::BackTab | KeyCode::Up => form.focus_previous(now),
        KeyCode::Enter => return Some(form.submit()),
        _ => {}
    }
    None
}

fn handle_date_key(form: &mut SearchForm, key: KeyEvent, today: NaiveDate) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match key.code {
        KeyCode::Char(ch) => {
            form.push_date_char(ch);
            true
        }
        KeyCode::Backspace => {
            form.pop_date_char();
            true
        }
        KeyCode::Up => {
            form.step_date(1, today);
            true
        }
        KeyCode::Down => {
            form.step_date(-1, today);
            true
        }
        _ => false,
    }
}

fn handle_passengers_key(form: &mut SearchForm, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    match key.code {
        KeyCode::Char(ch) => {
            form.push_passenger_digit(ch);
            true
        }
        KeyCode::Backspace => {
            form.pop_passenger_digit();
            true
        }
        KeyCode::Up => {
            form.step_passengers(1);
            true
        }
        KeyCode::Down => {
            form.step_passengers(-1);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "form_events_tests.rs"]
mod form_events_tests;
