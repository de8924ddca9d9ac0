use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::AutocompleteField;

/// Handle a key pressed while the field has focus
///
/// Returns false for keys the field leaves to the form (focus movement,
/// submit, and dropdown keys while no dropdown is open).
pub fn handle_field_key(field: &mut AutocompleteField, key: KeyEvent, now: Instant) -> bool {
    if field.dropdown_visible() {
        match key.code {
            KeyCode::Down => {
                field.highlight_next();
                return true;
            }
            KeyCode::Up => {
                field.highlight_previous();
                return true;
            }
            KeyCode::Enter if field.highlighted().is_some() => {
                field.select_highlighted();
                return true;
            }
            // Tab accepts the highlighted entry, or the first one
            KeyCode::Tab => {
                let index = field.highlighted().unwrap_or(0);
                field.select_index(index);
                return true;
            }
            KeyCode::Esc => {
                field.dismiss();
                return true;
            }
            _ => {}
        }
    }

    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc | KeyCode::Up | KeyCode::Down
    ) {
        return false;
    }

    if field.textarea.input(key) {
        field.on_text_changed(now);
    }
    true
}

#[cfg(test)]
#[path = "field_events_tests.rs"]
mod field_events_tests;
