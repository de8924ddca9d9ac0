//! Mouse click handling
//!
//! Turns a click on a tracked region into the matching action.

use std::time::Instant;

use super::app_state::App;
use crate::layout::Region;
use crate::view::ViewState;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, now: Instant) {
    match region {
        Some(Region::ModalButton) => app.dismiss_message(),
        Some(Region::Tab(tab)) => app.select_tab(tab),
        Some(Region::FormControl(control)) => {
            app.form.set_focus(control, now);
            if control == crate::form::FormFocus::Submit {
                app.message = Some(app.form.submit());
            }
        }
        Some(Region::Suggestion { field, index }) => {
            app.form.field_mut(field).select_index(index);
        }
        Some(Region::HistoryItem(item)) => {
            app.history_selection = item;
            app.view.open_history_item(item);
        }
        Some(Region::HistoryBack) => app.view.back(),
        // Clicking empty space on the search panel blurs the place field
        None => {
            if app.view == ViewState::Search && app.message.is_none() {
                app.form.release_focus(now);
            }
        }
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
