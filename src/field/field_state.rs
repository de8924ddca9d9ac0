use std::time::Instant;

use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::config::SuggestConfig;
use crate::geocode::PlaceSuggestion;
use crate::suggest::{DebouncedSuggester, Debouncer, FieldId, LookupRequest};
use crate::theme;

/// An input with live place suggestions
///
/// Focus is tracked explicitly: the field and its dropdown count as one
/// container, so moving between them never blurs the field. A blur only
/// schedules a dismissal check, which lets a selection arriving in the
/// meantime win.
pub struct AutocompleteField {
    id: FieldId,
    label: &'static str,
    placeholder: &'static str,
    pub(super) textarea: TextArea<'static>,
    suggester: DebouncedSuggester,
    focused: bool,
    blur_check: Debouncer,
    highlighted: Option<usize>,
}

impl AutocompleteField {
    pub fn new(
        id: FieldId,
        label: &'static str,
        placeholder: &'static str,
        config: &SuggestConfig,
    ) -> Self {
        Self {
            id,
            label,
            placeholder,
            textarea: new_textarea(placeholder, ""),
            suggester: DebouncedSuggester::new(config),
            focused: false,
            blur_check: Debouncer::new(config.blur_delay_ms),
            highlighted: None,
        }
    }

    pub fn origin(config: &SuggestConfig) -> Self {
        Self::new(
            FieldId::Origin,
            "Pickup Location",
            "Where are you leaving from?",
            config,
        )
    }

    pub fn destination(config: &SuggestConfig) -> Self {
        Self::new(
            FieldId::Destination,
            "Destination",
            "Where are you going?",
            config,
        )
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Current text of the field
    pub fn value(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the text as if the user had typed it
    pub fn set_value(&mut self, text: &str, now: Instant) {
        self.textarea = new_textarea(self.placeholder, text);
        self.on_text_changed(now);
    }

    /// Take a suggestion verbatim and close the dropdown
    ///
    /// Any pending or in-flight lookup for this field is abandoned.
    pub fn select(&mut self, suggestion: &str) {
        self.textarea = new_textarea(self.placeholder, suggestion);
        self.dismiss();
    }

    /// Select the entry at `index`; returns false if there is none
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(suggestion) = self.suggestions().get(index).cloned() else {
            return false;
        };
        self.select(&suggestion);
        true
    }

    pub fn select_highlighted(&mut self) -> bool {
        match self.highlighted {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    /// Clear suggestions and cancel any scheduled lookup
    pub fn dismiss(&mut self) {
        self.suggester.clear();
        self.highlighted = None;
    }

    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    pub fn on_blur(&mut self, now: Instant) {
        self.focused = false;
        self.blur_check.schedule_execution(now);
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Advance timers: run a due blur check, then hand out a due lookup
    pub fn tick(&mut self, now: Instant) -> Option<LookupRequest> {
        if self.blur_check.should_execute(now) {
            self.blur_check.mark_executed();
            if !self.focused {
                self.dismiss();
            }
        }

        self.suggester.poll(now).map(|ticket| LookupRequest {
            field: self.id,
            request_id: ticket.request_id,
            query: ticket.query,
        })
    }

    /// Apply a lookup result; stale results are ignored
    pub fn apply_lookup(&mut self, request_id: u64, suggestions: Vec<PlaceSuggestion>) -> bool {
        let applied = self.suggester.apply(request_id, suggestions);
        if applied {
            self.highlighted = None;
        }
        applied
    }

    pub fn suggestions(&self) -> &[PlaceSuggestion] {
        self.suggester.suggestions()
    }

    pub fn dropdown_visible(&self) -> bool {
        !self.suggestions().is_empty()
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.suggester.has_in_flight_request()
    }

    pub fn is_lookup_pending(&self) -> bool {
        self.suggester.is_pending()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Move the highlight down, wrapping to the top
    pub fn highlight_next(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    /// Move the highlight up, wrapping to the bottom
    pub fn highlight_previous(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    pub(super) fn on_text_changed(&mut self, now: Instant) {
        // The input is single-line; fold anything that slipped in as a newline
        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().concat();
            self.textarea = new_textarea(self.placeholder, &joined);
        }
        self.highlighted = None;
        let value = self.value().to_string();
        self.suggester.on_query_changed(&value, now);
    }
}

fn new_textarea(placeholder: &'static str, text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(placeholder);
    textarea.set_placeholder_style(Style::default().fg(theme::form::PLACEHOLDER));
    textarea.move_cursor(CursorMove::End);
    textarea
}

#[cfg(test)]
#[path = "field_state_tests.rs"]
mod field_state_tests;
