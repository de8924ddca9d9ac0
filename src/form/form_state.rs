use std::time::Instant;

use chrono::{NaiveDate, TimeDelta};

use crate::config::SuggestConfig;
use crate::field::AutocompleteField;
use crate::suggest::{FieldId, LookupRequest, LookupResponse};

pub const MISSING_PLACES_PROMPT: &str = "Please enter both pickup and destination cities.";

const DATE_FORMAT: &str = "%Y-%m-%d";
const MAX_DATE_LEN: usize = 10;
const MAX_PASSENGER_DIGITS: usize = 3;

/// Snapshot of the form taken on submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    /// Empty means "today"
    pub date: String,
    pub passengers: i64,
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field is missing; carries the prompt to show
    Invalid(String),
    /// The search was accepted; carries the confirmation text
    Confirmed(String),
}

impl SubmitOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Invalid(message) | SubmitOutcome::Confirmed(message) => message,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed(_))
    }
}

/// Which form control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Origin,
    Destination,
    Date,
    Passengers,
    Submit,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Origin,
        FormFocus::Destination,
        FormFocus::Date,
        FormFocus::Passengers,
        FormFocus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// The autocomplete field behind this control, if any
    pub fn field_id(self) -> Option<FieldId> {
        match self {
            FormFocus::Origin => Some(FieldId::Origin),
            FormFocus::Destination => Some(FieldId::Destination),
            _ => None,
        }
    }
}

pub struct SearchForm {
    pub origin: AutocompleteField,
    pub destination: AutocompleteField,
    date: String,
    passengers: String,
    focus: FormFocus,
}

impl SearchForm {
    pub fn new(config: &SuggestConfig) -> Self {
        let mut origin = AutocompleteField::origin(config);
        origin.on_focus();

        Self {
            origin,
            destination: AutocompleteField::destination(config),
            date: String::new(),
            passengers: "1".to_string(),
            focus: FormFocus::Origin,
        }
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Move focus, blurring the control that loses it
    pub fn set_focus(&mut self, target: FormFocus, now: Instant) {
        if target == self.focus {
            if let Some(id) = target.field_id() {
                self.field_mut(id).on_focus();
            }
            return;
        }
        if let Some(id) = self.focus.field_id() {
            self.field_mut(id).on_blur(now);
        }
        self.focus = target;
        if let Some(id) = target.field_id() {
            self.field_mut(id).on_focus();
        }
    }

    /// Blur the focused place field without moving focus elsewhere
    ///
    /// Its dropdown closes once the blur check runs. The next key sent to the
    /// field focuses it again.
    pub fn release_focus(&mut self, now: Instant) {
        if let Some(id) = self.focus.field_id() {
            let field = self.field_mut(id);
            if field.is_focused() {
                field.on_blur(now);
            }
        }
    }

    pub fn focus_next(&mut self, now: Instant) {
        self.set_focus(self.focus.next(), now);
    }

    pub fn focus_previous(&mut self, now: Instant) {
        self.set_focus(self.focus.previous(), now);
    }

    pub fn field(&self, id: FieldId) -> &AutocompleteField {
        match id {
            FieldId::Origin => &self.origin,
            FieldId::Destination => &self.destination,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut AutocompleteField {
        match id {
            FieldId::Origin => &mut self.origin,
            FieldId::Destination => &mut self.destination,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_string();
    }

    /// Accepts digits and `-` only, up to the length of an ISO date
    pub fn push_date_char(&mut self, ch: char) -> bool {
        if !(ch.is_ascii_digit() || ch == '-') || self.date.len() >= MAX_DATE_LEN {
            return false;
        }
        self.date.push(ch);
        true
    }

    pub fn pop_date_char(&mut self) {
        self.date.pop();
    }

    /// Step the date by `days`; an empty or unreadable date becomes `today`
    pub fn step_date(&mut self, days: i64, today: NaiveDate) {
        let next = match NaiveDate::parse_from_str(&self.date, DATE_FORMAT) {
            Ok(date) => date.checked_add_signed(TimeDelta::days(days)).unwrap_or(date),
            Err(_) => today,
        };
        self.date = next.format(DATE_FORMAT).to_string();
    }

    /// Passenger count as entered; an empty input reads as 0
    pub fn passengers(&self) -> i64 {
        self.passengers.parse().unwrap_or(0)
    }

    pub fn passengers_text(&self) -> &str {
        &self.passengers
    }

    pub fn set_passengers(&mut self, count: i64) {
        self.passengers = count.to_string();
    }

    pub fn push_passenger_digit(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() || self.passengers.len() >= MAX_PASSENGER_DIGITS {
            return false;
        }
        self.passengers.push(ch);
        true
    }

    pub fn pop_passenger_digit(&mut self) {
        self.passengers.pop();
    }

    /// Spinner-style step; stepping never goes below 1
    pub fn step_passengers(&mut self, delta: i64) {
        let next = (self.passengers() + delta).max(1);
        let max = 10_i64.pow(MAX_PASSENGER_DIGITS as u32) - 1;
        self.set_passengers(next.min(max));
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            origin: self.origin.value().to_string(),
            destination: self.destination.value().to_string(),
            date: self.date.clone(),
            passengers: self.passengers(),
        }
    }

    /// Validate and build the message for the user
    ///
    /// Only the two places are required. The passenger count is taken as
    /// entered.
    pub fn submit(&self) -> SubmitOutcome {
        let criteria = self.criteria();
        if criteria.origin.is_empty() || criteria.destination.is_empty() {
            return SubmitOutcome::Invalid(MISSING_PLACES_PROMPT.to_string());
        }

        let date = if criteria.date.is_empty() {
            "today"
        } else {
            criteria.date.as_str()
        };

        SubmitOutcome::Confirmed(format!(
            "🚗 Searching for rides from {} to {} on {} for {} passenger(s). We'll find the best options for you!",
            criteria.origin, criteria.destination, date, criteria.passengers
        ))
    }

    /// Advance both fields' timers and collect the lookups that are due
    pub fn tick(&mut self, now: Instant) -> Vec<LookupRequest> {
        [self.origin.tick(now), self.destination.tick(now)]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Route a worker response to its field
    pub fn apply_lookup(&mut self, response: LookupResponse) -> bool {
        self.field_mut(response.field)
            .apply_lookup(response.request_id, response.suggestions)
    }
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
