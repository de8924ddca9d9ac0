//! Per-field suggestion state
//!
//! Turns a stream of query edits into at most one lookup per quiet period and
//! applies only the result of the most recently issued lookup.

use std::time::Instant;

use super::debouncer::Debouncer;
use crate::config::SuggestConfig;
use crate::geocode::PlaceSuggestion;

/// A lookup that is due to be sent to the geocoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub request_id: u64,
    pub query: String,
}

/// Suggestion state for one autocomplete field
#[derive(Debug, Clone)]
pub struct DebouncedSuggester {
    query: String,
    suggestions: Vec<PlaceSuggestion>,
    debouncer: Debouncer,
    min_query_len: usize,
    /// Latest request id, bumped on every query change and clear.
    /// A response is applied only if it carries this id.
    request_id: u64,
    /// Id of the lookup handed out by `poll` and not yet answered
    in_flight_request_id: Option<u64>,
}

impl DebouncedSuggester {
    pub fn new(config: &SuggestConfig) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            debouncer: Debouncer::new(config.debounce_ms),
            min_query_len: config.min_query_len,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    /// Record a new query and restart the quiet period
    ///
    /// Short queries clear the list at once and schedule nothing.
    pub fn on_query_changed(&mut self, text: &str, now: Instant) {
        self.query = text.to_string();
        self.supersede();

        if text.chars().count() < self.min_query_len {
            self.suggestions.clear();
            self.debouncer.cancel();
            return;
        }

        self.debouncer.schedule_execution(now);
    }

    /// Hand out the lookup for the current query once the quiet period is over
    pub fn poll(&mut self, now: Instant) -> Option<LookupTicket> {
        if !self.debouncer.should_execute(now) {
            return None;
        }
        self.debouncer.mark_executed();
        self.in_flight_request_id = Some(self.request_id);

        Some(LookupTicket {
            request_id: self.request_id,
            query: self.query.clone(),
        })
    }

    /// Apply a lookup result; returns false when the result is stale
    pub fn apply(&mut self, request_id: u64, suggestions: Vec<PlaceSuggestion>) -> bool {
        if self.in_flight_request_id != Some(request_id) {
            log::debug!(
                "Discarding stale suggestions for request {} (current: {})",
                request_id,
                self.request_id
            );
            return false;
        }

        self.in_flight_request_id = None;
        self.suggestions = suggestions;
        true
    }

    /// Empty the list, drop the pending timer and ignore any in-flight result
    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.debouncer.cancel();
        self.supersede();
    }

    fn supersede(&mut self) {
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = None;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[PlaceSuggestion] {
        &self.suggestions
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }
}

#[cfg(test)]
#[path = "suggester_tests.rs"]
mod suggester_tests;
