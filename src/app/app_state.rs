use std::time::Instant;

use crate::config::Config;
use crate::form::{SearchForm, SubmitOutcome};
use crate::history::{HistoryRecord, HistorySource};
use crate::layout::LayoutRegions;
use crate::suggest::SuggestWorker;
use crate::view::{HistoryMenuItem, HistoryView, Tab, ViewState};

/// Application state
pub struct App {
    pub view: ViewState,
    pub form: SearchForm,
    /// Highlighted entry of the History menu
    pub history_selection: HistoryMenuItem,
    /// Modal message, shown until dismissed
    pub message: Option<SubmitOutcome>,
    /// Where things were drawn in the last frame
    pub layout_regions: LayoutRegions,
    pub(super) should_quit: bool,
    history: Box<dyn HistorySource>,
    /// None when running offline
    worker: Option<SuggestWorker>,
}

impl App {
    pub fn new(
        config: &Config,
        worker: Option<SuggestWorker>,
        history: Box<dyn HistorySource>,
    ) -> Self {
        Self {
            view: ViewState::default(),
            form: SearchForm::new(&config.suggest),
            history_selection: HistoryMenuItem::Bookings,
            message: None,
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            history,
            worker,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_offline(&self) -> bool {
        self.worker.is_none()
    }

    /// Drive timers and move lookups to and from the worker
    ///
    /// Responses are applied before new requests go out, so a response never
    /// lands on a request issued in the same tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(worker) = &self.worker {
            for response in worker.drain_responses() {
                let field = response.field;
                let request_id = response.request_id;
                if !self.form.apply_lookup(response) {
                    log::debug!("Discarded stale lookup {} for {:?}", request_id, field);
                }
            }
        }

        for request in self.form.tick(now) {
            match &self.worker {
                Some(worker) => {
                    worker.submit(request);
                }
                None => log::debug!("Offline; skipping lookup for {:?}", request.query),
            }
        }
    }

    /// Switch tabs; leaving the search panel closes its dropdowns
    pub fn select_tab(&mut self, tab: Tab) {
        if tab != Tab::Search {
            self.form.origin.dismiss();
            self.form.destination.dismiss();
        }
        if tab == Tab::History {
            self.history_selection = HistoryMenuItem::Bookings;
        }
        self.view.select_tab(tab);
    }

    pub fn dismiss_message(&mut self) {
        self.message = None;
    }

    /// Records for the history list currently on screen
    pub fn history_records(&self) -> Vec<HistoryRecord> {
        match self.view.history_view() {
            Some(HistoryView::BookingHistory) => self.history.bookings(),
            Some(HistoryView::RideHistory) => self.history.rides(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
