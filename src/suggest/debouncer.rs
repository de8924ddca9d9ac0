//! Deadline-based debouncing
//!
//! Time is passed in explicitly so callers driven by a UI tick (and tests)
//! decide what "now" is.

use std::time::{Duration, Instant};

/// Fires once after a quiet period with no new `schedule_execution` calls
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    /// (Re)start the timer; any earlier schedule is replaced
    pub fn schedule_execution(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether the timer has run out
    pub fn should_execute(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Consume the expired timer
    pub fn mark_executed(&mut self) {
        self.deadline = None;
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
