//! Booking and ride history
//!
//! There is no backend; the app is wired to `EmptyHistory`. The panels still
//! render whatever a `HistorySource` hands them.

mod history_render;
mod history_source;

pub use history_render::{EMPTY_HISTORY_TEXT, HISTORY_LIST_TITLE, render_menu, render_records};
pub use history_source::{EmptyHistory, HistoryRecord, HistorySource};
