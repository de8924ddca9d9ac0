//! Debounced place suggestions
//!
//! Each autocomplete field owns a `DebouncedSuggester`. Lookups themselves run
//! on the `SuggestWorker` thread; every request carries the request id that
//! was current when it was issued, and only a response whose id is still the
//! latest for its field is ever applied.

mod debouncer;
mod suggester;
mod worker;

pub use debouncer::Debouncer;
pub use suggester::{DebouncedSuggester, LookupTicket};
pub use worker::{LookupRequest, LookupResponse, PlaceLookup, SuggestWorker};

/// Identifies which autocomplete field a lookup belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Origin,
    Destination,
}
