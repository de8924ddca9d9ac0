//! Place lookups against a Nominatim-style search endpoint
//!
//! The client turns free text into a short list of settlement names. Lookup
//! failures never escape `GeocodeClient::lookup`; callers only ever see an
//! empty list.

mod client;
mod place;

pub use client::{GeocodeClient, GeocodeError};
pub use place::{PlaceRecord, PlaceSuggestion, RETAINED_KINDS, parse_places, settlement_names};
