//! Autocompleting place input
//!
//! A single-line text input bound to a `DebouncedSuggester`, with a dropdown
//! that is shown exactly while the suggestion list is non-empty.

mod field_events;
mod field_render;
mod field_state;

pub use field_events::handle_field_key;
pub use field_render::{render_dropdown, render_field};
pub use field_state::AutocompleteField;
