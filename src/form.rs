//! Ride search form
//!
//! Two autocompleting place fields plus date and passenger inputs. Submitting
//! never leaves the form: it only yields a message for the user.

mod form_events;
mod form_render;
mod form_state;

pub use form_events::handle_form_key;
pub use form_render::{FormRegions, render_search_panel};
pub use form_state::{
    FormFocus, MISSING_PLACES_PROMPT, SearchCriteria, SearchForm, SubmitOutcome,
};
