use serde::Deserialize;

use super::client::GeocodeError;

/// A display name shown in a suggestion dropdown
pub type PlaceSuggestion = String;

/// Provider place kinds that survive filtering
pub const RETAINED_KINDS: [&str; 3] = ["city", "town", "village"];

/// One entry of a geocoder search response
///
/// Only the two fields the dropdown needs are read; everything else the
/// provider sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceRecord {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl PlaceRecord {
    pub fn is_settlement(&self) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|kind| RETAINED_KINDS.contains(&kind))
    }
}

/// Keep settlements only, in provider order, at most `limit` of them
pub fn settlement_names(records: Vec<PlaceRecord>, limit: usize) -> Vec<PlaceSuggestion> {
    records
        .into_iter()
        .filter(PlaceRecord::is_settlement)
        .filter_map(|record| record.display_name)
        .take(limit)
        .collect()
}

/// Parse a raw JSON response body into suggestions
pub fn parse_places(body: &str, limit: usize) -> Result<Vec<PlaceSuggestion>, GeocodeError> {
    let records: Vec<PlaceRecord> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Parse(e.to_string()))?;
    Ok(settlement_names(records, limit))
}

#[cfg(test)]
#[path = "place_tests.rs"]
mod place_tests;
