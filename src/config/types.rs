// Configuration type definitions

use serde::Deserialize;

/// Geocoder connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub endpoint: String,
    /// ISO 3166-1 alpha-2 code sent as `countrycodes`
    pub country_code: String,
    /// Value of the `Accept-Language` header
    pub language: String,
    pub user_agent: String,
    pub limit: usize,
    pub timeout_ms: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        GeocoderConfig {
            endpoint: "https://nominatim.openstreetmap.org/search".to_string(),
            country_code: "in".to_string(),
            language: "en".to_string(),
            user_agent: "rideshare-app-demo".to_string(),
            limit: 5,
            timeout_ms: 10_000,
        }
    }
}

/// Suggestion timing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Quiet period before a lookup is issued
    pub debounce_ms: u64,
    /// Delay between a blur and the dismissal check
    pub blur_delay_ms: u64,
    /// Queries shorter than this never reach the geocoder
    pub min_query_len: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            debounce_ms: 300,
            blur_delay_ms: 100,
            min_query_len: 3,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
}
