//! HTTP client for the place-search endpoint

use std::time::Duration;

use reqwest::header::ACCEPT_LANGUAGE;
use thiserror::Error;

use super::place::{PlaceSuggestion, parse_places};
use crate::config::GeocoderConfig;

/// Errors that can occur during a place lookup
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Transport failure (DNS, connect, TLS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Provider answered with a non-success status
    #[error("Provider error ({code}): {message}")]
    Provider { code: u16, message: String },

    /// Response body was not a JSON array of places
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Geocoder client bound to one endpoint and country
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    config: GeocoderConfig,
}

impl GeocodeClient {
    /// Build a client from configuration
    ///
    /// The user agent and request timeout are fixed on the underlying
    /// `reqwest::Client`; the remaining parameters go on every request.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        Self::with_builder(config, reqwest::Client::builder())
    }

    fn with_builder(
        config: GeocoderConfig,
        builder: reqwest::ClientBuilder,
    ) -> Result<Self, GeocodeError> {
        let http = builder
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Query string sent for `text`
    pub fn query_params(&self, text: &str) -> Vec<(&'static str, String)> {
        vec![
            ("q", text.to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("limit", self.config.limit.to_string()),
            ("countrycodes", self.config.country_code.clone()),
        ]
    }

    /// Look up `text`, reporting every failure
    pub async fn try_lookup(&self, text: &str) -> Result<Vec<PlaceSuggestion>, GeocodeError> {
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&self.query_params(text))
            .header(ACCEPT_LANGUAGE, &self.config.language)
            .send()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeocodeError::Provider {
                code: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        parse_places(&body, self.config.limit)
    }

    /// Look up `text`; any failure yields an empty list
    pub async fn lookup(&self, text: &str) -> Vec<PlaceSuggestion> {
        match self.try_lookup(text).await {
            Ok(places) => places,
            Err(e) => {
                log::debug!("Lookup for {:?} failed: {}", text, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
