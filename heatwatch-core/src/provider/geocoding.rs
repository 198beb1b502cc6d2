use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{config::LocationConfig, error::ResolveError, model::Place};

use super::{LocationResolver, truncate_body};

/// Open-Meteo geocoding search restricted to one region of one country.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    base_url: String,
    target: LocationConfig,
    http: Client,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client, base_url: impl Into<String>, target: LocationConfig) -> Self {
        Self { base_url: base_url.into(), target, http }
    }

    fn accepts(&self, candidate: &GeoCandidate) -> bool {
        candidate.admin1.as_deref() == Some(self.target.region.as_str())
            && candidate.country_code.as_deref() == Some(self.target.country_code.as_str())
    }
}

/// Only the accepted candidate needs a name and coordinates.
#[derive(Debug, Deserialize)]
struct GeoCandidate {
    name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    admin1: Option<String>,
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Vec<GeoCandidate>,
}

#[async_trait]
impl LocationResolver for OpenMeteoGeocoder {
    async fn resolve(&self, place_name: &str) -> Result<Place, ResolveError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("name", place_name),
                ("count", "10"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ResolveError::Status { status, body: truncate_body(&body) });
        }

        let parsed: GeoResponse = serde_json::from_str(&body)?;
        debug!(place_name, candidates = parsed.results.len(), "geocoding response");

        // First acceptable candidate wins, in the order the service returned them.
        parsed
            .results
            .into_iter()
            .find(|c| self.accepts(c))
            .and_then(|c| {
                Some(Place { latitude: c.latitude?, longitude: c.longitude?, name: c.name? })
            })
            .ok_or_else(|| ResolveError::NotFound(place_name.to_string()))
    }
}
