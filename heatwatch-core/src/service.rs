//! Per-city pipeline: resolve, fetch, analyze.

use std::num::NonZeroU32;

use tracing::{info, warn};

use crate::{
    Config,
    analyzer::analyze,
    error::LookupError,
    model::{AnalysisRequest, AnalysisResponse, AnalysisResult},
    provider::{ForecastSource, LocationResolver, OpenMeteoForecast, OpenMeteoGeocoder, http_client},
};

/// Runs cities through a resolver and a forecast source, one at a time.
#[derive(Debug)]
pub struct Tracker {
    resolver: Box<dyn LocationResolver>,
    forecast: Box<dyn ForecastSource>,
}

impl Tracker {
    pub fn new(resolver: Box<dyn LocationResolver>, forecast: Box<dyn ForecastSource>) -> Self {
        Self { resolver, forecast }
    }

    /// Construct the Open-Meteo backed tracker from config.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = http_client(config)?;

        let resolver = OpenMeteoGeocoder::new(
            http.clone(),
            config.endpoints.geocoding_url.clone(),
            config.location.clone(),
        );
        let forecast = OpenMeteoForecast::new(
            http,
            config.endpoints.forecast_url.clone(),
            config.endpoints.forecast_days,
        );

        Ok(Self::new(Box::new(resolver), Box::new(forecast)))
    }

    pub async fn analyze_city(
        &self,
        city: &str,
        threshold: i32,
        consecutive_days: NonZeroU32,
    ) -> Result<AnalysisResult, LookupError> {
        let place = self
            .resolver
            .resolve(city)
            .await
            .map_err(|source| LookupError::Resolution { city: city.to_string(), source })?;

        let series = self
            .forecast
            .fetch(place.latitude, place.longitude)
            .await
            .map_err(|source| LookupError::Forecast { city: city.to_string(), source })?;

        let analysis = analyze(&series, threshold, consecutive_days);
        info!(
            city,
            resolved = %place.name,
            meets_criteria = analysis.meets_criteria,
            "analyzed forecast"
        );

        Ok(analysis.named(place.name))
    }

    /// Analyze every requested city in order, leaving out the ones that fail.
    pub async fn analyze_all(&self, request: &AnalysisRequest) -> AnalysisResponse {
        let mut results = Vec::with_capacity(request.cities.len());

        for city in &request.cities {
            match self.analyze_city(city, request.threshold, request.consecutive_days).await {
                Ok(result) => results.push(result),
                Err(err) => warn!(error = %err, cause = %source_of(&err), "skipping city"),
            }
        }

        AnalysisResponse { results }
    }
}

fn source_of(err: &LookupError) -> String {
    std::error::Error::source(err).map(ToString::to_string).unwrap_or_default()
}
