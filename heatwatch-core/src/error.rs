use reqwest::StatusCode;
use thiserror::Error;

/// Failure to turn a place name into coordinates.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No candidate in the target region matched '{0}'")]
    NotFound(String),

    #[error("Geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Geocoding request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse geocoding JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to obtain a usable daily series for a coordinate pair.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Forecast request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Forecast request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse forecast JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Forecast response has no daily block")]
    MissingDaily,

    #[error("Forecast columns have mismatched lengths: {0}")]
    Malformed(String),
}

/// Why a single city was left out of the results.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Could not resolve location for {city}")]
    Resolution {
        city: String,
        #[source]
        source: ResolveError,
    },

    #[error("Could not fetch weather data for {city}")]
    Forecast {
        city: String,
        #[source]
        source: ForecastError,
    },
}

impl LookupError {
    pub fn city(&self) -> &str {
        match self {
            Self::Resolution { city, .. } | Self::Forecast { city, .. } => city,
        }
    }
}
