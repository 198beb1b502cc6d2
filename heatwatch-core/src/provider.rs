use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{
    Config,
    error::{ForecastError, ResolveError},
    model::{DailySeries, Place},
};

pub mod forecast;
pub mod geocoding;

pub use forecast::OpenMeteoForecast;
pub use geocoding::OpenMeteoGeocoder;

/// Maps a free-text place name to coordinates.
#[async_trait]
pub trait LocationResolver: Send + Sync + Debug {
    async fn resolve(&self, place_name: &str) -> Result<Place, ResolveError>;
}

/// Maps coordinates to a daily temperature series.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<DailySeries, ForecastError>;
}

/// Build the shared HTTP client, honouring the configured timeout.
pub fn http_client(config: &Config) -> reqwest::Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.http_timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
