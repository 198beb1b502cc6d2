use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{error::ForecastError, model::DailySeries};

use super::{ForecastSource, truncate_body};

/// Open-Meteo daily max/min forecast in Fahrenheit.
#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    base_url: String,
    forecast_days: u32,
    http: Client,
}

impl OpenMeteoForecast {
    pub fn new(http: Client, base_url: impl Into<String>, forecast_days: u32) -> Self {
        Self { base_url: base_url.into(), forecast_days, http }
    }
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    daily: Option<OmDaily>,
}

#[async_trait]
impl ForecastSource for OpenMeteoForecast {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<DailySeries, ForecastError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("daily", "temperature_2m_max,temperature_2m_min".to_string()),
                ("temperature_unit", "fahrenheit".to_string()),
                ("forecast_days", self.forecast_days.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ForecastError::Status { status, body: truncate_body(&body) });
        }

        let parsed: OmForecastResponse = serde_json::from_str(&body)?;
        let daily = parsed.daily.ok_or(ForecastError::MissingDaily)?;
        debug!(latitude, longitude, days = daily.time.len(), "forecast response");

        DailySeries::new(daily.time, daily.temperature_2m_max, daily.temperature_2m_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(server: &MockServer) -> OpenMeteoForecast {
        OpenMeteoForecast::new(Client::new(), format!("{}/v1/forecast", server.uri()), 14)
    }

    #[tokio::test]
    async fn parses_daily_series_with_gaps() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "25.77"))
            .and(query_param("longitude", "-80.19"))
            .and(query_param("temperature_unit", "fahrenheit"))
            .and(query_param("forecast_days", "14"))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": 25.77,
                "longitude": -80.19,
                "daily": {
                    "time": ["2024-06-01", "2024-06-02", "2024-06-03"],
                    "temperature_2m_max": [91.2, null, 93.0],
                    "temperature_2m_min": [77.0, 78.1, null]
                }
            })))
            .mount(&server)
            .await;

        let series = source(&server).fetch(25.77, -80.19).await.unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.highs(), &[Some(91.2), None, Some(93.0)]);
        let (date, _, low) = series.days().nth(2).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(low, None);
    }

    #[tokio::test]
    async fn missing_daily_block() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": false
            })))
            .mount(&server)
            .await;

        let err = source(&server).fetch(25.0, -80.0).await.unwrap_err();
        assert!(matches!(err, ForecastError::MissingDaily));
    }

    #[tokio::test]
    async fn mismatched_columns_are_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "daily": {
                    "time": ["2024-06-01", "2024-06-02"],
                    "temperature_2m_max": [91.2],
                    "temperature_2m_min": [77.0, 78.1]
                }
            })))
            .mount(&server)
            .await;

        let err = source(&server).fetch(25.0, -80.0).await.unwrap_err();
        assert!(matches!(err, ForecastError::Malformed(_)));
    }

    #[tokio::test]
    async fn bad_request_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": true,
                "reason": "Latitude must be in range of -90 to 90°."
            })))
            .mount(&server)
            .await;

        let err = source(&server).fetch(200.0, -80.0).await.unwrap_err();
        match err {
            ForecastError::Status { status, body } => {
                assert_eq!(status.as_u16(), 400);
                assert!(body.contains("Latitude"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparsable_date_is_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "daily": {
                    "time": ["June first"],
                    "temperature_2m_max": [91.2],
                    "temperature_2m_min": [77.0]
                }
            })))
            .mount(&server)
            .await;

        let err = source(&server).fetch(25.0, -80.0).await.unwrap_err();
        assert!(matches!(err, ForecastError::Parse(_)));
    }
}
