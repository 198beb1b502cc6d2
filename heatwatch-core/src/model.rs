use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// A place returned by the location resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    /// Canonical name, may differ from the caller's spelling.
    pub name: String,
}

/// Daily maximum/minimum temperatures in chronological order.
///
/// The three columns always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    dates: Vec<NaiveDate>,
    highs: Vec<Option<f64>>,
    lows: Vec<Option<f64>>,
}

impl DailySeries {
    pub fn new(
        dates: Vec<NaiveDate>,
        highs: Vec<Option<f64>>,
        lows: Vec<Option<f64>>,
    ) -> Result<Self, ForecastError> {
        if dates.len() != highs.len() || dates.len() != lows.len() {
            return Err(ForecastError::Malformed(format!(
                "{} dates, {} highs, {} lows",
                dates.len(),
                highs.len(),
                lows.len()
            )));
        }

        Ok(Self { dates, highs, lows })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn highs(&self) -> &[Option<f64>] {
        &self.highs
    }

    /// Iterate `(date, high, low)` triples in order.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, Option<f64>, Option<f64>)> + '_ {
        self.dates
            .iter()
            .zip(&self.highs)
            .zip(&self.lows)
            .map(|((date, high), low)| (*date, *high, *low))
    }
}

/// One annotated forecast day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    #[serde(rename = "day")]
    pub day_of_week: String,
    pub high: Option<i32>,
    pub low: Option<i32>,
    pub is_match: bool,
}

/// One city's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    pub meets_criteria: bool,
    pub forecast: Vec<DailyRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub threshold: i32,
    pub cities: Vec<String>,
    pub consecutive_days: NonZeroU32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub results: Vec<AnalysisResult>,
}
