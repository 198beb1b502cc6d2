//! Consecutive-day heat streak detection.

use std::num::NonZeroU32;

use crate::model::{AnalysisResult, DailyRecord, DailySeries};

/// Verdict and annotated forecast for one series, before a name is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub meets_criteria: bool,
    pub forecast: Vec<DailyRecord>,
}

impl Analysis {
    pub fn named(self, name: impl Into<String>) -> AnalysisResult {
        AnalysisResult {
            name: name.into(),
            meets_criteria: self.meets_criteria,
            forecast: self.forecast,
        }
    }
}

/// Check whether `series` holds at least `consecutive_days` contiguous days
/// whose high is at or above `threshold`, and annotate every day.
///
/// A missing high breaks a streak the same way a cool day does. Threshold
/// comparisons use the unrounded temperature; only the displayed `high` and
/// `low` are rounded.
pub fn analyze(series: &DailySeries, threshold: i32, consecutive_days: NonZeroU32) -> Analysis {
    let threshold = f64::from(threshold);

    Analysis {
        meets_criteria: has_streak(series.highs(), threshold, consecutive_days.get()),
        forecast: series
            .days()
            .map(|(date, high, low)| DailyRecord {
                date,
                day_of_week: date.format("%a").to_string(),
                high: high.map(round_temp),
                low: low.map(round_temp),
                is_match: is_hot(high, threshold),
            })
            .collect(),
    }
}

fn has_streak(highs: &[Option<f64>], threshold: f64, needed: u32) -> bool {
    let mut run = 0;

    for &high in highs {
        if is_hot(high, threshold) {
            run += 1;
            if run >= needed {
                return true;
            }
        } else {
            run = 0;
        }
    }

    false
}

fn is_hot(high: Option<f64>, threshold: f64) -> bool {
    high.is_some_and(|t| t >= threshold)
}

fn round_temp(t: f64) -> i32 {
    t.round() as i32
}
