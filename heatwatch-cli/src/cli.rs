use std::num::NonZeroU32;

use clap::Parser;
use heatwatch_core::{Config, LookupError, Tracker};
use tracing::{debug, warn};

use crate::report::Report;

/// Streak length the command-line report checks for.
const CONSECUTIVE_DAYS: NonZeroU32 = match NonZeroU32::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// Report cities with a run of hot days in the 14-day forecast.
#[derive(Debug, Parser)]
#[command(name = "heatwatch", version, about = "Heat streak tracker")]
pub struct Cli {
    /// Target high temperature threshold in Fahrenheit.
    #[arg(allow_negative_numbers = true)]
    pub threshold: i32,

    /// Names of cities to check.
    #[arg(required = true)]
    pub cities: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load().unwrap_or_else(|err| {
            warn!("{err:#}; using default configuration");
            Config::default()
        });
        let tracker = Tracker::from_config(&config)?;

        print!("{}", build_report(&tracker, self.threshold, &self.cities).await);

        Ok(())
    }
}

/// Run each city through the tracker, keeping only those that meet the criteria.
pub async fn build_report(tracker: &Tracker, threshold: i32, cities: &[String]) -> Report {
    let mut report = Report {
        threshold,
        consecutive_days: CONSECUTIVE_DAYS.get(),
        ..Report::default()
    };

    for city in cities {
        match tracker.analyze_city(city, threshold, CONSECUTIVE_DAYS).await {
            Ok(result) if result.meets_criteria => report.qualifying.push(result),
            Ok(_) => {}
            Err(err) => {
                debug!(error = ?err, "lookup failed");
                report.notices.push(format!("Skipping {}: {}", err.city(), skip_reason(&err)));
            }
        }
    }

    report
}

fn skip_reason(err: &LookupError) -> &'static str {
    match err {
        LookupError::Resolution { .. } => "Could not resolve location.",
        LookupError::Forecast { .. } => "Could not fetch weather data.",
    }
}
