//! Plain-text rendering of qualifying cities.

use std::fmt;

use heatwatch_core::{AnalysisResult, DailyRecord};

const RULE_WIDTH: usize = 47;

/// Everything the command prints: skip notices, then a table per qualifying city.
#[derive(Debug, Default)]
pub struct Report {
    pub threshold: i32,
    pub consecutive_days: u32,
    pub notices: Vec<String>,
    pub qualifying: Vec<AnalysisResult>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { threshold, consecutive_days, .. } = self;

        for notice in &self.notices {
            writeln!(f, "{notice}")?;
        }

        if self.qualifying.is_empty() {
            return writeln!(
                f,
                "\nNo cities found with at least {consecutive_days} consecutive days >= {threshold}°F."
            );
        }

        for city in &self.qualifying {
            writeln!(f, "\n--- {} ---", city.name)?;
            writeln!(
                f,
                "Meets criteria: At least {consecutive_days} consecutive days with high >= {threshold}°F"
            )?;
            writeln!(f, "{:<12} | {:<4} | {:<6} | {:<6} | Match?", "Date", "Day", "High", "Low")?;
            writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

            for day in &city.forecast {
                write_row(f, day)?;
            }
        }

        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, day: &DailyRecord) -> fmt::Result {
    writeln!(
        f,
        "{:<12} | {:<4} | {:<6} | {:<6} | {:<5}",
        day.date.to_string(),
        day.day_of_week,
        temp(day.high),
        temp(day.low),
        if day.is_match { "*" } else { "" }
    )
}

fn temp(value: Option<i32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |t| format!("{t}°F"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, high: Option<i32>, low: Option<i32>, is_match: bool) -> DailyRecord {
        let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        DailyRecord {
            date,
            day_of_week: date.format("%a").to_string(),
            high,
            low,
            is_match,
        }
    }

    fn report(qualifying: Vec<AnalysisResult>, threshold: i32) -> Report {
        Report { threshold, consecutive_days: 3, notices: Vec::new(), qualifying }
    }

    #[test]
    fn no_results_line() {
        assert_eq!(
            report(vec![], 95).to_string(),
            "\nNo cities found with at least 3 consecutive days >= 95°F.\n"
        );
    }

    #[test]
    fn notices_come_first() {
        let mut r = report(vec![], 95);
        r.notices.push("Skipping Atlantis: Could not resolve location.".to_string());

        assert_eq!(
            r.to_string(),
            "Skipping Atlantis: Could not resolve location.\n\
             \nNo cities found with at least 3 consecutive days >= 95°F.\n"
        );
    }

    #[test]
    fn table_layout() {
        let results = vec![AnalysisResult {
            name: "Miami".to_string(),
            meets_criteria: true,
            forecast: vec![record(1, Some(96), Some(78), true), record(2, None, Some(-4), false)],
        }];

        let text = report(results, 95).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "--- Miami ---");
        assert_eq!(lines[2], "Meets criteria: At least 3 consecutive days with high >= 95°F");
        assert_eq!(lines[3], "Date         | Day  | High   | Low    | Match?");
        assert_eq!(lines[4], "-".repeat(47));
        assert_eq!(lines[5], "2024-06-01   | Sat  | 96°F   | 78°F   | *    ");
        assert_eq!(lines[6], "2024-06-02   | Sun  | N/A    | -4°F   |      ");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn each_city_gets_its_own_block() {
        let city = |name: &str| AnalysisResult {
            name: name.to_string(),
            meets_criteria: true,
            forecast: vec![record(1, Some(100), None, true)],
        };

        let text = report(vec![city("Miami"), city("Key West")], 99).to_string();
        assert!(text.contains("--- Miami ---"));
        assert!(text.contains("--- Key West ---"));
        assert!(text.contains("| N/A    |"));
        assert_eq!(text.matches("Meets criteria").count(), 2);
    }
}
