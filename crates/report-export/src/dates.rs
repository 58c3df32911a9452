use std::fmt;

use chrono::{Duration, NaiveDate};

use crate::config::TimeFrame;

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_date(self.start), format_date(self.end))
    }
}

/// Resolves the day offsets of `frame` against `today`.
pub fn date_range(today: NaiveDate, frame: &TimeFrame) -> DateRange {
    DateRange {
        start: today + Duration::days(frame.start),
        end: today + Duration::days(frame.end),
    }
}

pub fn get_range(today: NaiveDate, frame: &TimeFrame) -> String {
    date_range(today, frame).to_string()
}
