// Time-range selector for the trending feed.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Window of repository creation dates to consider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    Daily,
    #[default]
    Weekly,
    Monthly,
    /// Unrecognized selector: searched like `weekly`, reported as typed.
    Other(String),
}

impl TimeRange {
    /// Parse a selector. Never fails; empty input means the default range.
    pub fn parse(selector: &str) -> Self {
        match selector {
            "" => TimeRange::default(),
            "daily" => TimeRange::Daily,
            "weekly" => TimeRange::Weekly,
            "monthly" => TimeRange::Monthly,
            other => TimeRange::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TimeRange::Daily => "daily",
            TimeRange::Weekly => "weekly",
            TimeRange::Monthly => "monthly",
            TimeRange::Other(selector) => selector,
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            TimeRange::Daily => 1,
            TimeRange::Weekly | TimeRange::Other(_) => 7,
            TimeRange::Monthly => 30,
        }
    }

    /// Earliest creation date in the window, at calendar-day granularity (UTC).
    pub fn cutoff(&self, now: DateTime<Utc>) -> NaiveDate {
        (now - Duration::days(self.days())).date_naive()
    }

    /// Cache key for this range at `now`. Changes once per day.
    pub fn cache_key(&self, now: DateTime<Utc>) -> String {
        format!("trending-{}-{}", self.as_str(), self.cutoff(now).format("%Y-%m-%d"))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TimeRange {
    fn from(selector: &str) -> Self {
        TimeRange::parse(selector)
    }
}
