//! Daylight samples and the deltas derived from them

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Seconds in a civil day, the upper bound for day length
pub const SECONDS_PER_DAY: i64 = 86_400;

/// One day of the daylight time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaylightSample {
    pub date: NaiveDate,
    /// Daylight duration in seconds
    pub daylight_seconds: f64,
    /// Local wall-clock sunrise, absent during polar day or night
    pub sunrise: Option<NaiveDateTime>,
    /// Local wall-clock sunset, absent during polar day or night
    pub sunset: Option<NaiveDateTime>,
}

/// Day length for one coordinate and day, and how it compares to reference days
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolarDelta {
    /// Always within `0..=86400`
    pub day_length_seconds: i64,
    /// Today minus yesterday
    pub delta_daily_seconds: i64,
    /// Today minus seven days ago
    pub delta_weekly_seconds: i64,
    /// Today minus the most recent winter solstice
    pub delta_solstice_seconds: i64,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
}

impl SolarDelta {
    /// Day length as `"{h}h {m}m"`
    #[must_use]
    pub fn format_day_length(&self) -> String {
        format_hours_minutes(self.day_length_seconds)
    }

    /// Signed whole minutes gained since yesterday, floored
    #[must_use]
    pub fn delta_daily_minutes(&self) -> i64 {
        self.delta_daily_seconds.div_euclid(60)
    }

    #[must_use]
    pub fn delta_weekly_minutes(&self) -> i64 {
        self.delta_weekly_seconds.div_euclid(60)
    }

    #[must_use]
    pub fn delta_solstice_minutes(&self) -> i64 {
        self.delta_solstice_seconds.div_euclid(60)
    }
}

/// Format a non-negative number of seconds as `"{h}h {m}m"`
#[must_use]
pub fn format_hours_minutes(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Format an optional wall-clock time as `HH:MM`, `--:--` when absent
#[must_use]
pub fn format_clock_time(time: Option<NaiveDateTime>) -> String {
    time.map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
}
