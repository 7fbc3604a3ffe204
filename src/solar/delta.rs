//! Turning a daylight time series into day-length deltas

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::solar::{DaylightSample, SECONDS_PER_DAY, SolarDelta};

/// Longest history the forecast API serves
pub const MAX_LOOKBACK_DAYS: i64 = 92;

/// Most recent Dec 21 on or before `today`
#[must_use]
pub fn last_winter_solstice(today: NaiveDate) -> NaiveDate {
    let this_year = NaiveDate::from_ymd_opt(today.year(), 12, 21);
    match this_year {
        Some(solstice) if solstice <= today => solstice,
        _ => NaiveDate::from_ymd_opt(today.year() - 1, 12, 21).unwrap_or(today),
    }
}

/// Days of history to request, reaching back to the last winter solstice
#[must_use]
pub fn solstice_lookback_days(today: NaiveDate) -> i64 {
    (today - last_winter_solstice(today))
        .num_days()
        .clamp(0, MAX_LOOKBACK_DAYS)
}

/// Derive deltas from samples ordered by date, oldest first, ending with today.
///
/// Yesterday and last week are looked up by date; a missing reference day
/// gives a zero delta. The oldest sample stands in for the solstice once the
/// series holds more than a week. Returns `None` for an empty series.
#[must_use]
pub fn derive_solar_delta(samples: &[DaylightSample]) -> Option<SolarDelta> {
    let today = samples.last()?;
    let seconds = |sample: &DaylightSample| sample.daylight_seconds.round() as i64;
    let today_len = seconds(today);

    let delta_to = |days_back: i64| {
        let date = today.date - Duration::days(days_back);
        samples
            .iter()
            .rev()
            .find(|sample| sample.date == date)
            .map_or(0, |reference| today_len - seconds(reference))
    };

    let delta_daily = delta_to(1);
    let delta_weekly = delta_to(7);
    let delta_solstice = match samples.first() {
        Some(anchor) if samples.len() > 7 => today_len - seconds(anchor),
        _ => 0,
    };

    Some(SolarDelta {
        day_length_seconds: today_len.clamp(0, SECONDS_PER_DAY),
        delta_daily_seconds: delta_daily,
        delta_weekly_seconds: delta_weekly,
        delta_solstice_seconds: delta_solstice,
        sunrise: today.sunrise,
        sunset: today.sunset,
    })
}
