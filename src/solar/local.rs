//! Daylight series computed in-process with the `sunrise` crate
//!
//! Times are UTC wall-clock; there is no timezone lookup on this path.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use sunrise::{Coordinates, SolarDay, SolarEvent};
use tracing::{instrument, warn};

use super::SolarDeltaProvider;
use super::delta::{derive_solar_delta, solstice_lookback_days};
use crate::models::solar::SECONDS_PER_DAY;
use crate::models::{DaylightSample, Location, SolarDelta};

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSolarProvider;

#[async_trait]
impl SolarDeltaProvider for LocalSolarProvider {
    #[instrument(skip(self), fields(lat = location.latitude, lon = location.longitude))]
    async fn solar_delta(&self, location: &Location, today: NaiveDate) -> Option<SolarDelta> {
        let Some(samples) = daylight_series(location, today) else {
            warn!("Invalid coordinates for local solar computation");
            return None;
        };
        derive_solar_delta(&samples)
    }
}

/// One sample per day from the last winter solstice (capped) through `today`
#[must_use]
pub fn daylight_series(location: &Location, today: NaiveDate) -> Option<Vec<DaylightSample>> {
    let lookback = solstice_lookback_days(today);

    (0..=lookback)
        .rev()
        .map(|days_back| daylight_sample(location, today - chrono::Duration::days(days_back)))
        .collect()
}

fn daylight_sample(location: &Location, date: NaiveDate) -> Option<DaylightSample> {
    let coordinates = Coordinates::new(location.latitude, location.longitude)?;
    let solar_day = SolarDay::new(coordinates, date);
    let sunrise = solar_day.event_time(SolarEvent::Sunrise);
    let sunset = solar_day.event_time(SolarEvent::Sunset);

    let daylight_seconds = match (sunrise, sunset) {
        (Some(rise), Some(set)) => (set - rise).num_seconds().clamp(0, SECONDS_PER_DAY),
        _ if is_polar_day(location.latitude, date) => SECONDS_PER_DAY,
        _ => 0,
    };

    Some(DaylightSample {
        date,
        daylight_seconds: daylight_seconds as f64,
        sunrise: sunrise.map(|t| t.naive_utc()),
        sunset: sunset.map(|t| t.naive_utc()),
    })
}

/// Whether a missing sunrise/sunset means midnight sun rather than polar night
fn is_polar_day(latitude: f64, date: NaiveDate) -> bool {
    let northern_summer = (4..=9).contains(&date.month());
    (latitude >= 0.0) == northern_summer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_day_detection() {
        let june = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let december = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        assert!(is_polar_day(78.0, june));
        assert!(!is_polar_day(78.0, december));
        assert!(is_polar_day(-78.0, december));
    }

    #[test]
    fn test_series_spans_back_to_solstice() {
        let location = Location::new(47.37, 8.54, "Zurich".into());
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let samples = daylight_series(&location, today).unwrap();
        assert_eq!(samples.len(), 26);
        assert_eq!(samples[0].date, NaiveDate::from_ymd_opt(2023, 12, 21).unwrap());
        assert_eq!(samples.last().unwrap().date, today);
    }

    #[test]
    fn test_midlatitude_january_gains_light() {
        let location = Location::new(47.37, 8.54, "Zurich".into());
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let delta = derive_solar_delta(&daylight_series(&location, today).unwrap()).unwrap();
        assert!(delta.day_length_seconds > 8 * 3600 && delta.day_length_seconds < 10 * 3600);
        assert!(delta.delta_daily_seconds > 0);
        assert!(delta.delta_solstice_seconds > 0);
        assert!(delta.sunrise.unwrap() < delta.sunset.unwrap());
    }

    #[test]
    fn test_invalid_coordinates() {
        let location = Location::new(120.0, 8.54, "Nowhere".into());
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(daylight_series(&location, today).is_none());
    }
}
