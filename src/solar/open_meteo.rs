//! Daylight series from the Open-Meteo forecast API

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::SolarDeltaProvider;
use super::delta::{derive_solar_delta, solstice_lookback_days};
use crate::http::HttpFetcher;
use crate::models::{DaylightSample, Location, SolarDelta};

/// Daily response subset requested by this provider
#[derive(Debug, Deserialize)]
pub struct DaylightResponse {
    pub daily: Option<DailyDaylight>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DailyDaylight {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub daylight_duration: Vec<Option<f64>>,
    #[serde(default)]
    pub sunrise: Vec<Option<String>>,
    #[serde(default)]
    pub sunset: Vec<Option<String>>,
}

pub struct OpenMeteoSolarProvider {
    fetcher: HttpFetcher,
    base_url: String,
}

impl OpenMeteoSolarProvider {
    #[must_use]
    pub fn new(fetcher: HttpFetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    fn url(&self, location: &Location, today: NaiveDate) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&daily=daylight_duration,sunrise,sunset&timezone=auto&past_days={}&forecast_days=1",
            self.base_url,
            location.latitude,
            location.longitude,
            solstice_lookback_days(today)
        )
    }
}

#[async_trait]
impl SolarDeltaProvider for OpenMeteoSolarProvider {
    #[instrument(skip(self), fields(lat = location.latitude, lon = location.longitude))]
    async fn solar_delta(&self, location: &Location, today: NaiveDate) -> Option<SolarDelta> {
        let response: DaylightResponse = match self.fetcher.get_json(&self.url(location, today)).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Daylight request failed: {:#}", e);
                return None;
            }
        };

        let samples = samples_from_response(&response, today);
        debug!("Received {} daylight samples", samples.len());
        derive_solar_delta(&samples)
    }
}

fn parse_local_time(value: Option<&Option<String>>) -> Option<NaiveDateTime> {
    let value = value?.as_deref()?;
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

/// Convert the response into samples, oldest first, ending on the location's
/// local today.
///
/// Rows are dated in local time, so the last row can be one day ahead of the
/// UTC `today`; anything later is dropped. Rows without a duration are skipped.
/// When the response carries no dates the rows are assumed to end on `today`.
#[must_use]
pub fn samples_from_response(response: &DaylightResponse, today: NaiveDate) -> Vec<DaylightSample> {
    let latest = today + chrono::Duration::days(1);
    let Some(daily) = &response.daily else {
        return Vec::new();
    };

    let count = daily.daylight_duration.len();
    let mut samples: Vec<DaylightSample> = daily
        .daylight_duration
        .iter()
        .enumerate()
        .filter_map(|(i, duration)| {
            let duration = (*duration)?;
            let date = daily
                .time
                .get(i)
                .and_then(|t| NaiveDate::parse_from_str(t, "%Y-%m-%d").ok())
                .unwrap_or_else(|| today - chrono::Duration::days((count - 1 - i) as i64));
            Some(DaylightSample {
                date,
                daylight_seconds: duration,
                sunrise: parse_local_time(daily.sunrise.get(i)),
                sunset: parse_local_time(daily.sunset.get(i)),
            })
        })
        .filter(|sample| sample.date <= latest)
        .collect();

    samples.sort_by_key(|sample| sample.date);
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DaylightResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_samples_without_time_column() {
        let response = parse(
            r#"{"daily": {
                "daylight_duration": [28800, 29000, 29200],
                "sunrise": ["2024-01-15T08:00", "2024-01-16T07:58", "2024-01-17T07:56"],
                "sunset": ["2024-01-15T16:00", "2024-01-16T16:03", "2024-01-17T16:06"]
            }}"#,
        );
        let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let samples = samples_from_response(&response, today);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2].date, today);

        let delta = derive_solar_delta(&samples).unwrap();
        assert_eq!(delta.day_length_seconds, 29_200);
        assert_eq!(delta.delta_daily_seconds, 200);
        assert_eq!(
            delta.sunrise.unwrap().format("%H:%M").to_string(),
            "07:56"
        );
    }

    #[test]
    fn test_missing_daily_block_is_empty() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        assert!(samples_from_response(&parse(r#"{"daily": {}}"#), today).is_empty());
        assert!(samples_from_response(&parse("{}"), today).is_empty());
        assert!(derive_solar_delta(&samples_from_response(&parse("{}"), today)).is_none());
    }

    #[test]
    fn test_null_yesterday_gives_zero_daily_delta() {
        let response = parse(
            r#"{"daily": {
                "time": ["2024-01-15", "2024-01-16", "2024-01-17"],
                "daylight_duration": [28800, null, 29200],
                "sunrise": [null, null, null],
                "sunset": [null, null, null]
            }}"#,
        );
        let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let samples = samples_from_response(&response, today);
        assert_eq!(samples.len(), 2);
        assert!(samples[1].sunrise.is_none());

        let delta = derive_solar_delta(&samples).unwrap();
        assert_eq!(delta.day_length_seconds, 29_200);
        assert_eq!(delta.delta_daily_seconds, 0);
    }

    #[test]
    fn test_local_date_ahead_of_utc() {
        // Sydney shortly after local midnight: the newest row is already Jan 18
        let response = parse(
            r#"{"daily": {
                "time": ["2024-01-16", "2024-01-17", "2024-01-18"],
                "daylight_duration": [50000, 49900, 49800],
                "sunrise": ["2024-01-16T06:05", "2024-01-17T06:06", "2024-01-18T06:07"],
                "sunset": [null, null, null]
            }}"#,
        );
        let utc_today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let samples = samples_from_response(&response, utc_today);
        assert_eq!(samples.last().unwrap().date, NaiveDate::from_ymd_opt(2024, 1, 18).unwrap());

        let delta = derive_solar_delta(&samples).unwrap();
        assert_eq!(delta.day_length_seconds, 49_800);
        assert_eq!(delta.delta_daily_seconds, -100);
        assert_eq!(delta.sunrise.unwrap().format("%H:%M").to_string(), "06:07");
    }

    #[test]
    fn test_rows_beyond_local_today_are_dropped() {
        let response = parse(
            r#"{"daily": {
                "time": ["2024-01-17", "2024-01-18", "2024-01-19"],
                "daylight_duration": [29200, 29400, 29600]
            }}"#,
        );
        let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let samples = samples_from_response(&response, today);
        assert_eq!(samples.len(), 2);
        assert_eq!(derive_solar_delta(&samples).unwrap().day_length_seconds, 29_400);
    }

    #[test]
    fn test_request_url_reaches_back_to_solstice() {
        let config = crate::config::ApiConfig::default();
        let provider = OpenMeteoSolarProvider::new(
            HttpFetcher::new(&config).unwrap(),
            "https://api.open-meteo.com/v1",
        );
        let location = Location::new(47.37, 8.54, "Zurich".into());
        let url = provider.url(&location, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(url.contains("past_days=25"));
        assert!(url.contains("daily=daylight_duration,sunrise,sunset"));
    }
}
