//! `OpenMeteo` daily forecast client and response conversion

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::WeatherForecastProvider;
use super::analysis::analyze_forecast;
use crate::http::HttpFetcher;
use crate::models::{DayForecast, Location, WeatherCode, WeatherReport};

/// Overcast: a missing code counts as neither good nor bad
const MISSING_CODE: u8 = 3;

/// Daily forecast response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub daily: Option<DailyData>,
}

/// Daily weather data from `OpenMeteo`
#[derive(Debug, Default, Deserialize)]
pub struct DailyData {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(rename = "weathercode", default)]
    pub weather_code: Vec<Option<u8>>,
    #[serde(rename = "temperature_2m_max", default)]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min", default)]
    pub temperature_min: Vec<Option<f64>>,
    #[serde(rename = "precipitation_sum", default)]
    pub precipitation: Vec<Option<f64>>,
    #[serde(rename = "precipitation_probability_max", default)]
    pub precipitation_probability: Vec<Option<f64>>,
}

pub struct OpenMeteoWeatherProvider {
    fetcher: HttpFetcher,
    base_url: String,
}

impl OpenMeteoWeatherProvider {
    #[must_use]
    pub fn new(fetcher: HttpFetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    fn url(&self, location: &Location, days: usize) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&daily=weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum,precipitation_probability_max&timezone=auto&forecast_days={}",
            self.base_url, location.latitude, location.longitude, days
        )
    }
}

#[async_trait]
impl WeatherForecastProvider for OpenMeteoWeatherProvider {
    #[instrument(skip(self), fields(lat = location.latitude, lon = location.longitude))]
    async fn forecast(&self, location: &Location, days: usize) -> Option<WeatherReport> {
        let response: ForecastResponse = match self.fetcher.get_json(&self.url(location, days)).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Forecast request failed: {:#}", e);
                return None;
            }
        };

        let report = WeatherReport::from_openmeteo(&response);
        if report.is_none() {
            warn!("Forecast response carried no daily rows");
        }
        report
    }
}

impl WeatherReport {
    /// Create a report from an `OpenMeteo` daily response.
    /// Rows with unparseable dates are skipped; no rows yields `None`.
    #[must_use]
    pub fn from_openmeteo(response: &ForecastResponse) -> Option<Self> {
        let daily = response.daily.as_ref()?;

        let forecast: Vec<DayForecast> = daily
            .time
            .iter()
            .enumerate()
            .filter_map(|(i, time)| {
                let date = NaiveDate::parse_from_str(time, "%Y-%m-%d").ok()?;
                let code = daily.weather_code.get(i).copied().flatten().unwrap_or(MISSING_CODE);
                let probability = daily
                    .precipitation_probability
                    .get(i)
                    .copied()
                    .flatten()
                    .map(|p| p.clamp(0.0, 100.0).round() as u8);

                Some(
                    DayForecast::new(date, WeatherCode(code))
                        .with_temperatures(
                            daily.temperature_min.get(i).copied().flatten(),
                            daily.temperature_max.get(i).copied().flatten(),
                        )
                        .with_precipitation(daily.precipitation.get(i).copied().flatten(), probability),
                )
            })
            .collect();

        if forecast.is_empty() {
            return None;
        }

        debug!("Parsed {} forecast days", forecast.len());
        let analysis = analyze_forecast(&forecast);
        Some(Self { forecast, analysis })
    }
}
