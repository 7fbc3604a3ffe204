//! Daily forecast model and the week-level analysis derived from it

use super::weather::{WeatherCategory, WeatherCode};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One forecast day
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayForecast {
    pub date: NaiveDate,
    /// English weekday name, e.g. "Wednesday"
    pub weekday_name: String,
    pub weather_code: WeatherCode,
    /// Daily maximum temperature in Celsius
    pub temp_max: Option<f64>,
    /// Daily minimum temperature in Celsius
    pub temp_min: Option<f64>,
    /// Precipitation sum in mm
    pub precipitation: Option<f64>,
    /// Maximum precipitation probability in percent
    pub precipitation_probability: Option<u8>,
    pub is_good: bool,
    pub is_bad: bool,
}

impl DayForecast {
    /// Create a day and derive its classification from the weather code
    #[must_use]
    pub fn new(date: NaiveDate, weather_code: WeatherCode) -> Self {
        Self {
            date,
            weekday_name: date.format("%A").to_string(),
            weather_code,
            temp_max: None,
            temp_min: None,
            precipitation: None,
            precipitation_probability: None,
            is_good: weather_code.is_good(),
            is_bad: weather_code.is_bad(),
        }
    }

    #[must_use]
    pub fn with_temperatures(mut self, temp_min: Option<f64>, temp_max: Option<f64>) -> Self {
        self.temp_min = temp_min;
        self.temp_max = temp_max;
        self
    }

    #[must_use]
    pub fn with_precipitation(mut self, sum: Option<f64>, probability: Option<u8>) -> Self {
        self.precipitation = sum;
        self.precipitation_probability = probability;
        self
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        chrono::Datelike::weekday(&self.date)
    }

    #[must_use]
    pub fn category(&self) -> WeatherCategory {
        self.weather_code.category()
    }
}

/// Direction and strength of the temperature change over the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TempTrend {
    #[default]
    Stable,
    Warming,
    WarmingStrong,
    Cooling,
    CoolingStrong,
}

impl TempTrend {
    #[must_use]
    pub fn is_warming(self) -> bool {
        matches!(self, TempTrend::Warming | TempTrend::WarmingStrong)
    }

    #[must_use]
    pub fn is_cooling(self) -> bool {
        matches!(self, TempTrend::Cooling | TempTrend::CoolingStrong)
    }

    #[must_use]
    pub fn is_strong(self) -> bool {
        matches!(self, TempTrend::WarmingStrong | TempTrend::CoolingStrong)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendOutlook {
    Good,
    Bad,
    #[default]
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekCharacter {
    MostlyGood,
    MostlyBad,
    GoodStretch,
    GreyStretch,
    #[default]
    Mixed,
}

/// A future forecast day referenced by the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRef {
    pub name: String,
    pub weekday: Weekday,
    /// Days after today, at least 1
    pub offset: usize,
}

/// Aggregate view over the forecast window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastAnalysis {
    pub temp_trend: TempTrend,
    /// Second half of the window minus first half, in degrees
    pub temp_change: f64,
    /// Nearest good day, only set when today is not good
    pub next_good_day: Option<DayRef>,
    /// Nearest bad day, only set when today is not bad
    pub next_bad_day: Option<DayRef>,
    pub good_streak_length: usize,
    pub bad_streak_length: usize,
    pub good_day_count: usize,
    pub bad_day_count: usize,
    pub weekend_outlook: WeekendOutlook,
    pub week_character: WeekCharacter,
}

/// Forecast window plus its analysis, as handed to the narrative engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub forecast: Vec<DayForecast>,
    pub analysis: ForecastAnalysis,
}

impl WeatherReport {
    #[must_use]
    pub fn today(&self) -> Option<&DayForecast> {
        self.forecast.first()
    }

    #[must_use]
    pub fn tomorrow(&self) -> Option<&DayForecast> {
        self.forecast.get(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_forecast_classification() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let day = DayForecast::new(date, WeatherCode(63));
        assert_eq!(day.weekday_name, "Wednesday");
        assert!(day.is_bad);
        assert!(!day.is_good);
        assert_eq!(day.category(), WeatherCategory::Rain);

        let neutral = DayForecast::new(date, WeatherCode(3));
        assert!(!neutral.is_good && !neutral.is_bad);
    }

    #[test]
    fn test_report_today_and_tomorrow() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let report = WeatherReport {
            forecast: vec![
                DayForecast::new(date, WeatherCode(0)),
                DayForecast::new(date.succ_opt().unwrap(), WeatherCode(61)),
            ],
            analysis: ForecastAnalysis::default(),
        };
        assert!(report.today().unwrap().is_good);
        assert!(report.tomorrow().unwrap().is_bad);
    }
}
