//! Daylight uplift narratives
//!
//! [`compose_narrative`] is the pure core: solar and weather facts plus a random
//! source in, text, facts and highlights out. [`UpliftService`] fetches the facts
//! from the providers and seeds the random source per request.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::clock::Clock;
use crate::models::solar::{format_clock_time, format_hours_minutes};
use crate::models::{
    ForecastAnalysis, Location, NarrativeText, SolarDelta, UpliftFacts, WeatherCategory, WeatherReport,
};
use crate::solar::SolarDeltaProvider;
use crate::weather::{FORECAST_DAYS, WeatherForecastProvider};
use crate::{HorizonError, Result};

pub mod assembler;
pub mod content;
pub mod highlights;
pub mod scenario;

pub use assembler::{AssemblyContext, SeasonalPhase, assemble, interpolate};
pub use highlights::extract_highlights;
pub use scenario::{Scenario, ScenarioContext, ScenarioKey, detect_candidates, detect_scenario, select_scenario};

/// How the per-request random source is seeded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    /// Date and coordinates mixed with fresh entropy; repeat calls vary
    #[default]
    Live,
    /// Date and coordinates only; repeat calls on the same day are identical
    Deterministic,
}

/// Narrative language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// Parse a language code, falling back to English for anything unsupported
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" => Self::De,
            _ => Self::En,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

/// Stable seed for a day and a location rounded to two decimals
#[must_use]
pub fn seed_for(today: NaiveDate, location: &Location) -> u64 {
    let key = format!("{today}|{:.2}|{:.2}", location.latitude, location.longitude);
    let digest = Sha256::digest(key.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Request-local random source
#[must_use]
pub fn rng_for(mode: SeedMode, today: NaiveDate, location: &Location) -> StdRng {
    let seed = seed_for(today, location);
    match mode {
        SeedMode::Deterministic => StdRng::seed_from_u64(seed),
        SeedMode::Live => StdRng::seed_from_u64(seed ^ rand::rng().random::<u64>()),
    }
}

/// Facts a narrative is composed from; missing providers are `None`
#[derive(Debug, Clone, Copy)]
pub struct NarrativeInputs<'a> {
    pub solar: Option<&'a SolarDelta>,
    pub weather: Option<&'a WeatherReport>,
    pub today: NaiveDate,
}

/// Classify, assemble and highlight one narrative
pub fn compose_narrative<R: RngExt + ?Sized>(
    inputs: &NarrativeInputs<'_>,
    language: Language,
    rng: &mut R,
) -> NarrativeText {
    let catalog = content::catalog(language);
    let solar = inputs.solar.cloned().unwrap_or_default();
    let no_analysis = ForecastAnalysis::default();
    let analysis = inputs.weather.map_or(&no_analysis, |w| &w.analysis);
    let today_weather = inputs.weather.and_then(WeatherReport::today);

    let scenario = detect_scenario(
        &ScenarioContext {
            today_weather,
            analysis,
            solar: inputs.solar,
            today: inputs.today,
        },
        catalog,
        rng,
    );
    debug!("Selected scenario {} (weight {})", scenario.key, scenario.weight);

    let text = assemble(
        &AssemblyContext {
            scenario: &scenario,
            solar: inputs.solar,
            category: today_weather.map_or(WeatherCategory::Clear, |d| d.category()),
            today: inputs.today,
        },
        catalog,
        rng,
    );

    let day_length = inputs.solar.map(SolarDelta::format_day_length);
    let highlights = extract_highlights(
        &text,
        &scenario,
        day_length.as_deref(),
        solar.delta_daily_minutes(),
        catalog,
    );

    NarrativeText {
        text,
        facts: build_facts(&solar, inputs.weather),
        highlights,
    }
}

/// Display strings for the fact panel
#[must_use]
pub fn build_facts(solar: &SolarDelta, weather: Option<&WeatherReport>) -> UpliftFacts {
    let today = weather.and_then(WeatherReport::today);
    let temp_max = weather
        .and_then(|w| w.forecast.iter().find_map(|d| d.temp_max))
        .map_or_else(|| "--".to_string(), |t| format!("{t:.0}°C"));

    UpliftFacts {
        sunrise: format_clock_time(solar.sunrise),
        sunset: format_clock_time(solar.sunset),
        day_length: solar.format_day_length(),
        delta_yesterday: format!("{:+} min", solar.delta_daily_minutes()),
        delta_week: format!("{:+} min", solar.delta_weekly_minutes()),
        delta_solstice: format_solstice_delta(solar.delta_solstice_minutes()),
        weather_code: today.map_or(0, |d| d.weather_code.0),
        temp_max,
    }
}

/// `"+1h 12m"` from an hour on, `"-8 min"` below
fn format_solstice_delta(minutes: i64) -> String {
    if minutes.abs() >= 60 {
        let sign = if minutes >= 0 { '+' } else { '-' };
        format!("{sign}{}", format_hours_minutes(minutes.abs() * 60))
    } else {
        format!("{minutes:+} min")
    }
}

/// Fetches solar and weather facts and turns them into a narrative
pub struct UpliftService {
    solar: Arc<dyn SolarDeltaProvider>,
    weather: Arc<dyn WeatherForecastProvider>,
    clock: Arc<dyn Clock>,
    seed_mode: SeedMode,
}

impl UpliftService {
    pub fn new(
        solar: Arc<dyn SolarDeltaProvider>,
        weather: Arc<dyn WeatherForecastProvider>,
        clock: Arc<dyn Clock>,
        seed_mode: SeedMode,
    ) -> Self {
        Self {
            solar,
            weather,
            clock,
            seed_mode,
        }
    }

    /// Today's daylight facts for `location`, `None` when unavailable
    pub async fn daylight(&self, location: &Location) -> Option<SolarDelta> {
        let today = self.clock.now().date_naive();
        self.solar.solar_delta(location, today).await
    }

    #[instrument(skip(self), fields(lat = location.latitude, lon = location.longitude, lang = language.as_str()))]
    pub async fn generate(&self, location: &Location, language: Language) -> Result<NarrativeText> {
        let today = self.clock.now().date_naive();
        let (solar, weather) = tokio::join!(
            self.solar.solar_delta(location, today),
            self.weather.forecast(location, FORECAST_DAYS)
        );

        if solar.is_none() {
            warn!("No daylight data, narrative falls back to weather and season");
        }
        if weather.is_none() {
            warn!("No forecast data, narrative falls back to daylight and season");
        }

        // Forecast rows are dated in the location's time zone
        let local_today = weather
            .as_ref()
            .and_then(WeatherReport::today)
            .map_or(today, |day| day.date);

        let mut rng = rng_for(self.seed_mode, local_today, location);
        let narrative = compose_narrative(
            &NarrativeInputs {
                solar: solar.as_ref(),
                weather: weather.as_ref(),
                today: local_today,
            },
            language,
            &mut rng,
        );

        if narrative.text.trim().is_empty() {
            return Err(HorizonError::narrative("assembled narrative is empty"));
        }
        Ok(narrative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::models::{DayForecast, WeatherCode};
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};

    struct FixedSolar(Option<SolarDelta>);

    #[async_trait]
    impl SolarDeltaProvider for FixedSolar {
        async fn solar_delta(&self, _: &Location, _: NaiveDate) -> Option<SolarDelta> {
            self.0.clone()
        }
    }

    struct FixedWeather(Option<WeatherReport>);

    #[async_trait]
    impl WeatherForecastProvider for FixedWeather {
        async fn forecast(&self, _: &Location, _: usize) -> Option<WeatherReport> {
            self.0.clone()
        }
    }

    fn zurich() -> Location {
        Location::new(47.37, 8.54, "Zurich".into())
    }

    fn winter_solar() -> SolarDelta {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        SolarDelta {
            day_length_seconds: 32_400,
            delta_daily_seconds: 130,
            delta_weekly_seconds: 840,
            delta_solstice_seconds: 1_920,
            sunrise: day.and_hms_opt(8, 5, 0),
            sunset: day.and_hms_opt(17, 5, 0),
        }
    }

    fn sunny_report() -> WeatherReport {
        sunny_report_from(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    fn sunny_report_from(start: NaiveDate) -> WeatherReport {
        let forecast: Vec<DayForecast> = (0..7)
            .map(|i| {
                DayForecast::new(start + Duration::days(i), WeatherCode(0)).with_temperatures(Some(-2.0), Some(4.4))
            })
            .collect();
        let analysis = crate::weather::analyze_forecast(&forecast);
        WeatherReport { forecast, analysis }
    }

    fn service(solar: Option<SolarDelta>, weather: Option<WeatherReport>, mode: SeedMode) -> UpliftService {
        UpliftService::new(
            Arc::new(FixedSolar(solar)),
            Arc::new(FixedWeather(weather)),
            Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap())),
            mode,
        )
    }

    #[test]
    fn test_language_fallback() {
        assert_eq!(Language::from_code("de"), Language::De);
        assert_eq!(Language::from_code(" DE "), Language::De);
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("fr"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn test_seed_depends_on_day_and_rounded_location() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let seed = seed_for(day, &zurich());
        assert_eq!(seed, seed_for(day, &Location::new(47.371, 8.539, "Zurich".into())));
        assert_ne!(seed, seed_for(day.succ_opt().unwrap(), &zurich()));
        assert_ne!(seed, seed_for(day, &Location::new(52.52, 13.40, "Berlin".into())));
    }

    #[test]
    fn test_facts_formatting() {
        let facts = build_facts(&winter_solar(), Some(&sunny_report()));
        assert_eq!(facts.sunrise, "08:05");
        assert_eq!(facts.sunset, "17:05");
        assert_eq!(facts.day_length, "9h 0m");
        assert_eq!(facts.delta_yesterday, "+2 min");
        assert_eq!(facts.delta_week, "+14 min");
        assert_eq!(facts.delta_solstice, "+32 min");
        assert_eq!(facts.weather_code, 0);
        assert_eq!(facts.temp_max, "4°C");
    }

    #[test]
    fn test_facts_without_data() {
        let facts = build_facts(&SolarDelta::default(), None);
        assert_eq!(facts.sunrise, "--:--");
        assert_eq!(facts.day_length, "0h 0m");
        assert_eq!(facts.delta_yesterday, "+0 min");
        assert_eq!(facts.temp_max, "--");
    }

    #[test]
    fn test_solstice_delta_format() {
        assert_eq!(format_solstice_delta(72), "+1h 12m");
        assert_eq!(format_solstice_delta(-75), "-1h 15m");
        assert_eq!(format_solstice_delta(-8), "-8 min");
        assert_eq!(format_solstice_delta(0), "+0 min");
    }

    #[tokio::test]
    async fn test_deterministic_mode_repeats() {
        let service = service(Some(winter_solar()), Some(sunny_report()), SeedMode::Deterministic);
        let first = service.generate(&zurich(), Language::En).await.unwrap();
        let second = service.generate(&zurich(), Language::En).await.unwrap();
        assert_eq!(first, second);
        assert!(!first.text.is_empty());
    }

    #[tokio::test]
    async fn test_live_mode_keeps_shape() {
        let service = service(Some(winter_solar()), Some(sunny_report()), SeedMode::Live);
        for _ in 0..20 {
            let narrative = service.generate(&zurich(), Language::De).await.unwrap();
            assert!(!narrative.text.is_empty());
            assert!(narrative.highlights.len() <= 3);
            assert_eq!(narrative.facts.day_length, "9h 0m");
        }
    }

    #[tokio::test]
    async fn test_generate_without_providers() {
        let service = service(None, None, SeedMode::Live);
        let narrative = service.generate(&zurich(), Language::En).await.unwrap();
        assert!(!narrative.text.is_empty());
        assert_eq!(narrative.facts.sunrise, "--:--");
        assert_eq!(narrative.facts.temp_max, "--");

        for language in [Language::En, Language::De] {
            for _ in 0..30 {
                let narrative = service.generate(&zurich(), language).await.unwrap();
                assert!(!narrative.text.contains("0h 0m"), "{}", narrative.text);
                assert!(narrative.highlights.iter().all(|h| !h.contains("0h 0m")));
            }
        }
    }

    #[tokio::test]
    async fn test_generate_uses_local_date_of_forecast() {
        // 09:00 UTC on Jan 15 is already Jan 16 east of the date line
        let auckland = Location::new(-36.85, 174.76, "Auckland".into());
        let local_day = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        let report = sunny_report_from(local_day);
        let service = service(Some(winter_solar()), Some(report.clone()), SeedMode::Deterministic);

        let narrative = service.generate(&auckland, Language::En).await.unwrap();

        let solar = winter_solar();
        let expected = compose_narrative(
            &NarrativeInputs {
                solar: Some(&solar),
                weather: Some(&report),
                today: local_day,
            },
            Language::En,
            &mut rng_for(SeedMode::Deterministic, local_day, &auckland),
        );
        assert_eq!(narrative, expected);
    }
}
