//! Weighted scenario classification
//!
//! Every rule that matches the current solar and weather facts contributes a
//! candidate. One candidate is then drawn from the three heaviest by weighted roll.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::RngExt;
use std::collections::BTreeMap;
use std::fmt;

use super::content::Catalog;
use crate::models::solar::format_hours_minutes;
use crate::models::{DayForecast, ForecastAnalysis, SolarDelta, TempTrend, WeekendOutlook};

/// Named values a scenario's templates interpolate
pub type Params = BTreeMap<&'static str, String>;

/// Candidates considered by the final roll
const TOP_CANDIDATES: usize = 3;
const SOLSTICE_WINDOW_DAYS: i64 = 14;
const STREAK_THRESHOLD: usize = 3;
/// About 13.9 hours
const PEAK_LIGHT_SECONDS: i64 = 50_000;

/// Narrative template families, one per story the forecast can tell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKey {
    RainClearingSoon,
    CarpeDiem,
    WarmingTrend,
    CoolingTrend,
    LightFighter,
    GoodStreak,
    GreyStretch,
    BreakthroughDay,
    PeakLight,
    PostSolsticeGrind,
    WeekendGood,
    WeekendBad,
    SpringAcceleration,
    SolsticeApproaching,
    StableFocusLight,
}

impl ScenarioKey {
    pub const ALL: [Self; 15] = [
        Self::RainClearingSoon,
        Self::CarpeDiem,
        Self::WarmingTrend,
        Self::CoolingTrend,
        Self::LightFighter,
        Self::GoodStreak,
        Self::GreyStretch,
        Self::BreakthroughDay,
        Self::PeakLight,
        Self::PostSolsticeGrind,
        Self::WeekendGood,
        Self::WeekendBad,
        Self::SpringAcceleration,
        Self::SolsticeApproaching,
        Self::StableFocusLight,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RainClearingSoon => "rain_clearing_soon",
            Self::CarpeDiem => "carpe_diem",
            Self::WarmingTrend => "warming_trend",
            Self::CoolingTrend => "cooling_trend",
            Self::LightFighter => "light_fighter",
            Self::GoodStreak => "good_streak",
            Self::GreyStretch => "grey_stretch",
            Self::BreakthroughDay => "breakthrough_day",
            Self::PeakLight => "peak_light",
            Self::PostSolsticeGrind => "post_solstice_grind",
            Self::WeekendGood => "weekend_good",
            Self::WeekendBad => "weekend_bad",
            Self::SpringAcceleration => "spring_acceleration",
            Self::SolsticeApproaching => "solstice_approaching",
            Self::StableFocusLight => "stable_focus_light",
        }
    }
}

impl fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A matched rule: which story, what to fill in, and how much it matters
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub key: ScenarioKey,
    pub params: Params,
    /// Relative priority in `0..=100`, not a probability
    pub weight: u32,
}

impl Scenario {
    fn new(key: ScenarioKey, weight: u32) -> Self {
        Self {
            key,
            params: Params::new(),
            weight,
        }
    }

    fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.insert(name, value.to_string());
        self
    }

    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Everything the classifier looks at
#[derive(Debug, Clone, Copy)]
pub struct ScenarioContext<'a> {
    pub today_weather: Option<&'a DayForecast>,
    pub analysis: &'a ForecastAnalysis,
    /// `None` when no daylight data was available
    pub solar: Option<&'a SolarDelta>,
    pub today: NaiveDate,
}

/// Evaluate every rule in order and collect the ones that match.
/// The last candidate is always [`ScenarioKey::StableFocusLight`].
#[must_use]
pub fn detect_candidates(context: &ScenarioContext<'_>, catalog: &Catalog) -> Vec<Scenario> {
    let ScenarioContext {
        today_weather,
        analysis,
        solar: daylight,
        today,
    } = *context;
    let solar = daylight.cloned().unwrap_or_default();

    let is_good = today_weather.is_some_and(|d| d.is_good);
    let is_bad = today_weather.is_some_and(|d| d.is_bad);
    let month = today.month();

    let delta_daily = solar.delta_daily_seconds;
    let delta_daily_min = solar.delta_daily_minutes().abs();
    let delta_solstice_min = solar.delta_solstice_minutes();
    let day_length = solar.format_day_length();

    let mut candidates = Vec::new();

    let clearing = analysis.next_good_day.as_ref().filter(|_| is_bad);
    if let Some(next) = clearing.filter(|n| (1..=4).contains(&n.offset)) {
        let weight = if next.offset <= 2 { 85 } else { 70 };
        candidates.push(
            Scenario::new(ScenarioKey::RainClearingSoon, weight)
                .with("clear_day", catalog.weekday(next.weekday))
                .with("days_until", next.offset),
        );
    }

    let turning = analysis.next_bad_day.as_ref().filter(|_| is_good);
    if let Some(next) = turning.filter(|n| (1..=3).contains(&n.offset)) {
        candidates.push(
            Scenario::new(ScenarioKey::CarpeDiem, 90)
                .with("rain_day", catalog.weekday(next.weekday))
                .with("days_until", next.offset),
        );
    }

    let temp_change = analysis.temp_change.abs();
    match analysis.temp_trend {
        TempTrend::Warming | TempTrend::WarmingStrong => {
            let weight = if analysis.temp_trend.is_strong() { 75 } else { 55 };
            candidates.push(
                Scenario::new(ScenarioKey::WarmingTrend, weight)
                    .with("temp_change", format!("+{temp_change:.0}")),
            );
        }
        TempTrend::Cooling | TempTrend::CoolingStrong => {
            let weight = if analysis.temp_trend.is_strong() { 65 } else { 45 };
            candidates.push(
                Scenario::new(ScenarioKey::CoolingTrend, weight)
                    .with("temp_change", format!("{temp_change:.0}")),
            );
        }
        TempTrend::Stable => {}
    }

    if is_bad && delta_daily > 60 {
        candidates.push(
            Scenario::new(ScenarioKey::LightFighter, 80)
                .with("delta_min", delta_daily_min)
                .with("day_length", &day_length),
        );
    }

    if analysis.good_streak_length >= STREAK_THRESHOLD {
        candidates.push(
            Scenario::new(ScenarioKey::GoodStreak, 60).with("streak_days", analysis.good_streak_length),
        );
    }

    if analysis.bad_streak_length >= STREAK_THRESHOLD {
        candidates.push(
            Scenario::new(ScenarioKey::GreyStretch, 50).with("streak_days", analysis.bad_streak_length),
        );
    }

    if is_good && analysis.next_good_day.is_none() {
        candidates.push(
            Scenario::new(ScenarioKey::BreakthroughDay, 70).with("bad_days", analysis.bad_day_count),
        );
    }

    if matches!(month, 6 | 7) && solar.day_length_seconds > PEAK_LIGHT_SECONDS {
        candidates.push(Scenario::new(ScenarioKey::PeakLight, 65).with("day_length", &day_length));
    }

    if matches!(month, 1 | 2) && delta_solstice_min > 10 {
        candidates.push(
            Scenario::new(ScenarioKey::PostSolsticeGrind, 75)
                .with("hours_gained", format_gained(delta_solstice_min)),
        );
    }

    if matches!(today.weekday(), Weekday::Thu | Weekday::Fri | Weekday::Sat) {
        match analysis.weekend_outlook {
            WeekendOutlook::Good => candidates.push(Scenario::new(ScenarioKey::WeekendGood, 55)),
            WeekendOutlook::Bad => candidates.push(Scenario::new(ScenarioKey::WeekendBad, 45)),
            WeekendOutlook::Mixed => {}
        }
    }

    if matches!(month, 2..=4) && delta_daily_min >= 2 {
        candidates.push(
            Scenario::new(ScenarioKey::SpringAcceleration, 70).with("delta_min", delta_daily_min),
        );
    }

    let to_summer = days_until(today, 6, 21);
    let to_winter = days_until(today, 12, 21);
    let solstice = if (1..=SOLSTICE_WINDOW_DAYS).contains(&to_summer) {
        Some((to_summer, catalog.peak))
    } else if (1..=SOLSTICE_WINDOW_DAYS).contains(&to_winter) {
        Some((to_winter, catalog.minimum))
    } else {
        None
    };
    if let Some((days, peak_or_min)) = solstice {
        candidates.push(
            Scenario::new(ScenarioKey::SolsticeApproaching, 60)
                .with("days_to_solstice", days)
                .with("peak_or_min", peak_or_min),
        );
    }

    candidates.push(stable_focus(daylight));

    candidates
}

/// Always-available fallback; without daylight data it names no day length
fn stable_focus(daylight: Option<&SolarDelta>) -> Scenario {
    let scenario = Scenario::new(ScenarioKey::StableFocusLight, 30);
    match daylight {
        Some(solar) => scenario
            .with("day_length", solar.format_day_length())
            .with("delta_min", solar.delta_daily_minutes().abs()),
        None => scenario,
    }
}

/// Draw one candidate from the three heaviest, proportionally to weight.
/// Ties keep rule order.
pub fn select_scenario<R: RngExt + ?Sized>(mut candidates: Vec<Scenario>, rng: &mut R) -> Option<Scenario> {
    candidates.sort_by(|a, b| b.weight.cmp(&a.weight));
    candidates.truncate(TOP_CANDIDATES);

    let total: u32 = candidates.iter().map(|c| c.weight).sum();
    let roll = rng.random::<f64>() * f64::from(total);

    let mut cumulative = 0.0;
    let index = candidates
        .iter()
        .position(|c| {
            cumulative += f64::from(c.weight);
            roll <= cumulative
        })
        .unwrap_or(0);

    (index < candidates.len()).then(|| candidates.swap_remove(index))
}

/// Detect and select in one step
pub fn detect_scenario<R: RngExt + ?Sized>(
    context: &ScenarioContext<'_>,
    catalog: &Catalog,
    rng: &mut R,
) -> Scenario {
    select_scenario(detect_candidates(context, catalog), rng).unwrap_or_else(|| stable_focus(context.solar))
}

/// Days from `from` to the next `month`/`day`, 0 on the day itself
fn days_until(from: NaiveDate, month: u32, day: u32) -> i64 {
    let target = |year| NaiveDate::from_ymd_opt(year, month, day);
    match target(from.year()) {
        Some(t) if t >= from => (t - from).num_days(),
        _ => target(from.year() + 1).map_or(i64::MAX, |t| (t - from).num_days()),
    }
}

/// `"1h 12m"` past an hour, `"45m"` below
fn format_gained(minutes: i64) -> String {
    let minutes = minutes.abs();
    if minutes >= 60 {
        format_hours_minutes(minutes * 60)
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayRef, WeatherCode};
    use crate::narrative::Language;
    use crate::narrative::content::catalog;
    use rand::{SeedableRng, rngs::StdRng};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn keys(candidates: &[Scenario]) -> Vec<ScenarioKey> {
        candidates.iter().map(|c| c.key).collect()
    }

    fn solar(day_length: i64, daily: i64, solstice: i64) -> SolarDelta {
        SolarDelta {
            day_length_seconds: day_length,
            delta_daily_seconds: daily,
            delta_solstice_seconds: solstice,
            ..SolarDelta::default()
        }
    }

    /// Rainy today, clear the day after tomorrow
    fn rain_clearing() -> (DayForecast, ForecastAnalysis) {
        let today = DayForecast::new(date(2024, 2, 15), WeatherCode(61));
        let analysis = ForecastAnalysis {
            next_good_day: Some(DayRef {
                name: "Saturday".into(),
                weekday: Weekday::Sat,
                offset: 2,
            }),
            bad_streak_length: 2,
            ..ForecastAnalysis::default()
        };
        (today, analysis)
    }

    #[test]
    fn test_rain_clearing_candidates() {
        let (today, analysis) = rain_clearing();
        let solar = solar(36_000, 120, 3_600);
        let context = ScenarioContext {
            today_weather: Some(&today),
            analysis: &analysis,
            solar: Some(&solar),
            today: date(2024, 2, 15),
        };

        let candidates = detect_candidates(&context, catalog(Language::En));
        assert_eq!(
            keys(&candidates),
            vec![
                ScenarioKey::RainClearingSoon,
                ScenarioKey::LightFighter,
                ScenarioKey::PostSolsticeGrind,
                ScenarioKey::SpringAcceleration,
                ScenarioKey::StableFocusLight,
            ]
        );

        let rain = &candidates[0];
        assert_eq!(rain.weight, 85);
        assert_eq!(rain.param("clear_day"), Some("Saturday"));
        assert_eq!(rain.param("days_until"), Some("2"));
        assert_eq!(candidates[2].param("hours_gained"), Some("1h 0m"));
    }

    #[test]
    fn test_rain_clearing_selection_stays_in_top_three() {
        let (today, analysis) = rain_clearing();
        let solar = solar(36_000, 120, 3_600);
        let context = ScenarioContext {
            today_weather: Some(&today),
            analysis: &analysis,
            solar: Some(&solar),
            today: date(2024, 2, 15),
        };
        let allowed = [
            ScenarioKey::RainClearingSoon,
            ScenarioKey::LightFighter,
            ScenarioKey::PostSolsticeGrind,
        ];

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let scenario = detect_scenario(&context, catalog(Language::En), &mut rng);
            assert!(allowed.contains(&scenario.key), "{:?}", scenario.key);
        }
    }

    #[test]
    fn test_localized_day_names() {
        let (today, analysis) = rain_clearing();
        let solar = SolarDelta::default();
        let context = ScenarioContext {
            today_weather: Some(&today),
            analysis: &analysis,
            solar: Some(&solar),
            today: date(2024, 2, 15),
        };
        let candidates = detect_candidates(&context, catalog(Language::De));
        assert_eq!(candidates[0].param("clear_day"), Some("Samstag"));
    }

    #[test]
    fn test_rain_clearing_far_away_weighs_less() {
        let (today, mut analysis) = rain_clearing();
        if let Some(next) = analysis.next_good_day.as_mut() {
            next.offset = 4;
        }
        let solar = SolarDelta::default();
        let context = ScenarioContext {
            today_weather: Some(&today),
            analysis: &analysis,
            solar: Some(&solar),
            today: date(2024, 2, 15),
        };
        assert_eq!(detect_candidates(&context, catalog(Language::En))[0].weight, 70);
    }

    #[test]
    fn test_fallback_without_data() {
        let analysis = ForecastAnalysis::default();
        let context = ScenarioContext {
            today_weather: None,
            analysis: &analysis,
            solar: None,
            today: date(2024, 10, 8),
        };

        let candidates = detect_candidates(&context, catalog(Language::En));
        assert_eq!(keys(&candidates), vec![ScenarioKey::StableFocusLight]);
        assert_eq!(candidates[0].param("day_length"), None);
        assert_eq!(catalog(Language::En).primary(&candidates[0]), catalog(Language::En).unlit_focus);

        let mut rng = StdRng::seed_from_u64(7);
        let scenario = detect_scenario(&context, catalog(Language::En), &mut rng);
        assert_eq!(scenario.key, ScenarioKey::StableFocusLight);
    }

    #[test]
    fn test_fallback_with_zero_daylight_keeps_day_length() {
        let analysis = ForecastAnalysis::default();
        let polar_night = SolarDelta::default();
        let context = ScenarioContext {
            today_weather: None,
            analysis: &analysis,
            solar: Some(&polar_night),
            today: date(2024, 10, 8),
        };

        let candidates = detect_candidates(&context, catalog(Language::En));
        assert_eq!(candidates[0].param("day_length"), Some("0h 0m"));
        assert_eq!(
            catalog(Language::En).primary(&candidates[0]),
            catalog(Language::En).scenario(ScenarioKey::StableFocusLight)
        );
    }

    #[test]
    fn test_carpe_diem_and_breakthrough() {
        let today = DayForecast::new(date(2024, 5, 6), WeatherCode(0));
        let analysis = ForecastAnalysis {
            next_bad_day: Some(DayRef {
                name: "Wednesday".into(),
                weekday: Weekday::Wed,
                offset: 2,
            }),
            good_streak_length: 2,
            bad_day_count: 3,
            ..ForecastAnalysis::default()
        };
        let solar = SolarDelta::default();
        let context = ScenarioContext {
            today_weather: Some(&today),
            analysis: &analysis,
            solar: Some(&solar),
            today: date(2024, 5, 6),
        };

        let candidates = detect_candidates(&context, catalog(Language::En));
        assert_eq!(
            keys(&candidates),
            vec![ScenarioKey::CarpeDiem, ScenarioKey::BreakthroughDay, ScenarioKey::StableFocusLight]
        );
        assert_eq!(candidates[0].weight, 90);
        assert_eq!(candidates[0].param("rain_day"), Some("Wednesday"));
        assert_eq!(candidates[1].param("bad_days"), Some("3"));
    }

    #[test]
    fn test_temperature_trends() {
        let solar = SolarDelta::default();
        let warming = ForecastAnalysis {
            temp_trend: TempTrend::WarmingStrong,
            temp_change: 6.4,
            ..ForecastAnalysis::default()
        };
        let context = ScenarioContext {
            today_weather: None,
            analysis: &warming,
            solar: Some(&solar),
            today: date(2024, 10, 8),
        };
        let candidates = detect_candidates(&context, catalog(Language::En));
        assert_eq!(candidates[0].key, ScenarioKey::WarmingTrend);
        assert_eq!(candidates[0].weight, 75);
        assert_eq!(candidates[0].param("temp_change"), Some("+6"));

        let cooling = ForecastAnalysis {
            temp_trend: TempTrend::Cooling,
            temp_change: -3.2,
            ..ForecastAnalysis::default()
        };
        let context = ScenarioContext {
            analysis: &cooling,
            ..context
        };
        let candidates = detect_candidates(&context, catalog(Language::En));
        assert_eq!(candidates[0].key, ScenarioKey::CoolingTrend);
        assert_eq!(candidates[0].weight, 45);
        assert_eq!(candidates[0].param("temp_change"), Some("3"));
    }

    #[test]
    fn test_seasonal_rules() {
        let analysis = ForecastAnalysis::default();
        let summer = solar(58_000, -20, 30_000);
        let context = ScenarioContext {
            today_weather: None,
            analysis: &analysis,
            solar: Some(&summer),
            today: date(2024, 6, 10),
        };
        let candidates = detect_candidates(&context, catalog(Language::En));
        assert_eq!(
            keys(&candidates),
            vec![ScenarioKey::PeakLight, ScenarioKey::SolsticeApproaching, ScenarioKey::StableFocusLight]
        );
        assert_eq!(candidates[0].param("day_length"), Some("16h 6m"));
        assert_eq!(candidates[1].param("days_to_solstice"), Some("11"));
        assert_eq!(candidates[1].param("peak_or_min"), Some("peak"));

        let winter = solar(30_000, -30, 0);
        let context = ScenarioContext {
            solar: Some(&winter),
            today: date(2024, 12, 11),
            ..context
        };
        let candidates = detect_candidates(&context, catalog(Language::De));
        assert_eq!(candidates[0].key, ScenarioKey::SolsticeApproaching);
        assert_eq!(candidates[0].param("peak_or_min"), Some("Minimum"));
    }

    #[test]
    fn test_solstice_day_itself_is_not_approaching() {
        let analysis = ForecastAnalysis::default();
        let solar = SolarDelta::default();
        let context = ScenarioContext {
            today_weather: None,
            analysis: &analysis,
            solar: Some(&solar),
            today: date(2024, 12, 21),
        };
        assert_eq!(
            keys(&detect_candidates(&context, catalog(Language::En))),
            vec![ScenarioKey::StableFocusLight]
        );
    }

    #[test]
    fn test_weekend_rule_only_late_in_week() {
        let analysis = ForecastAnalysis {
            weekend_outlook: WeekendOutlook::Good,
            ..ForecastAnalysis::default()
        };
        let solar = SolarDelta::default();
        // 2024-10-10 is a Thursday
        let thursday = ScenarioContext {
            today_weather: None,
            analysis: &analysis,
            solar: Some(&solar),
            today: date(2024, 10, 10),
        };
        assert_eq!(detect_candidates(&thursday, catalog(Language::En))[0].key, ScenarioKey::WeekendGood);

        let sunday = ScenarioContext {
            today: date(2024, 10, 13),
            ..thursday
        };
        assert_eq!(detect_candidates(&sunday, catalog(Language::En)).len(), 1);
    }

    #[test]
    fn test_select_prefers_weight_order() {
        let candidates = vec![
            Scenario::new(ScenarioKey::StableFocusLight, 30),
            Scenario::new(ScenarioKey::CarpeDiem, 90),
            Scenario::new(ScenarioKey::GoodStreak, 60),
            Scenario::new(ScenarioKey::BreakthroughDay, 70),
        ];

        let mut seen = std::collections::HashSet::new();
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            seen.insert(select_scenario(candidates.clone(), &mut rng).unwrap().key);
        }
        assert!(!seen.contains(&ScenarioKey::StableFocusLight));
        assert!(seen.contains(&ScenarioKey::CarpeDiem));
        assert!(seen.contains(&ScenarioKey::GoodStreak));
    }

    #[test]
    fn test_select_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_scenario(Vec::new(), &mut rng).is_none());
    }

    #[test]
    fn test_days_until_wraps_year() {
        assert_eq!(days_until(date(2024, 12, 22), 12, 21), 364);
        assert_eq!(days_until(date(2024, 6, 7), 6, 21), 14);
        assert_eq!(days_until(date(2024, 6, 21), 6, 21), 0);
    }

    #[test]
    fn test_format_gained() {
        assert_eq!(format_gained(45), "45m");
        assert_eq!(format_gained(72), "1h 12m");
    }
}
