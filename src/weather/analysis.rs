//! Week-level analysis of a daily forecast

use chrono::Weekday;

use crate::models::{
    DayForecast, DayRef, ForecastAnalysis, TempTrend, WeekCharacter, WeekendOutlook,
};

/// Temperature change (degrees) below which the week counts as stable
const TREND_THRESHOLD: f64 = 2.0;
/// Temperature change (degrees) from which a trend counts as strong
const STRONG_TREND_THRESHOLD: f64 = 5.0;
const STREAK_THRESHOLD: usize = 3;
const MOSTLY_THRESHOLD: usize = 5;

/// Analyse a forecast window whose first day is today
#[must_use]
pub fn analyze_forecast(forecast: &[DayForecast]) -> ForecastAnalysis {
    let Some(today) = forecast.first() else {
        return ForecastAnalysis::default();
    };

    let temps: Vec<f64> = forecast.iter().filter_map(|d| d.temp_max).collect();
    let temp_change = temperature_change(&temps);

    let next_good_day = if today.is_good {
        None
    } else {
        first_future_day(forecast, |d| d.is_good)
    };
    let next_bad_day = if today.is_bad {
        None
    } else {
        first_future_day(forecast, |d| d.is_bad)
    };

    let good_streak_length = forecast.iter().take_while(|d| d.is_good).count();
    let bad_streak_length = forecast.iter().take_while(|d| d.is_bad).count();
    let good_day_count = forecast.iter().filter(|d| d.is_good).count();
    let bad_day_count = forecast.iter().filter(|d| d.is_bad).count();

    let week_character = if good_day_count >= MOSTLY_THRESHOLD {
        WeekCharacter::MostlyGood
    } else if bad_day_count >= MOSTLY_THRESHOLD {
        WeekCharacter::MostlyBad
    } else if good_streak_length >= STREAK_THRESHOLD {
        WeekCharacter::GoodStretch
    } else if bad_streak_length >= STREAK_THRESHOLD {
        WeekCharacter::GreyStretch
    } else {
        WeekCharacter::Mixed
    };

    ForecastAnalysis {
        temp_trend: classify_trend(temp_change),
        temp_change,
        next_good_day,
        next_bad_day,
        good_streak_length,
        bad_streak_length,
        good_day_count,
        bad_day_count,
        weekend_outlook: weekend_outlook(forecast),
        week_character,
    }
}

/// Mean of the second half minus mean of the first half; 0 with fewer than two values
fn temperature_change(temps: &[f64]) -> f64 {
    let half = temps.len() / 2;
    if half == 0 {
        return 0.0;
    }
    let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
    mean(&temps[temps.len() - half..]) - mean(&temps[..half])
}

fn classify_trend(change: f64) -> TempTrend {
    match change {
        c if c >= STRONG_TREND_THRESHOLD => TempTrend::WarmingStrong,
        c if c >= TREND_THRESHOLD => TempTrend::Warming,
        c if c <= -STRONG_TREND_THRESHOLD => TempTrend::CoolingStrong,
        c if c <= -TREND_THRESHOLD => TempTrend::Cooling,
        _ => TempTrend::Stable,
    }
}

fn first_future_day(forecast: &[DayForecast], predicate: impl Fn(&DayForecast) -> bool) -> Option<DayRef> {
    forecast
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, day)| predicate(day))
        .map(|(offset, day)| DayRef {
            name: day.weekday_name.clone(),
            weekday: day.weekday(),
            offset,
        })
}

fn weekend_outlook(forecast: &[DayForecast]) -> WeekendOutlook {
    let weekend: Vec<&DayForecast> = forecast
        .iter()
        .filter(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect();

    if weekend.is_empty() {
        WeekendOutlook::Mixed
    } else if weekend.iter().all(|d| d.is_good) {
        WeekendOutlook::Good
    } else if weekend.iter().all(|d| d.is_bad) {
        WeekendOutlook::Bad
    } else {
        WeekendOutlook::Mixed
    }
}
