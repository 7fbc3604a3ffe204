//! Picks the short phrases of a narrative worth emphasising

use super::assembler::interpolate;
use super::content::Catalog;
use super::scenario::{Params, Scenario, ScenarioKey};

pub const MAX_HIGHLIGHTS: usize = 3;
pub const MAX_HIGHLIGHT_WORDS: usize = 4;

/// Collects highlights that occur verbatim in the text
struct Collector<'t> {
    text: &'t str,
    found: Vec<String>,
}

impl Collector<'_> {
    fn is_full(&self) -> bool {
        self.found.len() >= MAX_HIGHLIGHTS
    }

    /// Add `candidate` if it fits and is in the text; true when added
    fn offer(&mut self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if self.is_full()
            || candidate.is_empty()
            || candidate.split_whitespace().count() > MAX_HIGHLIGHT_WORDS
            || !self.text.contains(candidate)
            || self.found.iter().any(|f| f == candidate)
        {
            return false;
        }
        self.found.push(candidate.to_string());
        true
    }

    /// Offer candidates in order until one is taken
    fn offer_first(&mut self, candidates: impl IntoIterator<Item = String>) {
        for candidate in candidates {
            if self.offer(&candidate) {
                break;
            }
        }
    }
}

/// Render `{delta}` phrases for a minute count
fn minute_variants(templates: &[&str], minutes: &str) -> Vec<String> {
    let params = Params::from([("delta", minutes.to_string())]);
    templates.iter().map(|t| interpolate(t, &params)).collect()
}

/// Literals a scenario's templates put into the text
fn scenario_literals(scenario: &Scenario, catalog: &Catalog) -> Vec<String> {
    let param = |name| scenario.param(name).map(str::to_string);
    match scenario.key {
        ScenarioKey::RainClearingSoon => param("clear_day").into_iter().collect(),
        ScenarioKey::CarpeDiem => param("rain_day").into_iter().collect(),
        ScenarioKey::PostSolsticeGrind => param("hours_gained").into_iter().collect(),
        ScenarioKey::LightFighter | ScenarioKey::SpringAcceleration => scenario
            .param("delta_min")
            .map(|m| minute_variants(catalog.minute_phrases, m))
            .unwrap_or_default(),
        ScenarioKey::WarmingTrend | ScenarioKey::CoolingTrend => scenario
            .param("temp_change")
            .map(|c| vec![format!("{c}°C"), format!("{c} °C")])
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Case-insensitive search returning the text's own spelling
fn find_ignore_case<'t>(text: &'t str, phrase: &str) -> Option<&'t str> {
    text.char_indices().find_map(|(start, _)| {
        let candidate = text.get(start..start + phrase.len())?;
        candidate.eq_ignore_ascii_case(phrase).then_some(candidate)
    })
}

/// Up to three phrases of `text` in priority order: the day length, a
/// scenario-specific value, yesterday's delta, then action phrases.
/// `day_length` is `None` when no daylight data was available.
#[must_use]
pub fn extract_highlights(
    text: &str,
    scenario: &Scenario,
    day_length: Option<&str>,
    delta_daily_minutes: i64,
    catalog: &Catalog,
) -> Vec<String> {
    let mut collector = Collector {
        text,
        found: Vec::new(),
    };

    if let Some(day_length) = day_length {
        collector.offer(day_length);
    }
    collector.offer_first(scenario_literals(scenario, catalog));

    if delta_daily_minutes != 0 {
        let minutes = delta_daily_minutes.abs().to_string();
        collector.offer_first(minute_variants(catalog.delta_phrases, &minutes));
    }

    for phrase in catalog.action_phrases {
        if collector.is_full() {
            break;
        }
        if let Some(found) = find_ignore_case(text, phrase) {
            collector.offer(found);
        }
    }

    collector.found
}
