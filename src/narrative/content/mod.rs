//! Per-language template catalogs
//!
//! Each language provides one immutable [`Catalog`] with the same shape. Templates
//! use `{name}` placeholders that are filled by [`super::assembler::interpolate`].

use crate::models::WeatherCategory;

use super::Language;
use super::assembler::SeasonalPhase;
use super::scenario::{Scenario, ScenarioKey};

mod de;
mod en;

pub type Templates = &'static [&'static str];

/// Flavour of the optional closing remark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosingKind {
    Practical,
    Observational,
    Simple,
}

impl ClosingKind {
    pub const ALL: [Self; 3] = [Self::Practical, Self::Observational, Self::Simple];
}

pub struct Catalog {
    /// Monday first
    pub weekdays: [&'static str; 7],
    /// Fills `{peak_or_min}` before the summer solstice
    pub peak: &'static str,
    /// Fills `{peak_or_min}` before the winter solstice
    pub minimum: &'static str,
    pub scenarios: &'static [(ScenarioKey, Templates)],
    /// Fallback narratives for days without daylight data, no placeholders
    pub unlit_focus: Templates,
    /// `{day_length}`, `{sunrise}`, `{sunset}`
    pub daylight_facts: Templates,
    /// `{delta}` is the absolute number of minutes
    pub delta_gain: Templates,
    pub delta_loss: Templates,
    pub seasonal: &'static [(SeasonalPhase, Templates)],
    /// January first
    pub nature_by_month: [Templates; 12],
    pub nature_by_weather: &'static [(WeatherCategory, Templates)],
    pub general_facts: Templates,
    pub closings: &'static [(ClosingKind, Templates)],
    /// How a minute count appears in scenario text, `{delta}` unsigned
    pub minute_phrases: Templates,
    /// How yesterday's delta appears in fragment text, `{delta}` unsigned
    pub delta_phrases: Templates,
    /// Emphasised when found, matched case-insensitively
    pub action_phrases: Templates,
}

fn lookup<K: PartialEq>(table: &'static [(K, Templates)], key: &K) -> Templates {
    table
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, templates)| *templates)
        .unwrap_or_default()
}

impl Catalog {
    #[must_use]
    pub fn scenario(&self, key: ScenarioKey) -> Templates {
        lookup(self.scenarios, &key)
    }

    /// Primary templates for `scenario`. The fallback scenario carries no
    /// `{day_length}` when daylight data is missing and gets `unlit_focus`.
    #[must_use]
    pub fn primary(&self, scenario: &Scenario) -> Templates {
        if scenario.key == ScenarioKey::StableFocusLight && scenario.param("day_length").is_none() {
            return self.unlit_focus;
        }
        self.scenario(scenario.key)
    }

    #[must_use]
    pub fn seasonal(&self, phase: SeasonalPhase) -> Templates {
        lookup(self.seasonal, &phase)
    }

    #[must_use]
    pub fn closing(&self, kind: ClosingKind) -> Templates {
        lookup(self.closings, &kind)
    }

    /// Month lines for `month` (1..=12)
    #[must_use]
    pub fn month_nature(&self, month: u32) -> Templates {
        month
            .checked_sub(1)
            .and_then(|i| self.nature_by_month.get(i as usize))
            .copied()
            .unwrap_or_default()
    }

    /// Weather lines for today's sky followed by the month's lines
    #[must_use]
    pub fn nature(&self, month: u32, category: WeatherCategory) -> Vec<&'static str> {
        lookup(self.nature_by_weather, &category)
            .iter()
            .chain(self.month_nature(month))
            .copied()
            .collect()
    }

    #[must_use]
    pub fn weekday(&self, weekday: chrono::Weekday) -> &'static str {
        self.weekdays[weekday.num_days_from_monday() as usize]
    }
}

/// Catalog for `language`
#[must_use]
pub fn catalog(language: Language) -> &'static Catalog {
    match language {
        Language::En => &en::CATALOG,
        Language::De => &de::CATALOG,
    }
}
