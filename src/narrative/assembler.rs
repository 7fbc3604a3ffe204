//! Builds the narrative paragraph from independently sampled fragments

use chrono::{Datelike, NaiveDate};
use rand::RngExt;
use rand::seq::IndexedRandom;

use super::content::{Catalog, ClosingKind};
use super::scenario::{Params, Scenario};
use crate::models::solar::format_clock_time;
use crate::models::{SolarDelta, WeatherCategory};

const DAYLIGHT_FACT_PROBABILITY: f64 = 0.7;
const DELTA_PROBABILITY: f64 = 0.6;
const SEASONAL_PROBABILITY: f64 = 0.5;
const NATURE_PROBABILITY: f64 = 0.8;
const GENERAL_FACT_PROBABILITY: f64 = 0.3;
const CLOSING_PROBABILITY: f64 = 0.2;

pub const MIN_FRAGMENTS: usize = 3;
pub const MAX_FRAGMENTS: usize = 6;

/// Eight phases of the year anchored on the solstices and equinoxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonalPhase {
    DeepWinter,
    LateWinter,
    EarlySpring,
    LateSpring,
    PeakSummer,
    LateSummer,
    EarlyAutumn,
    LateAutumn,
}

/// First (month, day) of each phase in calendar order; before Feb 1 wraps to deep winter
const PHASE_STARTS: [((u32, u32), SeasonalPhase); 8] = [
    ((2, 1), SeasonalPhase::LateWinter),
    ((3, 20), SeasonalPhase::EarlySpring),
    ((5, 1), SeasonalPhase::LateSpring),
    ((6, 21), SeasonalPhase::PeakSummer),
    ((8, 1), SeasonalPhase::LateSummer),
    ((9, 22), SeasonalPhase::EarlyAutumn),
    ((11, 1), SeasonalPhase::LateAutumn),
    ((12, 21), SeasonalPhase::DeepWinter),
];

impl SeasonalPhase {
    pub const ALL: [Self; 8] = [
        Self::DeepWinter,
        Self::LateWinter,
        Self::EarlySpring,
        Self::LateSpring,
        Self::PeakSummer,
        Self::LateSummer,
        Self::EarlyAutumn,
        Self::LateAutumn,
    ];

    /// Phase containing `date`; start dates belong to the new phase
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let day = (date.month(), date.day());
        PHASE_STARTS
            .iter()
            .rev()
            .find(|(start, _)| day >= *start)
            .map_or(Self::DeepWinter, |(_, phase)| *phase)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeepWinter => "deep_winter",
            Self::LateWinter => "late_winter",
            Self::EarlySpring => "early_spring",
            Self::LateSpring => "late_spring",
            Self::PeakSummer => "peak_summer",
            Self::LateSummer => "late_summer",
            Self::EarlyAutumn => "early_autumn",
            Self::LateAutumn => "late_autumn",
        }
    }
}

/// Replace every `{name}` with its value. Returns the template unchanged when
/// any placeholder has no value.
#[must_use]
pub fn interpolate(template: &str, params: &Params) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(len) = rest[open..].find('}') else {
            break;
        };
        let name = &rest[open + 1..open + len];
        let Some(value) = params.get(name) else {
            return template.to_string();
        };
        out.push_str(&rest[..open]);
        out.push_str(value);
        rest = &rest[open + len + 1..];
    }

    out.push_str(rest);
    out
}

/// Inputs for one assembly pass
#[derive(Debug, Clone, Copy)]
pub struct AssemblyContext<'a> {
    pub scenario: &'a Scenario,
    /// `None` when no daylight data was available
    pub solar: Option<&'a SolarDelta>,
    pub category: WeatherCategory,
    pub today: NaiveDate,
}

fn pick<R: RngExt + ?Sized>(templates: &[&str], params: &Params, rng: &mut R) -> Option<String> {
    templates.choose(rng).map(|t| interpolate(t, params))
}

/// Sample the fragments of one narrative, primary scenario text first
pub fn assemble_fragments<R: RngExt + ?Sized>(
    context: &AssemblyContext<'_>,
    catalog: &Catalog,
    rng: &mut R,
) -> Vec<String> {
    let no_params = Params::new();
    let month = context.today.month();
    let phase = SeasonalPhase::for_date(context.today);
    let mut parts = Vec::new();

    parts.extend(pick(catalog.primary(context.scenario), &context.scenario.params, rng));

    if let Some(solar) = context.solar.filter(|_| rng.random_bool(DAYLIGHT_FACT_PROBABILITY)) {
        let params = Params::from([
            ("day_length", solar.format_day_length()),
            ("sunrise", format_clock_time(solar.sunrise)),
            ("sunset", format_clock_time(solar.sunset)),
        ]);
        parts.extend(pick(catalog.daylight_facts, &params, rng));
    }

    let delta_min = context.solar.map_or(0, SolarDelta::delta_daily_minutes);
    if delta_min.abs() >= 1 && rng.random_bool(DELTA_PROBABILITY) {
        let templates = if delta_min > 0 {
            catalog.delta_gain
        } else {
            catalog.delta_loss
        };
        let params = Params::from([("delta", delta_min.abs().to_string())]);
        parts.extend(pick(templates, &params, rng));
    }

    if rng.random_bool(SEASONAL_PROBABILITY) {
        parts.extend(pick(catalog.seasonal(phase), &no_params, rng));
    }

    if rng.random_bool(NATURE_PROBABILITY) {
        parts.extend(pick(&catalog.nature(month, context.category), &no_params, rng));
    }

    if rng.random_bool(GENERAL_FACT_PROBABILITY) {
        parts.extend(pick(catalog.general_facts, &no_params, rng));
    }

    if rng.random_bool(CLOSING_PROBABILITY) {
        let kind = ClosingKind::ALL.choose(rng).copied().unwrap_or(ClosingKind::Simple);
        parts.extend(pick(catalog.closing(kind), &no_params, rng));
    }

    parts.truncate(MAX_FRAGMENTS);

    for pool in [catalog.seasonal(phase), catalog.month_nature(month)] {
        while parts.len() < MIN_FRAGMENTS {
            let fresh: Vec<&str> = pool
                .iter()
                .copied()
                .filter(|t| !parts.iter().any(|p| p == t))
                .collect();
            let Some(extra) = fresh.choose(rng) else {
                break;
            };
            parts.push((*extra).to_string());
        }
    }

    parts
}

/// Join fragments into one paragraph with single spaces
#[must_use]
pub fn join_fragments(parts: &[String]) -> String {
    let mut text = parts.join(" ");
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    text.trim().to_string()
}

pub fn assemble<R: RngExt + ?Sized>(context: &AssemblyContext<'_>, catalog: &Catalog, rng: &mut R) -> String {
    join_fragments(&assemble_fragments(context, catalog, rng))
}
