//! Data models for Seasonal Horizon
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and metadata
//! - Weather: WMO weather codes and their classification
//! - Forecast: Daily forecasts and the week-level analysis
//! - Solar: Daylight samples and derived deltas
//! - Narrative: The text, facts and highlights returned to clients

pub mod forecast;
pub mod location;
pub mod narrative;
pub mod solar;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{
    DayForecast, DayRef, ForecastAnalysis, TempTrend, WeatherReport, WeekCharacter,
    WeekendOutlook,
};
pub use location::Location;
pub use narrative::{NarrativeText, UpliftFacts};
pub use solar::{DaylightSample, SolarDelta};
pub use weather::{WeatherCategory, WeatherCode};
