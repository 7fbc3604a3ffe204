//! Seasonal Horizon - daylight and weather uplift narratives
//!
//! Combines how much daylight a place is gaining with its week-ahead
//! forecast and turns both into a short, encouraging text.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod http;
pub mod logging;
pub mod models;
pub mod narrative;
pub mod rate_limiter;
pub mod solar;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use cache::TtlCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::HorizonConfig;
pub use error::HorizonError;
pub use geocoding::{Geocoder, GeocodingClient, PlaceSuggestion};
pub use models::{Location, NarrativeText, SolarDelta, UpliftFacts, WeatherReport};
pub use narrative::{Language, SeedMode, UpliftService};
pub use rate_limiter::RateLimiter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, HorizonError>;
