//! Weather forecast providers

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::cache::TtlCache;
use crate::clock::Clock;
use crate::models::{Location, WeatherReport};

pub mod analysis;
pub mod open_meteo;

pub use analysis::analyze_forecast;
pub use open_meteo::OpenMeteoWeatherProvider;

/// Days of forecast the narrative engine works with
pub const FORECAST_DAYS: usize = 7;

#[async_trait]
pub trait WeatherForecastProvider: Send + Sync {
    /// `days` of daily forecast starting today. Upstream failures yield `None`.
    async fn forecast(&self, location: &Location, days: usize) -> Option<WeatherReport>;
}

/// Caches successful forecasts of another provider
pub struct CachedWeatherProvider {
    inner: Arc<dyn WeatherForecastProvider>,
    cache: TtlCache<WeatherReport>,
    clock: Arc<dyn Clock>,
}

impl CachedWeatherProvider {
    pub fn new(inner: Arc<dyn WeatherForecastProvider>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner,
            cache: TtlCache::new(ttl, clock.clone()),
            clock,
        }
    }
}

#[async_trait]
impl WeatherForecastProvider for CachedWeatherProvider {
    async fn forecast(&self, location: &Location, days: usize) -> Option<WeatherReport> {
        let today = self.clock.now().date_naive();
        let key = format!("{}:{days}", location.cache_key("weather", &today.to_string()));
        if let Some(cached) = self.cache.get(&key) {
            debug!("Weather cache hit for {}", key);
            return Some(cached);
        }

        let report = self.inner.forecast(location, days).await?;
        self.cache.insert(&key, report.clone());
        Some(report)
    }
}
