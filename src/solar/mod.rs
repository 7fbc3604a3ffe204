//! Daylight providers
//!
//! A provider turns a coordinate and calendar day into a [`SolarDelta`], or
//! `None` when no daylight data could be obtained.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::cache::TtlCache;
use crate::clock::Clock;
use crate::models::{Location, SolarDelta};

pub mod delta;
pub mod local;
pub mod open_meteo;

pub use delta::derive_solar_delta;
pub use local::LocalSolarProvider;
pub use open_meteo::OpenMeteoSolarProvider;

#[async_trait]
pub trait SolarDeltaProvider: Send + Sync {
    /// Day length and deltas for `today` at `location`. Upstream failures yield `None`.
    async fn solar_delta(&self, location: &Location, today: NaiveDate) -> Option<SolarDelta>;
}

/// Caches successful lookups of another provider by rounded coordinates and day
pub struct CachedSolarProvider {
    inner: Arc<dyn SolarDeltaProvider>,
    cache: TtlCache<SolarDelta>,
}

impl CachedSolarProvider {
    pub fn new(inner: Arc<dyn SolarDeltaProvider>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner,
            cache: TtlCache::new(ttl, clock),
        }
    }
}

#[async_trait]
impl SolarDeltaProvider for CachedSolarProvider {
    async fn solar_delta(&self, location: &Location, today: NaiveDate) -> Option<SolarDelta> {
        let key = location.cache_key("solar", &today.to_string());
        if let Some(cached) = self.cache.get(&key) {
            debug!("Solar cache hit for {}", key);
            return Some(cached);
        }

        let delta = self.inner.solar_delta(location, today).await?;
        self.cache.insert(&key, delta.clone());
        Some(delta)
    }
}
