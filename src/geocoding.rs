//! City search backed by the `OpenMeteo` geocoding API

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::cache::TtlCache;
use crate::clock::Clock;
use crate::http::HttpFetcher;

/// Queries shorter than this return no results
pub const MIN_QUERY_LENGTH: usize = 2;
const RESULT_COUNT: usize = 8;

/// One search hit as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Places matching `query`; empty on short queries and upstream failure
    async fn search(&self, query: &str) -> Vec<PlaceSuggestion>;
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
}

impl From<GeocodingResult> for PlaceSuggestion {
    fn from(result: GeocodingResult) -> Self {
        let mut parts = vec![result.name];
        parts.extend(result.admin1.filter(|a| !a.is_empty() && !parts.contains(a)));
        parts.extend(result.country.filter(|c| !c.is_empty()));
        Self {
            name: parts.join(", "),
            lat: result.latitude,
            lon: result.longitude,
        }
    }
}

pub struct GeocodingClient {
    fetcher: HttpFetcher,
    base_url: String,
    cache: TtlCache<Vec<PlaceSuggestion>>,
}

impl GeocodingClient {
    pub fn new(
        fetcher: HttpFetcher,
        base_url: impl Into<String>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            cache: TtlCache::new(ttl, clock),
        }
    }
}

/// Trimmed, lower-cased query, or `None` when too short to search
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
    let query = query.trim();
    (query.chars().count() >= MIN_QUERY_LENGTH).then(|| query.to_lowercase())
}

#[async_trait]
impl Geocoder for GeocodingClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Vec<PlaceSuggestion> {
        let Some(key) = normalize_query(query) else {
            return Vec::new();
        };

        if let Some(cached) = self.cache.get(&key) {
            debug!("Geocoding cache hit for '{}'", key);
            return cached;
        }

        let url = format!(
            "{}/search?name={}&count={}&language=en&format=json",
            self.base_url,
            urlencoding::encode(query.trim()),
            RESULT_COUNT
        );

        let response: GeocodingResponse = match self.fetcher.get_json(&url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Geocoding request for '{}' failed: {:#}", key, e);
                return Vec::new();
            }
        };

        let suggestions: Vec<PlaceSuggestion> = response
            .results
            .unwrap_or_default()
            .into_iter()
            .map(PlaceSuggestion::from)
            .collect();

        if suggestions.is_empty() {
            warn!("No results found for location '{}'", key);
        }
        self.cache.insert(&key, suggestions.clone());
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::config::ApiConfig;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" B "), None);
        assert_eq!(normalize_query("Berlin"), Some("berlin".to_string()));
        assert_eq!(normalize_query("  Zü "), Some("zü".to_string()));
    }

    #[test]
    fn test_result_conversion() {
        let response: GeocodingResponse = serde_json::from_str(
            r#"{"results": [
                {"name": "Berlin", "country": "Germany", "admin1": "Land Berlin", "latitude": 52.52, "longitude": 13.40},
                {"name": "Zurich", "country": "Switzerland", "admin1": "Zurich", "latitude": 47.37, "longitude": 8.54}
            ]}"#,
        )
        .unwrap();
        let suggestions: Vec<PlaceSuggestion> = response
            .results
            .unwrap()
            .into_iter()
            .map(PlaceSuggestion::from)
            .collect();

        assert_eq!(suggestions[0].name, "Berlin, Land Berlin, Germany");
        assert_eq!(suggestions[0].lat, 52.52);
        assert_eq!(suggestions[1].name, "Zurich, Switzerland");
    }

    #[test]
    fn test_missing_results_field() {
        let response: GeocodingResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_none());
    }

    #[tokio::test]
    async fn test_short_query_skips_upstream() {
        let client = GeocodingClient::new(
            HttpFetcher::new(&ApiConfig::default()).unwrap(),
            "http://127.0.0.1:9",
            Duration::from_secs(3600),
            Arc::new(SystemClock),
        );
        assert!(client.search("B").await.is_empty());
        assert!(client.search("").await.is_empty());
    }
}
