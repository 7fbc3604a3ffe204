//! Configuration management for Seasonal Horizon
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and provides validation for all configuration settings.

use crate::HorizonError;
use crate::narrative::SeedMode;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Upstream API settings
    pub api: ApiConfig,
    /// Provider cache lifetimes
    pub cache: CacheConfig,
    /// Per-client request limits
    pub rate_limit: RateLimitConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Location used when a request carries no usable coordinates
    pub defaults: DefaultsConfig,
    /// Narrative engine settings
    pub narrative: NarrativeConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for every path not handled by the API
    pub static_dir: String,
}

/// Upstream API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u32,
    /// Total attempts per upstream request
    pub max_retries: u32,
    /// Linear backoff step between attempts
    pub backoff_millis: u64,
    /// Base URL of the forecast API
    pub forecast_base_url: String,
    /// Base URL of the geocoding API
    pub geocoding_base_url: String,
}

/// Cache lifetimes in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub weather_ttl_seconds: u64,
    pub solar_ttl_seconds: u64,
    pub geo_ttl_seconds: u64,
}

/// Requests per minute and client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub uplift_per_minute: u32,
    pub search_per_minute: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

/// Default location settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
}

/// Where daylight data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolarSource {
    /// Open-Meteo `daylight_duration` series
    OpenMeteo,
    /// Computed in-process with the `sunrise` crate
    Local,
}

/// Narrative engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    pub seed_mode: SeedMode,
    pub solar_source: SolarSource,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_api_timeout() -> u32 {
    8
}

fn default_api_max_retries() -> u32 {
    3
}

fn default_backoff_millis() -> u64 {
    500
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_weather_ttl() -> u64 {
    300
}

fn default_solar_ttl() -> u64 {
    300
}

fn default_geo_ttl() -> u64 {
    3600
}

fn default_uplift_limit() -> u32 {
    30
}

fn default_search_limit() -> u32 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_api_timeout(),
            max_retries: default_api_max_retries(),
            backoff_millis: default_backoff_millis(),
            forecast_base_url: default_forecast_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    #[must_use]
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_millis)
    }

    /// Longest one upstream call can take: every attempt timing out plus
    /// the linear backoff waits between them
    #[must_use]
    pub fn retry_budget(&self) -> Duration {
        let attempts = self.max_retries.max(1);
        let waits = attempts * (attempts - 1) / 2;
        self.timeout() * attempts + self.backoff() * waits
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            weather_ttl_seconds: default_weather_ttl(),
            solar_ttl_seconds: default_solar_ttl(),
            geo_ttl_seconds: default_geo_ttl(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            uplift_per_minute: default_uplift_limit(),
            search_per_minute: default_search_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            latitude: 47.37,
            longitude: 8.54,
            city: "Zurich".to_string(),
        }
    }
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            seed_mode: SeedMode::Live,
            solar_source: SolarSource::OpenMeteo,
        }
    }
}

impl HorizonConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        let path = std::env::var_os("HORIZON_CONFIG").map(PathBuf::from);
        Self::load_from_path(path)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // HORIZON__SERVER__PORT=8080 style overrides
        builder = builder.add_source(
            Environment::with_prefix("HORIZON")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: HorizonConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.port == 0 {
            self.server.port = default_port();
        }
        if self.api.timeout_seconds == 0 {
            self.api.timeout_seconds = default_api_timeout();
        }
        if self.api.max_retries == 0 {
            self.api.max_retries = default_api_max_retries();
        }
        if self.api.forecast_base_url.is_empty() {
            self.api.forecast_base_url = default_forecast_base_url();
        }
        if self.api.geocoding_base_url.is_empty() {
            self.api.geocoding_base_url = default_geocoding_base_url();
        }
        if self.cache.weather_ttl_seconds == 0 {
            self.cache.weather_ttl_seconds = default_weather_ttl();
        }
        if self.cache.solar_ttl_seconds == 0 {
            self.cache.solar_ttl_seconds = default_solar_ttl();
        }
        if self.cache.geo_ttl_seconds == 0 {
            self.cache.geo_ttl_seconds = default_geo_ttl();
        }
        if self.rate_limit.uplift_per_minute == 0 {
            self.rate_limit.uplift_per_minute = default_uplift_limit();
        }
        if self.rate_limit.search_per_minute == 0 {
            self.rate_limit.search_per_minute = default_search_limit();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.api.timeout_seconds > 60 {
            return Err(HorizonError::config("API timeout cannot exceed 60 seconds").into());
        }

        if self.api.max_retries > 5 {
            return Err(HorizonError::config("API max retries cannot exceed 5").into());
        }

        if self.api.backoff_millis > 10_000 {
            return Err(HorizonError::config("API backoff cannot exceed 10000 ms").into());
        }

        if self.cache.geo_ttl_seconds > 86_400
            || self.cache.weather_ttl_seconds > 86_400
            || self.cache.solar_ttl_seconds > 86_400
        {
            return Err(HorizonError::config("Cache TTLs cannot exceed one day").into());
        }

        if !(-90.0..=90.0).contains(&self.defaults.latitude)
            || !(-180.0..=180.0).contains(&self.defaults.longitude)
        {
            return Err(HorizonError::config("Default coordinates are out of range").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(HorizonError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(HorizonError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for url in [&self.api.forecast_base_url, &self.api.geocoding_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(HorizonError::config(
                    "API base URLs must be valid HTTP or HTTPS URLs",
                )
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HorizonConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.api.timeout_seconds, 8);
        assert_eq!(config.api.max_retries, 3);
        assert_eq!(config.cache.weather_ttl_seconds, 300);
        assert_eq!(config.cache.geo_ttl_seconds, 3600);
        assert_eq!(config.rate_limit.uplift_per_minute, 30);
        assert_eq!(config.defaults.city, "Zurich");
        assert_eq!(config.narrative.seed_mode, SeedMode::Live);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_apply_defaults_repairs_zero_values() {
        let mut config = HorizonConfig::default();
        config.api.timeout_seconds = 0;
        config.logging.level = String::new();
        config.apply_defaults();
        assert_eq!(config.api.timeout_seconds, 8);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = HorizonConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = HorizonConfig::default();
        config.api.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_retry_budget() {
        let config = ApiConfig::default();
        // 3 x 8 s plus waits of 0.5 s and 1 s
        assert_eq!(config.retry_budget(), Duration::from_millis(25_500));

        let config = ApiConfig {
            timeout_seconds: 60,
            max_retries: 5,
            backoff_millis: 10_000,
            ..ApiConfig::default()
        };
        assert_eq!(config.retry_budget(), Duration::from_secs(400));

        let config = ApiConfig {
            max_retries: 0,
            ..ApiConfig::default()
        };
        assert_eq!(config.retry_budget(), Duration::from_secs(8));
    }

    #[test]
    fn test_config_validation_rejects_bad_url() {
        let mut config = HorizonConfig::default();
        config.api.geocoding_base_url = "ftp://example.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config =
            HorizonConfig::load_from_path(Some(PathBuf::from("/nonexistent/horizon.toml")))
                .unwrap();
        assert_eq!(config.defaults.latitude, 47.37);
        assert_eq!(config.narrative.solar_source, SolarSource::OpenMeteo);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = std::env::temp_dir().join(format!("horizon-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 8080\n\n[narrative]\nseed_mode = \"deterministic\"\nsolar_source = \"local\"\n",
        )
        .unwrap();

        let config = HorizonConfig::load_from_path(Some(path)).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.narrative.seed_mode, SeedMode::Deterministic);
        assert_eq!(config.narrative.solar_source, SolarSource::Local);
        // untouched sections keep their defaults
        assert_eq!(config.api.max_retries, 3);

        std::fs::remove_dir_all(&dir).ok();
    }
}
