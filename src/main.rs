use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use seasonal_horizon::api::AppState;
use seasonal_horizon::clock::{Clock, SystemClock};
use seasonal_horizon::config::{HorizonConfig, SolarSource};
use seasonal_horizon::geocoding::GeocodingClient;
use seasonal_horizon::http::HttpFetcher;
use seasonal_horizon::narrative::UpliftService;
use seasonal_horizon::rate_limiter::RateLimiter;
use seasonal_horizon::solar::{CachedSolarProvider, LocalSolarProvider, OpenMeteoSolarProvider, SolarDeltaProvider};
use seasonal_horizon::weather::{CachedWeatherProvider, OpenMeteoWeatherProvider};
use seasonal_horizon::{VERSION, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = HorizonConfig::load()?;
    logging::init(&config.logging);
    info!(version = VERSION, solar_source = ?config.narrative.solar_source, "Starting Seasonal Horizon");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let fetcher = HttpFetcher::new(&config.api)?;

    let solar_source: Arc<dyn SolarDeltaProvider> = match config.narrative.solar_source {
        SolarSource::OpenMeteo => Arc::new(OpenMeteoSolarProvider::new(
            fetcher.clone(),
            &config.api.forecast_base_url,
        )),
        SolarSource::Local => Arc::new(LocalSolarProvider),
    };
    let solar = Arc::new(CachedSolarProvider::new(
        solar_source,
        Duration::from_secs(config.cache.solar_ttl_seconds),
        clock.clone(),
    ));
    let weather = Arc::new(CachedWeatherProvider::new(
        Arc::new(OpenMeteoWeatherProvider::new(fetcher.clone(), &config.api.forecast_base_url)),
        Duration::from_secs(config.cache.weather_ttl_seconds),
        clock.clone(),
    ));
    let geocoder = Arc::new(GeocodingClient::new(
        fetcher,
        &config.api.geocoding_base_url,
        Duration::from_secs(config.cache.geo_ttl_seconds),
        clock.clone(),
    ));

    let state = AppState {
        uplift: Arc::new(UpliftService::new(solar, weather, clock.clone(), config.narrative.seed_mode)),
        geocoder,
        rate_limiter: Arc::new(RateLimiter::new(clock)),
        limits: config.rate_limit.clone(),
        defaults: config.defaults.clone(),
    };

    web::run(&config, state).await
}
