//! JSON routes under `/api`

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{ConnectInfo, Query, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

use crate::config::{DefaultsConfig, RateLimitConfig};
use crate::geocoding::{Geocoder, PlaceSuggestion};
use crate::models::{Location, NarrativeText, SolarDelta};
use crate::narrative::{Language, UpliftService};
use crate::rate_limiter::RateLimiter;

const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please wait a moment.";
const RETRY_AFTER_SECONDS: u64 = 60;

/// Shared handles for every route
#[derive(Clone)]
pub struct AppState {
    pub uplift: Arc<UpliftService>,
    pub geocoder: Arc<dyn Geocoder>,
    pub rate_limiter: Arc<RateLimiter>,
    pub limits: RateLimitConfig,
    pub defaults: DefaultsConfig,
}

/// Coordinates as sent by clients; anything unparseable falls back to the defaults
#[derive(Debug, Default, Deserialize)]
pub struct CoordinateQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub city: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub city: Option<String>,
}

impl SearchQuery {
    fn text(&self) -> &str {
        self.q.as_deref().or(self.city.as_deref()).unwrap_or_default()
    }
}

#[derive(Serialize)]
struct UpliftResponse {
    success: bool,
    #[serde(flatten)]
    narrative: NarrativeText,
}

#[derive(Serialize)]
struct SolarResponse {
    success: bool,
    daylight: Option<SolarDelta>,
}

#[derive(Serialize)]
struct GeocodeResponse {
    success: bool,
    #[serde(flatten)]
    place: PlaceSuggestion,
}

fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    value?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl CoordinateQuery {
    /// Clamped location, named after `city` when given
    fn location(&self, defaults: &DefaultsConfig) -> Location {
        let lat = parse_coordinate(self.lat.as_deref()).unwrap_or(defaults.latitude);
        let lon = parse_coordinate(self.lon.as_deref()).unwrap_or(defaults.longitude);
        let mut location = Location::clamped(lat, lon);
        if let Some(city) = self.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            location.name = city.to_string();
        }
        location
    }

    fn language(&self) -> Language {
        self.lang.as_deref().map(Language::from_code).unwrap_or_default()
    }
}

/// Client key for rate limiting: first forwarded address, else the peer
fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|p| p.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

fn rate_limited() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({
            "success": false,
            "error": RATE_LIMIT_MESSAGE,
            "retry_after": RETRY_AFTER_SECONDS,
        })),
    )
        .into_response()
}

/// Each route group counts against its own window
async fn enforce(state: &AppState, scope: &str, limit: u32, request: Request, next: Next) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client = client_key(request.headers(), peer);

    if !state.rate_limiter.is_allowed(&format!("{scope}:{client}"), limit) {
        warn!(client = %client, path = %request.uri().path(), "Rate limit exceeded");
        return rate_limited();
    }
    next.run(request).await
}

async fn limit_uplift(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let limit = state.limits.uplift_per_minute;
    enforce(&state, "uplift", limit, request, next).await
}

async fn limit_search(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let limit = state.limits.search_per_minute;
    enforce(&state, "search", limit, request, next).await
}

pub fn router(state: AppState) -> Router {
    let uplift = Router::new()
        .route("/uplift", get(get_uplift))
        .route_layer(middleware::from_fn_with_state(state.clone(), limit_uplift));

    let search = Router::new()
        .route("/search", get(search))
        .route("/geocode_suggest", get(search))
        .route("/geocode", get(geocode))
        .route_layer(middleware::from_fn_with_state(state.clone(), limit_search));

    Router::new()
        .route("/solar", get(get_solar))
        .merge(uplift)
        .merge(search)
        .with_state(state)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn get_uplift(State(state): State<AppState>, Query(query): Query<CoordinateQuery>) -> Response {
    let location = query.location(&state.defaults);
    match state.uplift.generate(&location, query.language()).await {
        Ok(narrative) => Json(UpliftResponse {
            success: true,
            narrative,
        })
        .into_response(),
        Err(e) => {
            error!("Narrative generation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.user_message() })),
            )
                .into_response()
        }
    }
}

async fn get_solar(State(state): State<AppState>, Query(query): Query<CoordinateQuery>) -> Json<SolarResponse> {
    let location = query.location(&state.defaults);
    Json(SolarResponse {
        success: true,
        daylight: state.uplift.daylight(&location).await,
    })
}

async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Json<Vec<PlaceSuggestion>> {
    Json(state.geocoder.search(query.text()).await)
}

async fn geocode(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Response {
    match state.geocoder.search(query.text()).await.into_iter().next() {
        Some(place) => Json(GeocodeResponse { success: true, place }).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "error": "no results" })),
        )
            .into_response(),
    }
}
