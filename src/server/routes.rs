//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::coord::Coordinate;
use crate::error::Error;
use crate::format::Report;
use crate::pharmacy::cities::{self, City};
use crate::search::state::{reduce, SearchAction, SearchError, SearchState};
use crate::search::{search_at, search_manual};
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/cities", get(cities_handler))
        .route("/api/pharmacies", get(pharmacies_handler))
        .route("/api/pharmacies/manual", get(manual_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn api_error(status: StatusCode, code: &str, error: impl ToString) -> (StatusCode, Json<ApiError>) {
    (
        status,
        Json(ApiError {
            error: error.to_string(),
            code: code.to_string(),
        }),
    )
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::Config(_) => "CONFIG_ERROR",
            Error::NoPharmacies => "NO_PHARMACIES",
            Error::UnknownCity(_) | Error::UnknownDistrict { .. } => "INVALID_SELECTION",
            Error::Directory(_) | Error::Http(_) => "DIRECTORY_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

fn search_failure(error: &SearchError) -> (StatusCode, Json<ApiError>) {
    let (status, code) = match error {
        SearchError::MissingSelection | SearchError::InvalidSelection(_) => {
            (StatusCode::BAD_REQUEST, "INVALID_SELECTION")
        }
        SearchError::NoPharmacies => (StatusCode::NOT_FOUND, "NO_PHARMACIES"),
        SearchError::GeolocationFailed => (StatusCode::BAD_GATEWAY, "LOCATION_ERROR"),
        SearchError::LookupFailed => (StatusCode::BAD_GATEWAY, "DIRECTORY_ERROR"),
    };
    api_error(status, code, error)
}

/// Turn a finished search into a report or an error response
fn into_report(
    state: SearchState,
    limit: Option<usize>,
    ad_interval: usize,
) -> ApiResult<Report> {
    if let Some(error) = &state.error {
        return Err(search_failure(error));
    }
    let Some(location) = state.location else {
        return Err(search_failure(&SearchError::LookupFailed));
    };

    let label = state
        .location_label
        .unwrap_or_else(|| location.to_string());
    let mut results = state.results;
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    Ok(Json(Report::new(location, label, results, ad_interval)))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub running: bool,
    pub version: String,
    /// Whether live lookups can be served
    pub directory_configured: bool,
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        directory_configured: state.directory_configured().await,
        uptime_secs: state.uptime_secs(),
    })
}

/// Cities list response
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<City>,
}

/// List cities available for manual search
///
/// GET /api/cities
async fn cities_handler() -> Json<CitiesResponse> {
    Json(CitiesResponse {
        cities: cities::all(),
    })
}

/// Coordinate search query
#[derive(Debug, Deserialize)]
pub struct PharmaciesQuery {
    pub lat: f64,
    pub lng: f64,
    pub limit: Option<usize>,
}

/// Live on-duty lookup around a coordinate
///
/// GET /api/pharmacies?lat=..&lng=..
async fn pharmacies_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PharmaciesQuery>,
) -> ApiResult<Report> {
    let location = Coordinate::new(query.lat, query.lng);
    location
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiError::from(e))))?;

    let directory = state
        .directory()
        .await
        .map_err(|e| (StatusCode::SERVICE_UNAVAILABLE, Json(ApiError::from(e))))?;
    let ad_interval = state.config.read().await.defaults.ad_interval;

    let result = search_at(SearchState::default(), location, &directory).await;
    into_report(result, query.limit, ad_interval)
}

/// Manual city/district query
#[derive(Debug, Deserialize)]
pub struct ManualQuery {
    pub city: String,
    pub district: String,
    pub limit: Option<usize>,
}

/// Manual search by city and district
///
/// GET /api/pharmacies/manual?city=..&district=..
async fn manual_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ManualQuery>,
) -> ApiResult<Report> {
    let ad_interval = state.config.read().await.defaults.ad_interval;

    let search = reduce(SearchState::default(), SearchAction::EnterManualMode);
    let search = reduce(search, SearchAction::SelectCity(query.city));
    let search = reduce(search, SearchAction::SelectDistrict(query.district));

    let result = search_manual(search).await;
    into_report(result, query.limit, ad_interval)
}
