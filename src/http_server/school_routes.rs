//! School HTTP Routes
//!
//! Handlers for creation and proximity listing, plus the health endpoint.
//! Each request is handled independently; the shared store handle is the
//! only state.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::geo::{rank_by_distance, RankedSchool};
use crate::observability::Logger;
use crate::store::SchoolStore;

use super::errors::ApiError;
use super::request::{parse_reference_point, AddSchoolRequest, ApiJson};
use super::response::{AddSchoolResponse, HealthResponse};

/// State shared across request handlers: the store handle, opened once at
/// startup.
pub struct AppState {
    pub store: Arc<dyn SchoolStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self { store }
    }
}

/// Routes for school creation and listing.
pub fn school_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/addSchool", post(add_school_handler))
        .route("/listSchools", get(list_schools_handler))
        .with_state(state)
}

/// Health check route.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// `POST /addSchool`
async fn add_school_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<AddSchoolRequest>,
) -> Result<(StatusCode, Json<AddSchoolResponse>), ApiError> {
    let new = body.validate().map_err(|e| {
        Logger::warn("ADD_SCHOOL_REJECTED", &[("reason", &e.to_string())]);
        e
    })?;

    let record = state.store.insert(new).map_err(|e| {
        Logger::error("STORE_INSERT_FAILED", &[("detail", &e.to_string())]);
        e
    })?;

    Logger::info(
        "SCHOOL_ADDED",
        &[("school_id", record.id.as_str()), ("name", record.name.as_str())],
    );

    Ok((
        StatusCode::CREATED,
        Json(AddSchoolResponse::created(record.id)),
    ))
}

/// `GET /listSchools`
async fn list_schools_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<RankedSchool>>, ApiError> {
    let reference = parse_reference_point(&params).map_err(|e| {
        Logger::warn("LIST_SCHOOLS_REJECTED", &[("reason", &e.to_string())]);
        e
    })?;

    let records = state.store.fetch_all().map_err(|e| {
        Logger::error("STORE_FETCH_FAILED", &[("detail", &e.to_string())]);
        e
    })?;

    let ranked = rank_by_distance(reference, records);

    Logger::info("SCHOOLS_LISTED", &[("count", &ranked.len().to_string())]);

    Ok(Json(ranked))
}
