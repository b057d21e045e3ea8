//! # API Errors
//!
//! The request-level error taxonomy: validation failures map to 400,
//! store failures to 500. Messages for missing fields and missing query
//! coordinates are part of the external contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::geo::CoordinateError;
use crate::store::StoreError;

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Validation (400)
    // ==================
    /// A creation field is missing or empty
    #[error("All fields are required")]
    MissingFields,

    /// Listing request without latitude/longitude query parameters
    #[error("Latitude and longitude are required")]
    MissingCoordinates,

    /// Coordinate text that does not parse to a number
    #[error("invalid {axis}: '{value}' is not a number")]
    UnparsableCoordinate { axis: &'static str, value: String },

    /// Coordinate out of range or non-finite
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    // ==================
    // Store (500)
    // ==================
    /// Persistence failure, surfaced with its detail
    #[error("Database error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::MissingCoordinates => StatusCode::BAD_REQUEST,
            ApiError::UnparsableCoordinate { .. } => StatusCode::BAD_REQUEST,
            ApiError::Coordinate(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
