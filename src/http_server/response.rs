//! # Response Types
//!
//! Typed response bodies. The listing endpoint responds with a bare JSON
//! array of ranked schools, so only creation and health have structs here.

use serde::Serialize;

/// Body of a successful `POST /addSchool`.
#[derive(Debug, Clone, Serialize)]
pub struct AddSchoolResponse {
    pub message: String,
    #[serde(rename = "schoolId")]
    pub school_id: String,
}

impl AddSchoolResponse {
    pub fn created(school_id: impl Into<String>) -> Self {
        Self {
            message: "School added successfully".to_string(),
            school_id: school_id.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
