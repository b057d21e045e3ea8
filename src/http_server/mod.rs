//! # HTTP Server
//!
//! The HTTP surface of the directory service:
//!
//! - `POST /addSchool` — validate and persist a school
//! - `GET /listSchools` — all schools ranked by distance from a query point
//! - `GET /health` — liveness check
//!
//! Validation happens here, at the boundary; the store and the ranker only
//! ever see checked input. Every error is surfaced to the caller in the
//! response; nothing is retried or swallowed, and the process keeps serving
//! after any request error.

mod config;
mod errors;
mod request;
mod response;
mod school_routes;
mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use request::{parse_reference_point, AddSchoolRequest, ApiJson};
pub use response::{AddSchoolResponse, HealthResponse};
pub use school_routes::{health_routes, school_routes, AppState};
pub use server::HttpServer;
