//! # Request Validation
//!
//! The boundary contract. Creation bodies arrive with every field optional
//! and are checked explicitly; listing coordinates arrive as text query
//! parameters and go through an explicit parse-and-validate step. Nothing
//! unchecked reaches the store or the ranker.
//!
//! Zero is a valid coordinate on both axes: presence is checked with
//! `Option`, never with truthiness.

use std::collections::HashMap;

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::geo::GeoPoint;
use crate::school::NewSchool;

use super::errors::{ApiError, ApiResult};

/// JSON body extractor that keeps deserialization failures on-contract.
///
/// An absent, malformed, or non-JSON body is indistinguishable from a body
/// with every field missing, so both surface the same "All fields are
/// required" rejection instead of the framework's plain-text one.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(_) => Err(ApiError::MissingFields),
        }
    }
}

/// Untrusted creation body for `POST /addSchool`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddSchoolRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AddSchoolRequest {
    /// Checks presence and validity of every field.
    ///
    /// Missing fields and empty (after trimming) name/address all produce
    /// the same "All fields are required" rejection; a present but invalid
    /// coordinate gets a message naming the axis.
    pub fn validate(self) -> ApiResult<NewSchool> {
        let name = self.name.filter(|s| !s.trim().is_empty());
        let address = self.address.filter(|s| !s.trim().is_empty());

        let (name, address, latitude, longitude) =
            match (name, address, self.latitude, self.longitude) {
                (Some(n), Some(a), Some(lat), Some(lon)) => (n, a, lat, lon),
                _ => return Err(ApiError::MissingFields),
            };

        let location = GeoPoint::new(latitude, longitude)?;

        Ok(NewSchool {
            name,
            address,
            location,
        })
    }
}

/// Parses the `latitude`/`longitude` query parameters of `GET /listSchools`
/// into a validated reference point.
pub fn parse_reference_point(params: &HashMap<String, String>) -> ApiResult<GeoPoint> {
    let (lat_text, lon_text) = match (params.get("latitude"), params.get("longitude")) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(ApiError::MissingCoordinates),
    };

    let latitude = parse_axis("latitude", lat_text)?;
    let longitude = parse_axis("longitude", lon_text)?;

    Ok(GeoPoint::new(latitude, longitude)?)
}

fn parse_axis(axis: &'static str, text: &str) -> ApiResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ApiError::UnparsableCoordinate {
            axis,
            value: text.to_string(),
        })
}
