//! Wire types for the check endpoint: request DTO, error envelope, error
//! codes.

use crate::utils::error::{CheckError, GeocodeError, RateError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Standard API error codes
pub mod error_codes {
    // Client errors (1xxx)
    pub const MISSING_POSTAL_CODE: i32 = 1001;

    // Auth errors (2xxx)
    pub const INVALID_NONCE: i32 = 2001;

    // Resource errors (4xxx)
    pub const LOCATION_NOT_FOUND: i32 = 4001;

    // Upstream errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const RATE_ENGINE_UNAVAILABLE: i32 = 5001;
    pub const GEOCODE_UNREACHABLE: i32 = 5002;
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    pub nonce: String,
}

fn default_country() -> String {
    crate::core::orchestrator::DEFAULT_COUNTRY.to_string()
}

#[derive(Debug, Serialize)]
pub struct NonceResponse {
    pub nonce: String,
}

/// Error envelope returned for every non-2xx outcome. `message` is always
/// storefront-safe wording; detail goes to the logs only.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub code: i32,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_nonce() -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            error_codes::INVALID_NONCE,
            "Security check failed. Please reload the page and try again.",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<CheckError> for ApiError {
    fn from(err: CheckError) -> Self {
        let (status, code) = match &err {
            CheckError::MissingPostalCode => {
                (StatusCode::BAD_REQUEST, error_codes::MISSING_POSTAL_CODE)
            }
            CheckError::Geocode(GeocodeError::NotFound) => {
                (StatusCode::NOT_FOUND, error_codes::LOCATION_NOT_FOUND)
            }
            CheckError::Geocode(GeocodeError::ConnectionFailed(_)) => {
                (StatusCode::BAD_GATEWAY, error_codes::GEOCODE_UNREACHABLE)
            }
            CheckError::Rate(RateError::EngineUnavailable { .. }) => (
                StatusCode::SERVICE_UNAVAILABLE,
                error_codes::RATE_ENGINE_UNAVAILABLE,
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
            ),
        };
        Self::new(status, code, err.user_friendly_message())
    }
}

pub type ApiResult<T> = std::result::Result<Json<T>, ApiError>;
