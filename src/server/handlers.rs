use crate::domain::model::AvailabilityVerdict;
use crate::server::state::AppState;
use crate::server::types::{ApiError, ApiResult, CheckRequest, NonceResponse};
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// GET /health
pub async fn health_check() -> &'static str {
    "ok"
}

/// GET /api/v1/nonce
///
/// Issues the anti-forgery token the storefront must echo back on /check.
pub async fn get_nonce(State(state): State<Arc<AppState>>) -> Json<NonceResponse> {
    Json(NonceResponse {
        nonce: state.nonces.issue(),
    })
}

/// POST /api/v1/check
///
/// The single server-side operation behind the storefront form: verify the
/// nonce, then run the geocode -> rate sequence and return the verdict. A
/// "does not ship here" outcome is a 200 with can_ship=false, never an
/// error.
pub async fn check_availability(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckRequest>,
) -> ApiResult<AvailabilityVerdict> {
    if !state.nonces.verify(&req.nonce) {
        tracing::warn!("Rejected check with invalid or expired nonce");
        return Err(ApiError::invalid_nonce());
    }

    let verdict = state
        .orchestrator
        .check(&req.postal_code, &req.country)
        .await
        .map_err(|e| {
            tracing::warn!("Check failed for '{}': {}", req.postal_code, e);
            ApiError::from(e)
        })?;

    Ok(Json(verdict))
}
