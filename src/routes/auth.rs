//! Wallet sign-in endpoints.

use crate::auth::challenge::{self, AuthError};
use crate::config::RejectionLogging;
use crate::error::AppError;
use crate::models::{NonceRequest, NonceResponse, VerifyRequest, VerifyResponse};
use crate::routes::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

/// POST /api/nonce — Issue a challenge nonce for an address
pub async fn issue_nonce(
    State(state): State<AppState>,
    payload: Result<Json<NonceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    let nonce = challenge::request_nonce(&state.store, &req.address).map_err(|e| {
        tracing::error!(action = "nonce_generation_failed", address = %req.address, error = %e, "Could not generate nonce");
        AppError::from(e)
    })?;

    tracing::info!(action = "nonce_issued", address = %req.address, "Issued challenge nonce");

    Ok(Json(NonceResponse {
        nonce: nonce.to_string(),
    }))
}

/// POST /api/verify-signature — Check a signed nonce and consume it
pub async fn verify_signature(
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    if let Err(err) = challenge::submit_signature(&state.store, &req.address, &req.signature) {
        log_rejection(state.config.rejection_logging, &req.address, &err);
        return Err(err.into());
    }

    tracing::info!(action = "auth_success", address = %req.address, "Wallet signature verified");

    Ok(Json(VerifyResponse {
        address: req.address,
        verified: true,
    }))
}

fn log_rejection(mode: RejectionLogging, address: &str, err: &AuthError) {
    match (err, mode) {
        (AuthError::Unauthorized(cause), RejectionLogging::Detailed) => {
            tracing::warn!(action = "auth_failed", address = %address, reason = cause.reason(), detail = %cause, "Signature rejected");
        }
        (AuthError::Unauthorized(_), RejectionLogging::Uniform) => {
            tracing::warn!(action = "auth_failed", address = %address, "Signature rejected");
        }
        (AuthError::NotFound, _) => {
            tracing::info!(action = "challenge_missing", address = %address, "No pending challenge");
        }
        // Logged by AppError::Internal
        (AuthError::Generation(_), _) => {}
    }
}
