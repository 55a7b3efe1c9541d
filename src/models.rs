//! Request and response bodies for the API.

use serde::{Deserialize, Serialize};

/// Request for a challenge nonce.
#[derive(Debug, Deserialize)]
pub struct NonceRequest {
    pub address: String, // base58 Ed25519 public key
}

/// Nonce the wallet must sign.
#[derive(Debug, Serialize)]
pub struct NonceResponse {
    pub nonce: String,
}

/// Signed nonce submitted for verification.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub address: String,
    pub signature: String, // base58
}

/// Response after successful verification.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub address: String,
    pub verified: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
