//! Ed25519 signature verification for Solana-style wallet addresses.
//!
//! An address is the base58 encoding of a 32-byte Ed25519 public key and a
//! signature is the base58 encoding of its 64 bytes.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("Invalid address: {0}")]
    InvalidIdentity(String),

    #[error("Invalid signature encoding: {0}")]
    InvalidSignature(String),

    #[error("Signature does not match")]
    SignatureMismatch,
}

impl VerifyError {
    /// Short stable tag for log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            VerifyError::InvalidIdentity(_) => "invalid_address",
            VerifyError::InvalidSignature(_) => "invalid_signature_encoding",
            VerifyError::SignatureMismatch => "signature_mismatch",
        }
    }
}

/// Decode a base58 address into an Ed25519 verifying key.
pub fn decode_address(address: &str) -> Result<VerifyingKey, VerifyError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| VerifyError::InvalidIdentity(format!("not base58: {}", e)))?;

    let array: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| {
        VerifyError::InvalidIdentity(format!("expected 32 bytes, got {}", b.len()))
    })?;

    VerifyingKey::from_bytes(&array)
        .map_err(|e| VerifyError::InvalidIdentity(format!("not a public key: {}", e)))
}

/// Decode a base58 Ed25519 signature.
pub fn decode_signature(signature: &str) -> Result<Signature, VerifyError> {
    let bytes = bs58::decode(signature)
        .into_vec()
        .map_err(|e| VerifyError::InvalidSignature(format!("not base58: {}", e)))?;

    let array: [u8; 64] = bytes.try_into().map_err(|b: Vec<u8>| {
        VerifyError::InvalidSignature(format!("expected 64 bytes, got {}", b.len()))
    })?;

    Ok(Signature::from_bytes(&array))
}

/// Check that `signature` was produced by the key behind `address` over the
/// exact bytes of `message`.
///
/// Pure: touches no stored state, so a failed check can be retried against
/// the same challenge.
pub fn verify_signature(address: &str, signature: &str, message: &[u8]) -> Result<(), VerifyError> {
    let verifying_key = decode_address(address)?;
    let signature = decode_signature(signature)?;

    verifying_key
        .verify(message, &signature)
        .map_err(|_| VerifyError::SignatureMismatch)
}
