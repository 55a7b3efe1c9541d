//! Challenge nonces, Ed25519 signature verification and the sign-in flow.

pub mod challenge;
pub mod nonce;
pub mod verify;

pub use challenge::{request_nonce, submit_signature, AuthError};
pub use nonce::{generate_challenge_nonce, Challenge, NonceError};
pub use verify::{verify_signature, VerifyError};
