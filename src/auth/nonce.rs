//! Challenge nonce generation.
//!
//! A nonce is 12 symbols drawn from `a-z` and `A-Z`. Each symbol comes from one
//! byte of OS randomness reduced modulo 52. Since 256 is not a multiple of 52,
//! the first 48 symbols of the alphabet are picked with probability 5/256 and
//! the last 4 with probability 4/256. That bias is known and accepted: the
//! nonce is an anti-replay token, not key material.

use rand::rngs::OsRng;
use rand::TryRngCore;
use std::fmt;
use zeroize::Zeroizing;

/// Symbols a nonce is built from.
pub const NONCE_ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in a nonce.
pub const NONCE_LEN: usize = 12;

#[derive(Debug, thiserror::Error)]
pub enum NonceError {
    #[error("Randomness source failed: {0}")]
    Randomness(String),
}

/// An issued challenge. The buffer is wiped when the last copy is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Challenge(Zeroizing<String>);

impl Challenge {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw bytes a wallet is expected to sign.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Challenge").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate a challenge nonce from the OS random source.
pub fn generate_challenge_nonce() -> Result<Challenge, NonceError> {
    generate_challenge_nonce_with(&mut OsRng)
}

/// Generate a challenge nonce from `rng`.
///
/// Fails if `rng` cannot supply bytes. There is no fallback generator.
pub fn generate_challenge_nonce_with<R>(rng: &mut R) -> Result<Challenge, NonceError>
where
    R: TryRngCore + ?Sized,
{
    let mut bytes = Zeroizing::new([0u8; NONCE_LEN]);
    rng.try_fill_bytes(&mut bytes[..])
        .map_err(|e| NonceError::Randomness(e.to_string()))?;

    let nonce: String = bytes
        .iter()
        .map(|b| NONCE_ALPHABET[*b as usize % NONCE_ALPHABET.len()] as char)
        .collect();

    Ok(Challenge(Zeroizing::new(nonce)))
}
