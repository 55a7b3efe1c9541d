//! In-memory challenge store.
//!
//! Holds at most one outstanding challenge per wallet address. The table is
//! sharded and each shard sits behind a reader/writer lock, so lookups never
//! block each other and writes to different addresses rarely share a lock.
//! The table is only reachable through the operations below; there is no
//! iteration or snapshot API.

use crate::auth::nonce::{generate_challenge_nonce_with, Challenge, NonceError};
use dashmap::DashMap;
use rand::rngs::OsRng;
use rand::TryRngCore;

#[derive(Debug, Default)]
pub struct NonceStore {
    pending: DashMap<String, Challenge>,
}

impl NonceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh challenge for `address`, replacing any pending one.
    pub fn issue(&self, address: &str) -> Result<Challenge, NonceError> {
        self.issue_with(address, &mut OsRng)
    }

    /// Same as [`NonceStore::issue`] with an explicit random source.
    ///
    /// The nonce is generated before the table is touched, so a failing
    /// source leaves any pending challenge in place.
    pub fn issue_with<R>(&self, address: &str, rng: &mut R) -> Result<Challenge, NonceError>
    where
        R: TryRngCore + ?Sized,
    {
        let challenge = generate_challenge_nonce_with(rng)?;
        self.pending.insert(address.to_string(), challenge.clone());
        Ok(challenge)
    }

    /// Pending challenge for `address`, if any.
    ///
    /// `None` covers never issued, already consumed and replaced alike.
    pub fn fetch(&self, address: &str) -> Option<Challenge> {
        self.pending.get(address).map(|entry| entry.value().clone())
    }

    /// Remove the pending challenge for `address`. No-op if there is none.
    pub fn consume(&self, address: &str) {
        self.pending.remove(address);
    }

    /// Remove the pending challenge for `address` only if it is still
    /// `challenge`. Returns whether this call removed it.
    ///
    /// Of several callers racing on the same challenge, exactly one gets
    /// `true`. A challenge re-issued in the meantime is left alone.
    pub fn consume_issued(&self, address: &str, challenge: &Challenge) -> bool {
        self.pending
            .remove_if(address, |_, current| current == challenge)
            .is_some()
    }
}
