//! Challenge-response flow over a [`NonceStore`].
//!
//! `request_nonce` hands out a challenge for an address. `submit_signature`
//! checks a wallet signature against that address's pending challenge and
//! consumes the challenge only when the signature is good. A rejected
//! signature leaves the challenge pending so the wallet can retry.

use crate::auth::nonce::{Challenge, NonceError};
use crate::auth::verify::{verify_signature, VerifyError};
use crate::storage::nonce::NonceStore;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Nonce generation failed: {0}")]
    Generation(#[from] NonceError),

    #[error("No pending challenge")]
    NotFound,

    #[error("Signature rejected: {0}")]
    Unauthorized(#[from] VerifyError),
}

/// Issue a challenge for `address`, replacing any pending one.
pub fn request_nonce(store: &NonceStore, address: &str) -> Result<Challenge, AuthError> {
    Ok(store.issue(address)?)
}

/// Verify `signature` against the pending challenge for `address`.
///
/// `Ok(())` means accepted and the challenge is gone. If a concurrent request
/// consumed or replaced the challenge between the lookup and the removal,
/// this attempt is reported as `NotFound`.
pub fn submit_signature(
    store: &NonceStore,
    address: &str,
    signature: &str,
) -> Result<(), AuthError> {
    let challenge = store.fetch(address).ok_or(AuthError::NotFound)?;

    verify_signature(address, signature, challenge.as_bytes())?;

    if !store.consume_issued(address, &challenge) {
        return Err(AuthError::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::address_of;
    use ed25519_dalek::{Signer, SigningKey};

    struct Wallet {
        key: SigningKey,
        address: String,
    }

    impl Wallet {
        fn new() -> Self {
            let mut seed = [0u8; 32];
            rand::fill(&mut seed);
            let key = SigningKey::from_bytes(&seed);
            let address = address_of(&key);
            Wallet { key, address }
        }

        fn sign(&self, message: &[u8]) -> String {
            bs58::encode(self.key.sign(message).to_bytes()).into_string()
        }
    }

    #[test]
    fn test_round_trip_consumes_challenge() {
        let store = NonceStore::new();
        let wallet = Wallet::new();

        let nonce = request_nonce(&store, &wallet.address).unwrap();
        let signature = wallet.sign(nonce.as_bytes());

        assert!(submit_signature(&store, &wallet.address, &signature).is_ok());
        assert!(store.fetch(&wallet.address).is_none());
    }

    #[test]
    fn test_replay_after_success_is_not_found() {
        let store = NonceStore::new();
        let wallet = Wallet::new();

        let nonce = request_nonce(&store, &wallet.address).unwrap();
        let signature = wallet.sign(nonce.as_bytes());
        submit_signature(&store, &wallet.address, &signature).unwrap();

        let result = submit_signature(&store, &wallet.address, &signature);
        assert!(matches!(result, Err(AuthError::NotFound)));
    }

    #[test]
    fn test_no_pending_challenge() {
        let store = NonceStore::new();
        let wallet = Wallet::new();

        let result = submit_signature(&store, &wallet.address, &wallet.sign(b"anything"));
        assert!(matches!(result, Err(AuthError::NotFound)));
    }

    #[test]
    fn test_failed_verification_keeps_challenge_for_retry() {
        let store = NonceStore::new();
        let wallet = Wallet::new();
        let nonce = request_nonce(&store, &wallet.address).unwrap();

        // Signed over a different string
        let wrong = wallet.sign(b"not the nonce");
        let result = submit_signature(&store, &wallet.address, &wrong);
        assert!(matches!(
            result,
            Err(AuthError::Unauthorized(VerifyError::SignatureMismatch))
        ));

        // Malformed signature
        let result = submit_signature(&store, &wallet.address, "garbage!");
        assert!(matches!(
            result,
            Err(AuthError::Unauthorized(VerifyError::InvalidSignature(_)))
        ));

        assert_eq!(store.fetch(&wallet.address).as_ref(), Some(&nonce));

        let good = wallet.sign(nonce.as_bytes());
        assert!(submit_signature(&store, &wallet.address, &good).is_ok());
    }

    #[test]
    fn test_signature_from_another_wallet_rejected() {
        let store = NonceStore::new();
        let victim = Wallet::new();
        let attacker = Wallet::new();

        let nonce = request_nonce(&store, &victim.address).unwrap();
        let forged = attacker.sign(nonce.as_bytes());

        let result = submit_signature(&store, &victim.address, &forged);
        assert!(matches!(
            result,
            Err(AuthError::Unauthorized(VerifyError::SignatureMismatch))
        ));
        assert!(store.fetch(&victim.address).is_some());
    }

    #[test]
    fn test_signature_over_replaced_nonce_rejected() {
        let store = NonceStore::new();
        let wallet = Wallet::new();

        let first = request_nonce(&store, &wallet.address).unwrap();
        let second = request_nonce(&store, &wallet.address).unwrap();

        let stale = wallet.sign(first.as_bytes());
        assert!(submit_signature(&store, &wallet.address, &stale).is_err());

        let fresh = wallet.sign(second.as_bytes());
        assert!(submit_signature(&store, &wallet.address, &fresh).is_ok());
    }

    #[test]
    fn test_malformed_address_with_pending_challenge() {
        let store = NonceStore::new();
        request_nonce(&store, "not-a-wallet").unwrap();

        let result = submit_signature(&store, "not-a-wallet", "sig");
        assert!(matches!(
            result,
            Err(AuthError::Unauthorized(VerifyError::InvalidIdentity(_)))
        ));
        assert!(store.fetch("not-a-wallet").is_some());
    }
}
