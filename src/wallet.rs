//! Local keypair helpers behind the `keygen` and `sign` subcommands.
//!
//! Secrets use the Solana CLI layout: base58 of the 64-byte keypair
//! (32-byte seed followed by the 32-byte public key). A bare 32-byte seed is
//! accepted as well.

use ed25519_dalek::{Signer, SigningKey};
use zeroize::Zeroizing;

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Secret is not base58: {0}")]
    Encoding(String),

    #[error("Secret must be 32 or 64 bytes, got {0}")]
    Length(usize),

    #[error("Secret keypair is inconsistent: {0}")]
    Keypair(String),
}

/// A freshly generated wallet.
pub struct Keypair {
    pub address: String,
    pub secret: Zeroizing<String>,
}

/// Generate a random Ed25519 keypair.
pub fn generate_keypair() -> Keypair {
    let mut seed = Zeroizing::new([0u8; 32]);
    rand::fill(&mut seed[..]);
    let signing_key = SigningKey::from_bytes(&seed);

    let address = address_of(&signing_key);
    let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());
    let secret = Zeroizing::new(bs58::encode(&keypair_bytes[..]).into_string());

    Keypair { address, secret }
}

/// Parse a base58 secret (64-byte keypair or 32-byte seed).
pub fn parse_secret(secret: &str) -> Result<SigningKey, WalletError> {
    let bytes = Zeroizing::new(
        bs58::decode(secret.trim())
            .into_vec()
            .map_err(|e| WalletError::Encoding(e.to_string()))?,
    );

    match bytes.len() {
        32 => {
            let mut seed = Zeroizing::new([0u8; 32]);
            seed.copy_from_slice(&bytes);
            Ok(SigningKey::from_bytes(&seed))
        }
        64 => {
            let mut keypair = Zeroizing::new([0u8; 64]);
            keypair.copy_from_slice(&bytes);
            SigningKey::from_keypair_bytes(&keypair)
                .map_err(|e| WalletError::Keypair(e.to_string()))
        }
        n => Err(WalletError::Length(n)),
    }
}

/// Base58 address of a signing key.
pub fn address_of(signing_key: &SigningKey) -> String {
    bs58::encode(signing_key.verifying_key().as_bytes()).into_string()
}

/// Sign the UTF-8 bytes of `message`, returning a base58 signature.
pub fn sign_message(secret: &str, message: &str) -> Result<String, WalletError> {
    let signing_key = parse_secret(secret)?;
    let signature = signing_key.sign(message.as_bytes());
    Ok(bs58::encode(signature.to_bytes()).into_string())
}
