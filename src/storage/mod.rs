//! In-memory state. Nothing here outlives the process.

pub mod nonce;

pub use nonce::NonceStore;
