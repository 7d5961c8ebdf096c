//! Vault module: reading secrets from a Vault KV engine over HTTP.
//!
//! This module provides:
//! - `SecretEnvelope` and `SecretData` types (`envelope`)
//! - The blocking HTTP `SecretFetcher` (`client`)

pub mod client;
pub mod envelope;

// Re-export the most commonly used items.
pub use client::SecretFetcher;
pub use envelope::{SecretData, SecretEnvelope};
