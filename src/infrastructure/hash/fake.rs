//! Deterministic hash provider for tests and local development

use sha2::{Digest, Sha256};

use crate::domain::{DomainError, HashProvider};

const PREFIX: &str = "fake$";

/// Unsalted SHA-256 hash provider
///
/// Cheap and deterministic, so test assertions can compare digests
/// directly. Not suitable for production secrets.
#[derive(Debug, Clone, Default)]
pub struct FakeHashProvider;

impl FakeHashProvider {
    pub fn new() -> Self {
        Self
    }
}

impl HashProvider for FakeHashProvider {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        let digest = Sha256::digest(plaintext.as_bytes());
        Ok(format!("{}{}", PREFIX, hex::encode(digest)))
    }

    fn compare(&self, plaintext: &str, digest: &str) -> bool {
        match self.hash(plaintext) {
            Ok(expected) => expected == digest,
            Err(_) => false,
        }
    }
}
