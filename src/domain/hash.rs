//! One-way secret hashing

use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::DomainError;

/// Trait for one-way hashing of secrets
///
/// For every plaintext `p`, `compare(p, &hash(p)?)` must be true.
/// Implementations are interchangeable as long as that holds.
#[cfg_attr(test, automock)]
pub trait HashProvider: Send + Sync + Debug {
    /// Produce a digest of the plaintext
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Check a plaintext candidate against a stored digest
    fn compare(&self, plaintext: &str, digest: &str) -> bool;
}
