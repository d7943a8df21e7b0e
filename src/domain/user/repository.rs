//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// The repository is the source of truth for existence and email
/// uniqueness. Implementations must reject a `save` or `create` whose email
/// already belongs to another user, since callers check uniqueness before
/// writing without holding a lock.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Get a user by email (compared in normalized form)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist changes to an existing user
    async fn save(&self, user: &User) -> Result<User, DomainError>;
}
