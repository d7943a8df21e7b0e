//! User service for registration and lookup

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::user::{normalize_email, User, UserId, UserRepository};
use crate::domain::{AppError, HashProvider};

/// Request for registering a new user
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User service for registration and lookup
#[derive(Debug)]
pub struct UserService<R: UserRepository + ?Sized, H: HashProvider + ?Sized> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository + ?Sized, H: HashProvider + ?Sized> UserService<R, H> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user with a freshly generated ID
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, AppError> {
        let email = normalize_email(&request.email);

        if self.repository.find_by_email(&email).await?.is_some() {
            warn!("Registration rejected: email already in use");
            return Err(AppError::email_already_in_use());
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(UserId::generate(), request.name, &email, password_hash);

        let user = self.repository.create(user).await?;

        info!(user_id = %user.id(), "User registered");
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get(&self, id: &str) -> Result<User, AppError> {
        self.repository
            .find_by_id(&UserId::new(id))
            .await?
            .ok_or_else(AppError::user_not_found)
    }
}
