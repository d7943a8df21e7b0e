//! Update-profile use case

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::user::{normalize_email, User, UserId, UserRepository};
use crate::domain::{AppError, HashProvider};

/// Request for updating a user's profile
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub old_password: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Applies validated name, email and password changes to a user
///
/// Validation runs in a fixed order and the first failure wins. Nothing is
/// written unless every check passes.
#[derive(Debug)]
pub struct UpdateProfileService<R: UserRepository + ?Sized, H: HashProvider + ?Sized> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository + ?Sized, H: HashProvider + ?Sized> UpdateProfileService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    pub async fn execute(&self, request: UpdateProfileRequest) -> Result<User, AppError> {
        let user_id = UserId::new(request.user_id);
        debug!(user_id = %user_id, "Updating profile");

        let mut user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Profile update for unknown user");
                AppError::user_not_found()
            })?;

        let email = normalize_email(&request.email);

        if let Some(owner) = self.repository.find_by_email(&email).await? {
            if owner.id() != user.id() {
                warn!(user_id = %user_id, "Profile update rejected: email belongs to another user");
                return Err(AppError::email_already_in_use());
            }
        }

        user.set_name(request.name);
        user.set_email(&email);

        if let Some(password) = request.password {
            let old_password = request.old_password.ok_or_else(|| {
                warn!(user_id = %user_id, "Password change without old password");
                AppError::old_password_required()
            })?;

            if !self.hasher.compare(&old_password, user.password_hash()) {
                warn!(user_id = %user_id, "Password change with wrong old password");
                return Err(AppError::old_password_mismatch());
            }

            user.set_password_hash(self.hasher.hash(&password)?);
        }

        // A conflict here means another update claimed the email after our check
        let saved = self.repository.save(&user).await?;

        info!(user_id = %user_id, "Profile updated");
        Ok(saved)
    }
}
