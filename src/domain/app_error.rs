//! Application-level error surfaced by use cases
//!
//! Every failure of a use case is reported through [`AppError`]. Callers
//! distinguish failures by [`AppErrorCode`] (or by the HTTP-like status it
//! carries), not by error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DomainError;

/// Distinguishing code of an application error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppErrorCode {
    UserNotFound,
    EmailAlreadyInUse,
    OldPasswordRequired,
    OldPasswordMismatch,
    Internal,
}

impl AppErrorCode {
    /// HTTP-like status code for this error
    pub fn status(&self) -> u16 {
        match self {
            Self::UserNotFound => 404,
            Self::EmailAlreadyInUse => 409,
            Self::OldPasswordRequired | Self::OldPasswordMismatch => 400,
            Self::Internal => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserNotFound => "user_not_found",
            Self::EmailAlreadyInUse => "email_already_in_use",
            Self::OldPasswordRequired => "old_password_required",
            Self::OldPasswordMismatch => "old_password_mismatch",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for AppErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single error kind returned by use cases
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AppError {
    code: AppErrorCode,
    message: String,
}

impl AppError {
    pub fn new(code: AppErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn user_not_found() -> Self {
        Self::new(AppErrorCode::UserNotFound, "User not found")
    }

    pub fn email_already_in_use() -> Self {
        Self::new(AppErrorCode::EmailAlreadyInUse, "E-mail already in use")
    }

    pub fn old_password_required() -> Self {
        Self::new(
            AppErrorCode::OldPasswordRequired,
            "Old password is required to set a new password",
        )
    }

    pub fn old_password_mismatch() -> Self {
        Self::new(AppErrorCode::OldPasswordMismatch, "Old password does not match")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorCode::Internal, message)
    }

    pub fn code(&self) -> AppErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> u16 {
        self.code.status()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => Self::user_not_found(),
            DomainError::Conflict { .. } => Self::email_already_in_use(),
            other => Self::internal(other.to_string()),
        }
    }
}
