//! Domain layer - Core business logic and entities

pub mod app_error;
pub mod error;
pub mod hash;
pub mod user;

pub use app_error::{AppError, AppErrorCode};
pub use error::DomainError;
pub use hash::HashProvider;
pub use user::{User, UserId, UserRepository};
