//! User domain
//!
//! This module provides the user entity, email normalization, and the
//! repository trait consumed by the profile use cases.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::normalize_email;

#[cfg(test)]
pub use repository::MockUserRepository;
