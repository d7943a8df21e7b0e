//! User infrastructure module
//!
//! Repository implementations (in-memory and PostgreSQL), the registration
//! service, and the update-profile use case.

mod postgres_repository;
mod repository;
mod service;
mod update_profile;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{RegisterUserRequest, UserService};
pub use update_profile::{UpdateProfileRequest, UpdateProfileService};
