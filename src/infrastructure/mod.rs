//! Infrastructure layer - External service implementations

pub mod hash;
pub mod logging;
pub mod migrations;
pub mod user;
