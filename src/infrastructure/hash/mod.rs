//! Hash provider implementations

mod argon2_hasher;
mod fake;

pub use argon2_hasher::Argon2HashProvider;
pub use fake::FakeHashProvider;
