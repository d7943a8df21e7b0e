//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::normalize_email;

/// Opaque user identifier
///
/// Any string can be used to look a user up; ids of new users are
/// generated from a v4 UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User identity record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, immutable after creation
    id: UserId,
    /// Display name
    name: String,
    /// Normalized email, unique across all users
    email: String,
    /// One-way password digest - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with an already hashed password
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: &str,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id,
            name: name.into(),
            email: normalize_email(email),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a user from persisted columns
    pub fn restore(
        id: UserId,
        name: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Update the display name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    /// Update the email, storing its normalized form
    pub fn set_email(&mut self, email: &str) {
        self.email = normalize_email(email);
        self.touch();
    }

    /// Replace the password digest
    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new(UserId::new("user-1"), "John Doe", "johndoe@test.com", "digest")
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = UserId::generate();
        let b = UserId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_user_id_accepts_any_string() {
        let id = UserId::new("non-existing-user-id");
        assert_eq!(id.to_string(), "non-existing-user-id");
    }

    #[test]
    fn test_user_creation_normalizes_email() {
        let user = User::new(UserId::generate(), "John", "  JohnDoe@Test.COM ", "digest");
        assert_eq!(user.email(), "johndoe@test.com");
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_mutators_touch_updated_at() {
        let mut user = create_test_user();
        let original_updated = user.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        user.set_name("John Trê");
        user.set_email("JohnTre@test.com");
        user.set_password_hash("new-digest");

        assert_eq!(user.name(), "John Trê");
        assert_eq!(user.email(), "johntre@test.com");
        assert_eq!(user.password_hash(), "new-digest");
        assert!(user.updated_at() > original_updated);
    }

    #[test]
    fn test_user_serialization_excludes_password() {
        let user = create_test_user();

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("digest"));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("johndoe@test.com"));
    }
}
