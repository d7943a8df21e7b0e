//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{normalize_email, User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Store {
    /// Users in insertion order
    users: Vec<User>,
    /// Index for user ID -> position in `users`
    id_index: HashMap<String, usize>,
    /// Index for normalized email -> position in `users`
    email_index: HashMap<String, usize>,
}

/// In-memory implementation of UserRepository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Result<Self, DomainError> {
        let mut store = Store::default();

        for user in users {
            insert(&mut store, user)?;
        }

        Ok(Self {
            store: Arc::new(RwLock::new(store)),
        })
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.store.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.users.is_empty()
    }
}

fn insert(store: &mut Store, user: User) -> Result<User, DomainError> {
    let id = user.id().as_str().to_string();
    let email = normalize_email(user.email());

    if store.id_index.contains_key(&id) {
        return Err(DomainError::conflict(format!(
            "User with ID '{}' already exists",
            id
        )));
    }

    if store.email_index.contains_key(&email) {
        return Err(DomainError::conflict(format!(
            "Email '{}' already exists",
            email
        )));
    }

    let position = store.users.len();
    store.id_index.insert(id, position);
    store.email_index.insert(email, position);
    store.users.push(user.clone());

    Ok(user)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;

        Ok(store
            .id_index
            .get(id.as_str())
            .and_then(|&position| store.users.get(position))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;

        Ok(store
            .email_index
            .get(&normalize_email(email))
            .and_then(|&position| store.users.get(position))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;
        insert(&mut store, user)
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;
        let id = user.id().as_str();

        let position = *store
            .id_index
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        let new_email = normalize_email(user.email());

        // Uniqueness is re-checked under the write lock
        if let Some(&owner) = store.email_index.get(&new_email) {
            if owner != position {
                return Err(DomainError::conflict(format!(
                    "Email '{}' already exists",
                    new_email
                )));
            }
        }

        let old_email = normalize_email(store.users[position].email());
        if old_email != new_email {
            store.email_index.remove(&old_email);
            store.email_index.insert(new_email, position);
        }

        store.users[position] = user.clone();

        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(name: &str, email: &str) -> User {
        User::new(UserId::generate(), name, email, "digest")
    }

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("John Doe", "johndoe@test.com");

        repo.create(user.clone()).await.unwrap();

        let retrieved = repo.find_by_id(user.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().name(), "John Doe");
    }

    #[tokio::test]
    async fn test_find_unknown_id() {
        let repo = InMemoryUserRepository::new();

        let retrieved = repo
            .find_by_id(&UserId::new("non-existing-user-id"))
            .await
            .unwrap();

        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_find_by_email_ignores_case() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("John Doe", "johndoe@test.com");

        repo.create(user.clone()).await.unwrap();

        let retrieved = repo.find_by_email("JohnDoe@TEST.com").await.unwrap();
        assert_eq!(retrieved.unwrap().id(), user.id());

        assert!(repo.find_by_email("other@test.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();

        repo.create(create_test_user("A", "same@test.com")).await.unwrap();

        let result = repo.create(create_test_user("B", "SAME@test.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_updates_email_index() {
        let repo = InMemoryUserRepository::new();
        let mut user = create_test_user("John Doe", "johndoe@test.com");

        repo.create(user.clone()).await.unwrap();

        user.set_email("johntre@test.com");
        repo.save(&user).await.unwrap();

        assert!(repo.find_by_email("johndoe@test.com").await.unwrap().is_none());
        let retrieved = repo.find_by_email("johntre@test.com").await.unwrap().unwrap();
        assert_eq!(retrieved.id(), user.id());
    }

    #[tokio::test]
    async fn test_save_rejects_email_of_another_user() {
        let repo = InMemoryUserRepository::new();
        let first = create_test_user("John Doe", "johndoe@test.com");
        let mut second = create_test_user("John Test", "johntest@test.com");

        repo.create(first).await.unwrap();
        repo.create(second.clone()).await.unwrap();

        second.set_email("johndoe@test.com");
        let result = repo.save(&second).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        let stored = repo.find_by_id(second.id()).await.unwrap().unwrap();
        assert_eq!(stored.email(), "johntest@test.com");
    }

    #[tokio::test]
    async fn test_save_unknown_user() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user("Ghost", "ghost@test.com");

        let result = repo.save(&user).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_with_users_preserves_order() {
        let users = vec![
            create_test_user("A", "a@test.com"),
            create_test_user("B", "b@test.com"),
        ];
        let first_id = users[0].id().clone();

        let repo = InMemoryUserRepository::with_users(users).unwrap();

        assert_eq!(repo.len().await, 2);
        assert!(!repo.is_empty().await);
        assert_eq!(repo.store.read().await.users[0].id(), &first_id);
    }
}
