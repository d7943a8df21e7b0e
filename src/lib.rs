//! Identity profile service
//!
//! Validated user profile updates for an application's identity layer:
//! - Email uniqueness enforcement (case-insensitive)
//! - Password changes gated on verifying the current password
//! - Pluggable user storage (in-memory or PostgreSQL) and hash providers

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::api::state::AppState;
use crate::config::{StorageBackend, StorageConfig};
use crate::domain::{HashProvider, UserRepository};
use crate::infrastructure::hash::Argon2HashProvider;
use crate::infrastructure::migrations::run_user_migrations;
use crate::infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

/// Connect to PostgreSQL using the storage configuration
pub async fn connect_postgres(storage: &StorageConfig) -> anyhow::Result<PgPool> {
    let database_url = storage.database_url().ok_or_else(|| {
        anyhow::anyhow!("storage.database_url or DATABASE_URL is required for the postgres backend")
    })?;

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(storage.max_connections)
        .connect(&database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    info!("PostgreSQL connection established");

    Ok(pool)
}

/// Create the application state from configuration
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Storage backend: {:?}", config.storage.backend);

    let repository: Arc<dyn UserRepository> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryUserRepository::new()),
        StorageBackend::Postgres => {
            let pool = connect_postgres(&config.storage).await?;
            run_user_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            Arc::new(PostgresUserRepository::new(pool))
        }
    };

    let hasher: Arc<dyn HashProvider> = Arc::new(Argon2HashProvider::with_config(&config.hashing)?);

    Ok(AppState::new(repository, hasher))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_app_state_in_memory() {
        let state = create_app_state(&AppConfig::default()).await.unwrap();

        let err = state.user_service.get("missing").await.unwrap_err();
        assert_eq!(err.code(), domain::AppErrorCode::UserNotFound);
    }

    #[tokio::test]
    async fn test_postgres_backend_requires_url() {
        let storage = StorageConfig {
            backend: StorageBackend::Postgres,
            database_url: Some(String::new()),
            max_connections: 1,
        };

        assert!(connect_postgres(&storage).await.is_err());
    }
}
