//! Migrate command - installs the PostgreSQL schema

use anyhow::Context;
use tracing::info;

use crate::infrastructure::migrations;

pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let pool = crate::connect_postgres(&config.storage).await?;
    let applied = migrations::run_user_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let version = migrations::PostgresMigrator::new(pool)
        .current_version()
        .await
        .context("Failed to read schema version")?;

    info!(applied, version = ?version, "Migrations complete");
    Ok(())
}
