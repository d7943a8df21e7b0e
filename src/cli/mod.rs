//! CLI module for the identity profile service
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `migrate`: install the PostgreSQL schema

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Identity profile service - validated user profile updates
#[derive(Parser)]
#[command(name = "identity-profile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Apply pending database migrations
    Migrate,
}

/// Load configuration and install logging, shared by all subcommands
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["identity-profile", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));

        let cli = Cli::try_parse_from(["identity-profile", "migrate"]).unwrap();
        assert!(matches!(cli.command, Command::Migrate));

        assert!(Cli::try_parse_from(["identity-profile"]).is_err());
    }
}
