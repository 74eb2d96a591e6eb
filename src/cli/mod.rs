//! CLI module for the CMS API
//!
//! Subcommands:
//! - `serve`: run the HTTP server
//! - `migrate`: apply or revert the database schema
//! - `token`: sign a bearer token with the configured secret

pub mod migrate;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// CMS API - content records keyed by slug and language
#[derive(Parser)]
#[command(name = "cms-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Apply pending database migrations
    Migrate(migrate::MigrateArgs),

    /// Sign a bearer token for local testing and operators
    Token(token::TokenArgs),
}

/// Load `.env` and the layered config, then install logging
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
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["cms-api", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_migrate_revert() {
        let cli = Cli::try_parse_from(["cms-api", "migrate", "--revert"]).unwrap();
        assert!(matches!(cli.command, Command::Migrate(args) if args.revert));
    }

    #[test]
    fn test_parse_token() {
        let cli = Cli::try_parse_from([
            "cms-api",
            "token",
            "--id",
            "7",
            "--role",
            "admin",
            "--expires-in-hours",
            "2",
        ])
        .unwrap();

        match cli.command {
            Command::Token(args) => {
                assert_eq!(args.id, 7);
                assert_eq!(args.role, "admin");
                assert_eq!(args.expires_in_hours, Some(2));
            }
            _ => panic!("expected token command"),
        }
    }

    #[test]
    fn test_token_requires_id() {
        assert!(Cli::try_parse_from(["cms-api", "token", "--role", "admin"]).is_err());
    }
}
