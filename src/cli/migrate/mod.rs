//! Migrate command - applies or reverts the content schema

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::infrastructure::storage::{connect_pool, revert_latest, run_migrations};

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Revert the latest applied migration instead of applying pending ones
    #[arg(long)]
    pub revert: bool,
}

pub async fn run(args: MigrateArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let settings = crate::resolve_settings(&config).await?;

    let database = settings
        .database
        .as_ref()
        .context("Migrations need the postgres storage backend and database settings")?;

    let pool = connect_pool(database).await?;

    if args.revert {
        match revert_latest(&pool).await? {
            Some(version) => info!(version, "Reverted migration"),
            None => info!("No migrations to revert"),
        }
    } else {
        let applied = run_migrations(&pool).await?;
        info!(applied, "Migrations complete");
    }

    pool.close().await;
    Ok(())
}
