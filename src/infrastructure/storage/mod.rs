//! Storage infrastructure - PostgreSQL pool and schema migrations

pub mod migrations;
mod postgres;

pub use migrations::{content_migrations, revert_latest, run_migrations, Migration, PostgresMigrator};
pub use postgres::{connect_options, connect_pool};
