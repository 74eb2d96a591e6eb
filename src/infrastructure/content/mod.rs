//! Content infrastructure implementations

mod in_memory;
mod postgres_repository;
mod service;

pub use in_memory::InMemoryContentRepository;
pub use postgres_repository::PostgresContentRepository;
pub use service::{ContentService, CreateContentCommand, UpdateContentCommand};
