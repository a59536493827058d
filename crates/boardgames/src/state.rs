//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds repository trait objects so handlers never see
//! which storage backend is active.

use std::sync::Arc;

use boardgames_core::inventory::demo_catalog;
use boardgames_core::storage::{BoardGameRepository, DeveloperRepository};

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. Both repositories usually point at the
/// same backend instance.
#[derive(Clone)]
pub struct AppState {
    pub board_game_repo: Arc<dyn BoardGameRepository>,
    pub developer_repo: Arc<dyn DeveloperRepository>,
}

impl AppState {
    /// Builds the state from a single backend implementing both traits.
    fn build<R>(repo: Arc<R>) -> Self
    where
        R: BoardGameRepository + DeveloperRepository + 'static,
    {
        Self {
            board_game_repo: repo.clone(),
            developer_repo: repo,
        }
    }

    /// Inserts the demo catalog when no developer exists yet.
    ///
    /// Returns the number of developers inserted.
    pub async fn seed_demo_data(&self) -> Result<usize, anyhow::Error> {
        if !self.developer_repo.list_developers().await?.is_empty() {
            tracing::info!("Storage already has developers, skipping demo data");
            return Ok(0);
        }

        let catalog = demo_catalog();
        for request in &catalog {
            self.developer_repo
                .insert_developer(&request.name, &request.board_games)
                .await?;
        }

        tracing::info!(developers = catalog.len(), "Seeded demo data");
        Ok(catalog.len())
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            tracing::info!(path = %config.sqlite_path, "Opened SQLite storage");

            Ok(Self::build(sqlite_repo))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for development without a database file.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage, data is lost on shutdown");

            Ok(Self::build(Arc::new(InMemoryRepository::new())))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
