//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `boardgames_core::storage`. The implementations are selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: process-local tables, lost on shutdown
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time. The in-memory backend is always compiled for tests.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p boardgames
//! ```
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p boardgames --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p boardgames --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;
