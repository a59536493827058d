//! In-memory storage backend.
//!
//! Keeps every table in one struct behind a `tokio::sync::RwLock`. Writes are
//! staged on a copy of the tables and only swapped in when the whole
//! operation succeeds, so a failed write leaves nothing behind.
//!
//! # Example
//!
//! ```rust,ignore
//! use boardgames::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let id = repo.insert_developer("Klaus Teuber", &[]).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
