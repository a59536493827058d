//! Functional core for the board game inventory.
//!
//! Domain types, request payloads, pure validation and parsing, and the
//! repository traits implemented by the storage backends in the server crate.

pub mod inventory;
pub mod serde;
pub mod storage;
