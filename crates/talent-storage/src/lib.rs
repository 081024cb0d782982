//! # talent-storage
//!
//! Persistent client-side state. Two backends implement
//! [`KeyValueStore`](talent_core::traits::KeyValueStore): an in-memory map
//! for tests and ephemeral sessions, and a JSON file that survives restarts
//! the way browser local storage does. On top of them sits the
//! [`TokenStore`], the single owner of the bearer token pair.

pub mod file;
pub mod keys;
pub mod memory;
pub mod tokens;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use tokens::TokenStore;
