//! Core traits defined in `talent-core` and implemented by other crates.

pub mod storage;

pub use storage::KeyValueStore;
