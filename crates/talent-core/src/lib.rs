//! # talent-core
//!
//! Core crate for the Talent Intelligence client. Contains configuration
//! schemas, typed identifiers, query-string helpers, the key-value storage
//! trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Talent crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
