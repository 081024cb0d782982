//! Core type definitions used across the Talent workspace.

pub mod id;
pub mod pagination;
pub mod query;
pub mod timestamp;

pub use id::*;
pub use pagination::{ItemList, Page};
pub use query::QueryString;
pub use timestamp::Timestamp;
