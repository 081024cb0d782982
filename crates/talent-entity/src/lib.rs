//! # talent-entity
//!
//! Serde models for every resource exposed by the job-board API. Request
//! payloads skip absent optional fields so PATCH bodies only carry what the
//! caller changed.

pub mod analytics;
pub mod application;
pub mod audit;
pub mod chat;
pub mod cover_letter;
pub mod job;
pub mod resume;
pub mod settings;
pub mod user;

use serde::{Deserialize, Serialize};

/// Plain `{message}` acknowledgement returned by delete/logout style endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Server-provided confirmation text.
    pub message: String,
}
