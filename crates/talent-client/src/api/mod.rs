//! One module per API area. Each adds typed methods to [`ApiClient`](crate::ApiClient).

pub mod analytics;
pub mod applications;
pub mod audit;
pub mod auth;
pub mod chat;
pub mod cover_letters;
pub mod files;
pub mod jobs;
pub mod resumes;
pub mod settings;
pub mod users;
