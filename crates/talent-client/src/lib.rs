//! # talent-client
//!
//! Typed request wrappers over the job-board REST API. Every call attaches
//! the stored bearer token when one is present, and every non-success
//! response is normalized into an [`AppError`](talent_core::AppError) whose
//! message is the server's `detail`/`message` text or a generic
//! `"<operation> failed (<status>)"` fallback.
//!
//! Three call shapes exist: JSON request/response, multipart upload, and
//! binary download. There is no automatic retry and no mid-request token
//! refresh; a 401 surfaces to the caller like any other failure.

pub mod api;
pub mod client;
pub mod error;
pub mod poller;
pub mod upload;

pub use client::ApiClient;
pub use poller::FeedbackPoller;
pub use upload::UploadFile;
