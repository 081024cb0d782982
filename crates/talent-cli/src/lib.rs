//! # talent-cli
//!
//! `clap` command tree for the job board. Every command resolves the stored
//! session first and is gated by the route guard of the screen it stands in
//! for.

pub mod commands;
pub mod context;
pub mod output;

pub use commands::Cli;
pub use context::Context;
pub use output::OutputFormat;
