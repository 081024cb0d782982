//! CLI command definitions and dispatch.

pub mod admin;
pub mod analytics;
pub mod applications;
pub mod auth;
pub mod chat;
pub mod cover_letter;
pub mod dashboard;
pub mod jobs;
pub mod resume;
pub mod settings;

use clap::{Parser, Subcommand};

use talent_core::AppError;
use talent_core::config::AppConfig;

use crate::context::Context;
use crate::output::OutputFormat;

/// Talent Intelligence: job board from the terminal
#[derive(Debug, Parser)]
#[command(name = "talent", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and <env>.toml
    #[arg(long, env = "TALENT_CONFIG_DIR", default_value = "config")]
    pub config_dir: String,

    /// Configuration overlay to apply
    #[arg(long, env = "TALENT_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in, sign up, log out
    Auth(auth::AuthArgs),
    /// Role-specific overview
    Dashboard,
    /// Job postings, search and matching
    Jobs(jobs::JobsArgs),
    /// Job applications
    Applications(applications::ApplicationsArgs),
    /// Resume upload, parsing and feedback
    Resume(resume::ResumeArgs),
    /// Cover letters
    CoverLetter(cover_letter::CoverLetterArgs),
    /// Applications per job and popular skills
    Analytics(analytics::AnalyticsArgs),
    /// User administration and audit log
    Admin(admin::AdminArgs),
    /// Recruiter/applicant chat
    Chat(chat::ChatArgs),
    /// Account settings
    Settings(settings::SettingsArgs),
}

impl Cli {
    /// Load configuration from the selected directory and overlay.
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load(&self.config_dir, &self.env)
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let ctx = Context::open(config, self.format)?;
        match &self.command {
            Commands::Auth(args) => auth::execute(args, &ctx).await,
            Commands::Dashboard => dashboard::execute(&ctx).await,
            Commands::Jobs(args) => jobs::execute(args, &ctx).await,
            Commands::Applications(args) => applications::execute(args, &ctx).await,
            Commands::Resume(args) => resume::execute(args, &ctx).await,
            Commands::CoverLetter(args) => cover_letter::execute(args, &ctx).await,
            Commands::Analytics(args) => analytics::execute(args, &ctx).await,
            Commands::Admin(args) => admin::execute(args, &ctx).await,
            Commands::Chat(args) => chat::execute(args, &ctx).await,
            Commands::Settings(args) => settings::execute(args, &ctx).await,
        }
    }
}

/// Map a dialoguer failure into the client error type.
pub(crate) fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {e}"))
}

/// Ask for confirmation unless `force` is set.
pub(crate) fn confirm(prompt: &str, force: bool) -> Result<bool, AppError> {
    if force {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(input_error)
}
