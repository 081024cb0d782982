//! Resume upload, parsing and feedback commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use tracing::info;

use talent_auth::Route;
use talent_client::{FeedbackPoller, UploadFile};
use talent_core::AppError;
use talent_core::types::ResumeId;

use crate::context::Context;
use crate::output::{self, OutputFormat};

/// Arguments for resume commands
#[derive(Debug, Args)]
pub struct ResumeArgs {
    #[command(subcommand)]
    pub command: ResumeCommand,
}

/// Resume subcommands
#[derive(Debug, Subcommand)]
pub enum ResumeCommand {
    /// Upload a resume document (pdf, doc, docx, txt)
    Upload { path: PathBuf },
    /// Show the most recent upload
    Latest,
    /// Show the parsed skills, experience and education
    Parsed { id: ResumeId },
    /// Generate feedback on a resume
    Feedback {
        id: ResumeId,
        /// Queue a background task and poll it
        #[arg(long = "async")]
        background: bool,
    },
    /// Save the original document to disk
    Download {
        id: ResumeId,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Execute resume commands
pub async fn execute(args: &ResumeArgs, ctx: &Context) -> Result<(), AppError> {
    ctx.enter(Route::Resume).await?;

    match &args.command {
        ResumeCommand::Upload { path } => {
            let file = UploadFile::from_path(path).await?;
            let upload = ctx.client.upload_resume(file).await?;
            output::print_success(&format!(
                "Uploaded '{}' ({}); processing: {}",
                upload.original_filename, upload.id, upload.processing_status
            ));
        }
        ResumeCommand::Latest => {
            let upload = ctx.client.latest_resume().await?;
            output::print_item(&upload, ctx.format);
        }
        ResumeCommand::Parsed { id } => {
            let parsed = ctx.client.parsed_resume(*id).await?;
            match ctx.format {
                OutputFormat::Json => output::print_item(&parsed, ctx.format),
                OutputFormat::Table => {
                    output::print_kv("Score", &format!("{}/100", parsed.score(false)));
                    output::print_kv("Skills", &parsed.skills.join(", "));
                    output::print_kv("Experience", &parsed.experience.join("; "));
                    output::print_kv("Education", &parsed.education.join("; "));
                    output::print_kv("Parser", &parsed.parser_source);
                }
            }
        }
        ResumeCommand::Feedback { id, background } => {
            let feedback = if *background {
                let poller = FeedbackPoller::new(ctx.client.clone(), ctx.config.polling.clone());
                output::print_warning("Feedback queued; waiting for the task to finish...");
                poller.run(*id).await?
            } else {
                ctx.client.resume_feedback(*id).await?
            };
            output::print_item(&feedback, ctx.format);
        }
        ResumeCommand::Download { id, output: path } => {
            let bytes = ctx.client.download_resume(*id).await?;
            let path = path
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("resume-{}", id.short())));
            tokio::fs::write(&path, &bytes).await?;
            info!(path = %path.display(), size = bytes.len(), "Resume saved");
            output::print_success(&format!("Saved {} bytes to {}", bytes.len(), path.display()));
        }
    }

    Ok(())
}
