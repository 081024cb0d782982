//! Cover letter commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use talent_auth::Route;
use talent_client::UploadFile;
use talent_core::AppError;
use talent_core::types::{CoverLetterId, ResumeId};
use talent_entity::cover_letter::CoverLetterGenerate;

use crate::context::Context;
use crate::output::{self, OutputFormat};

/// Arguments for cover letter commands
#[derive(Debug, Args)]
pub struct CoverLetterArgs {
    #[command(subcommand)]
    pub command: CoverLetterCommand,
}

/// Cover letter subcommands
#[derive(Debug, Subcommand)]
pub enum CoverLetterCommand {
    /// Generate a letter from a resume and a job description
    Generate {
        resume_id: ResumeId,
        #[arg(long)]
        job_description: String,
    },
    /// Upload an existing letter
    Upload {
        resume_id: ResumeId,
        path: PathBuf,
        #[arg(long)]
        job_description: Option<String>,
    },
    /// Print a letter
    Show { id: CoverLetterId },
    /// Save the letter document to disk
    Download {
        id: CoverLetterId,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Execute cover letter commands
pub async fn execute(args: &CoverLetterArgs, ctx: &Context) -> Result<(), AppError> {
    ctx.enter(Route::CoverLetter).await?;

    match &args.command {
        CoverLetterCommand::Generate {
            resume_id,
            job_description,
        } => {
            if job_description.trim().is_empty() {
                return Err(AppError::validation("Job description is required"));
            }
            let letter = ctx
                .client
                .generate_cover_letter(&CoverLetterGenerate {
                    resume_id: *resume_id,
                    job_description: job_description.clone(),
                })
                .await?;
            print_letter(&letter, ctx.format);
        }
        CoverLetterCommand::Upload {
            resume_id,
            path,
            job_description,
        } => {
            let file = UploadFile::from_path(path).await?;
            let letter = ctx
                .client
                .upload_cover_letter(*resume_id, job_description.as_deref(), file)
                .await?;
            output::print_success(&format!("Cover letter uploaded ({})", letter.id));
        }
        CoverLetterCommand::Show { id } => {
            let letter = ctx.client.cover_letter(*id).await?;
            print_letter(&letter, ctx.format);
        }
        CoverLetterCommand::Download { id, output: path } => {
            let bytes = ctx.client.download_cover_letter(*id).await?;
            let path = path
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("cover-letter-{}", id.short())));
            tokio::fs::write(&path, &bytes).await?;
            output::print_success(&format!("Saved {} bytes to {}", bytes.len(), path.display()));
        }
    }

    Ok(())
}

fn print_letter(letter: &talent_entity::cover_letter::CoverLetter, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_item(letter, format),
        OutputFormat::Table => {
            output::print_kv("Id", &letter.id.to_string());
            output::print_kv("Source", &letter.generator_source);
            println!();
            println!("{}", letter.generated_text);
        }
    }
}
