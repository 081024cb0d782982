//! Application commands for job seekers and recruiters.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use talent_auth::Route;
use talent_core::AppError;
use talent_core::types::{ApplicationId, CoverLetterId, JobId, ResumeId};
use talent_entity::application::{Application, ApplicationCreate, ApplicationQuery, ApplicationStatus};
use talent_entity::user::UserRole;

use crate::context::Context;
use crate::output;

/// Arguments for application commands
#[derive(Debug, Args)]
pub struct ApplicationsArgs {
    #[command(subcommand)]
    pub command: ApplicationsCommand,
}

/// Application subcommands
#[derive(Debug, Subcommand)]
pub enum ApplicationsCommand {
    /// List applications (own for job seekers, applicants for recruiters)
    List {
        #[arg(long)]
        status: Option<ApplicationStatus>,
        #[arg(long)]
        job: Option<JobId>,
    },
    /// Apply to a job
    Create {
        job_id: JobId,
        #[arg(long)]
        resume: Option<ResumeId>,
        #[arg(long)]
        cover_letter: Option<CoverLetterId>,
    },
    /// Move an applicant to another stage
    Status {
        id: ApplicationId,
        /// applied, interview or rejected
        status: ApplicationStatus,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct ApplicationRow {
    id: String,
    job: String,
    applicant: String,
    status: String,
    applied: String,
}

impl From<&Application> for ApplicationRow {
    fn from(app: &Application) -> Self {
        Self {
            id: app.id.to_string(),
            job: app
                .job_title
                .clone()
                .unwrap_or_else(|| app.job_id.short()),
            applicant: app
                .applicant_name
                .clone()
                .or_else(|| app.applicant_username.clone())
                .unwrap_or_else(|| app.user_id.short()),
            status: app.status.to_string(),
            applied: app.created_at.to_string(),
        }
    }
}

/// Execute application commands
pub async fn execute(args: &ApplicationsArgs, ctx: &Context) -> Result<(), AppError> {
    match &args.command {
        ApplicationsCommand::List { status, job } => {
            let user = ctx.enter(Route::Applications).await?;
            let user_id = (user.role == UserRole::JobSeeker).then_some(user.id);
            let applications = ctx
                .client
                .list_applications(&ApplicationQuery {
                    status: *status,
                    job_id: *job,
                    user_id,
                })
                .await?;
            let rows: Vec<ApplicationRow> =
                applications.iter().map(ApplicationRow::from).collect();
            output::print_list(&rows, ctx.format);
        }
        ApplicationsCommand::Create {
            job_id,
            resume,
            cover_letter,
        } => {
            let user = ctx.enter(Route::Applications).await?;
            let application = ctx
                .client
                .create_application(&ApplicationCreate {
                    job_id: *job_id,
                    user_id: user.id,
                    resume_id: *resume,
                    cover_letter_id: *cover_letter,
                    status: None,
                })
                .await?;
            output::print_success(&format!(
                "Applied; application {} is '{}'",
                application.id, application.status
            ));
        }
        ApplicationsCommand::Status { id, status } => {
            ctx.enter(Route::Applicants).await?;
            let application = ctx.client.update_application_status(*id, *status).await?;
            output::print_success(&format!(
                "Application {} moved to '{}'",
                application.id, application.status
            ));
        }
    }

    Ok(())
}
