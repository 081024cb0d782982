//! Job listing, search, posting and matching commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use talent_auth::Route;
use talent_core::AppError;
use talent_core::types::{JobId, ResumeId};
use talent_entity::job::{Job, JobCreate, JobMatchRequest, JobQuery, JobUpdate};

use super::confirm;
use crate::context::Context;
use crate::output::{self, OutputFormat};

/// Arguments for job commands
#[derive(Debug, Args)]
pub struct JobsArgs {
    #[command(subcommand)]
    pub command: JobsCommand,
}

/// Listing filters shared by `list` and `public`
#[derive(Debug, Args)]
pub struct ListFilters {
    #[arg(long)]
    pub page: Option<u32>,
    #[arg(long)]
    pub size: Option<u32>,
    /// Only jobs requiring this skill
    #[arg(long)]
    pub skill: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Free-text filter
    #[arg(short, long)]
    pub q: Option<String>,
}

impl ListFilters {
    fn query(&self) -> JobQuery {
        JobQuery {
            page: self.page,
            size: self.size,
            skill: self.skill.clone(),
            location: self.location.clone(),
            q: self.q.clone(),
        }
    }
}

/// Job subcommands
#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// List jobs visible to the current user
    List(ListFilters),
    /// List publicly advertised jobs
    Public(ListFilters),
    /// Keyword or semantic search
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
        /// Rank by embedding similarity instead of keywords
        #[arg(long)]
        semantic: bool,
    },
    /// Post a new job
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Comma-separated skills
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        #[arg(long)]
        location: String,
    },
    /// Edit a posted job
    Update {
        id: JobId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_delimiter = ',')]
        skills: Option<Vec<String>>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Remove a posted job
    Delete {
        id: JobId,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// Rank jobs against a parsed resume
    Match {
        resume_id: ResumeId,
        #[arg(long)]
        top_k: Option<u32>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct JobRow {
    id: String,
    title: String,
    location: String,
    skills: String,
    recruiter: String,
    posted: String,
}

impl From<&Job> for JobRow {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.to_string(),
            title: output::truncate(&job.title, 40),
            location: job.location.clone(),
            skills: output::truncate(&job.skills.join(", "), 40),
            recruiter: job
                .recruiter_name
                .clone()
                .or_else(|| job.recruiter_username.clone())
                .unwrap_or_else(|| "-".to_string()),
            posted: job.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct SearchRow {
    id: String,
    title: String,
    location: String,
    skills: String,
}

#[derive(Debug, Serialize, Tabled)]
struct MatchRow {
    rank: u32,
    job_id: String,
    title: String,
    location: String,
    score: String,
}

fn print_jobs(page: &talent_core::types::Page<Job>, format: OutputFormat) {
    let rows: Vec<JobRow> = page.items.iter().map(JobRow::from).collect();
    output::print_list(&rows, format);
    output::print_page_footer(page.page, page.total_pages(), page.total, format);
}

/// Execute job commands
pub async fn execute(args: &JobsArgs, ctx: &Context) -> Result<(), AppError> {
    match &args.command {
        JobsCommand::List(filters) => {
            ctx.enter(Route::Jobs).await?;
            let page = ctx.client.list_jobs(&filters.query()).await?;
            print_jobs(&page, ctx.format);
        }
        JobsCommand::Public(filters) => {
            let page = ctx.client.list_public_jobs(&filters.query()).await?;
            print_jobs(&page, ctx.format);
        }
        JobsCommand::Search {
            query,
            page,
            size,
            semantic,
        } => {
            ctx.enter(Route::Jobs).await?;
            let results = ctx.client.search_jobs(query, *page, *size, *semantic).await?;
            let rows: Vec<SearchRow> = results
                .items
                .iter()
                .map(|item| SearchRow {
                    id: item.id.to_string(),
                    title: item.title.clone(),
                    location: item.location.clone(),
                    skills: output::truncate(&item.skills.join(", "), 40),
                })
                .collect();
            output::print_list(&rows, ctx.format);
            output::print_page_footer(
                results.page,
                results.total_pages(),
                results.total,
                ctx.format,
            );
        }
        JobsCommand::Create {
            title,
            description,
            skills,
            location,
        } => {
            ctx.enter(Route::PostJob).await?;
            let job = ctx
                .client
                .create_job(&JobCreate {
                    title: title.trim().to_string(),
                    description: description.trim().to_string(),
                    skills: clean_skills(skills),
                    location: location.trim().to_string(),
                })
                .await?;
            output::print_success(&format!("Job '{}' posted ({})", job.title, job.id));
        }
        JobsCommand::Update {
            id,
            title,
            description,
            skills,
            location,
        } => {
            ctx.enter(Route::PostJob).await?;
            let update = JobUpdate {
                title: title.clone(),
                description: description.clone(),
                skills: skills.as_deref().map(clean_skills),
                location: location.clone(),
            };
            if update.is_empty() {
                return Err(AppError::validation("Nothing to update"));
            }
            let job = ctx.client.update_job(*id, &update).await?;
            output::print_success(&format!("Job '{}' updated", job.title));
        }
        JobsCommand::Delete { id, force } => {
            ctx.enter(Route::PostJob).await?;
            if !confirm(&format!("Delete job {id}?"), *force)? {
                output::print_warning("Cancelled");
                return Ok(());
            }
            let response = ctx.client.delete_job(*id).await?;
            output::print_success(&response.message);
        }
        JobsCommand::Match { resume_id, top_k } => {
            ctx.enter(Route::Jobs).await?;
            let response = ctx
                .client
                .match_jobs(&JobMatchRequest {
                    resume_id: *resume_id,
                    top_k: *top_k,
                })
                .await?;
            let rows: Vec<MatchRow> = response
                .matches
                .iter()
                .map(|m| MatchRow {
                    rank: m.rank,
                    job_id: m.job_id.to_string(),
                    title: m.title.clone(),
                    location: m.location.clone(),
                    score: format!("{:.1}%", m.similarity_score * 100.0),
                })
                .collect();
            output::print_list(&rows, ctx.format);
        }
    }

    Ok(())
}

fn clean_skills(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
