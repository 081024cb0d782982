//! Recruiter/admin analytics.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use talent_auth::Route;
use talent_client::api::analytics::DEFAULT_TOP_SKILLS;
use talent_core::AppError;

use crate::context::Context;
use crate::output::{self, OutputFormat};

/// Arguments for the analytics command
#[derive(Debug, Args)]
pub struct AnalyticsArgs {
    /// How many skills to rank
    #[arg(long, default_value_t = DEFAULT_TOP_SKILLS)]
    pub top_skills: u32,
}

#[derive(Debug, Serialize, Tabled)]
struct JobCountRow {
    job_id: String,
    title: String,
    applications: u64,
}

#[derive(Debug, Serialize, Tabled)]
struct SkillRow {
    skill: String,
    count: u64,
}

/// Execute the analytics command
pub async fn execute(args: &AnalyticsArgs, ctx: &Context) -> Result<(), AppError> {
    ctx.enter(Route::Analytics).await?;
    let analytics = ctx.client.analytics(args.top_skills).await?;

    if ctx.format == OutputFormat::Json {
        output::print_item(&analytics, ctx.format);
        return Ok(());
    }

    println!("Applications per job");
    let jobs: Vec<JobCountRow> = analytics
        .applications_per_job
        .iter()
        .map(|j| JobCountRow {
            job_id: j.job_id.short(),
            title: output::truncate(&j.title, 40),
            applications: j.application_count,
        })
        .collect();
    output::print_list(&jobs, ctx.format);

    println!();
    println!("Popular skills");
    let skills: Vec<SkillRow> = analytics
        .popular_skills
        .iter()
        .map(|s| SkillRow {
            skill: s.skill.clone(),
            count: s.count,
        })
        .collect();
    output::print_list(&skills, ctx.format);

    Ok(())
}
