//! Role-specific overview.

use talent_auth::{Dashboard, Route, dashboard_for};
use talent_client::api::analytics::DEFAULT_TOP_SKILLS;
use talent_core::AppError;
use talent_core::error::ErrorKind;
use talent_entity::application::{ApplicationQuery, ApplicationStatus};
use talent_entity::job::JobQuery;
use talent_entity::user::UserQuery;

use crate::context::Context;
use crate::output;

/// Show the dashboard matching the logged-in user's role
pub async fn execute(ctx: &Context) -> Result<(), AppError> {
    let user = ctx.enter(Route::Dashboard).await?;
    println!("Welcome back, {} ({})", user.name, user.role.label());
    println!();

    match dashboard_for(user.role) {
        Dashboard::JobSeeker => {
            match ctx.client.latest_resume().await {
                Ok(resume) => {
                    output::print_kv("Latest resume", &resume.original_filename);
                    output::print_kv("Processing", &resume.processing_status);
                }
                Err(e) if e.kind == ErrorKind::NotFound => {
                    output::print_kv("Latest resume", "none uploaded");
                }
                Err(e) => return Err(e),
            }

            let applications = ctx
                .client
                .list_applications(&ApplicationQuery {
                    user_id: Some(user.id),
                    ..ApplicationQuery::default()
                })
                .await?;
            let interviews = applications
                .iter()
                .filter(|a| a.status == ApplicationStatus::Interview)
                .count();
            output::print_kv("Applications", &applications.len().to_string());
            output::print_kv("Interviews", &interviews.to_string());
        }
        Dashboard::Recruiter => {
            let jobs = ctx
                .client
                .list_jobs(&JobQuery {
                    size: Some(1),
                    ..JobQuery::default()
                })
                .await?;
            let applicants = ctx
                .client
                .list_applications(&ApplicationQuery::default())
                .await?;
            output::print_kv("Posted jobs", &jobs.total.to_string());
            output::print_kv("Applicants", &applicants.len().to_string());
        }
        Dashboard::Admin => {
            let users = ctx
                .client
                .list_users(&UserQuery {
                    size: Some(1),
                    ..UserQuery::default()
                })
                .await?;
            let analytics = ctx.client.analytics(DEFAULT_TOP_SKILLS).await?;
            output::print_kv("Users", &users.total.to_string());
            output::print_kv(
                "Jobs with applications",
                &analytics.applications_per_job.len().to_string(),
            );
            if let Some(top) = analytics.popular_skills.first() {
                output::print_kv("Top skill", &format!("{} ({})", top.skill, top.count));
            }
        }
    }

    Ok(())
}
