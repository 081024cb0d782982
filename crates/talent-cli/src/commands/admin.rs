//! Admin commands: user management and the audit log.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use talent_auth::Route;
use talent_core::AppError;
use talent_core::types::UserId;
use talent_entity::audit::{AuditLogEntry, AuditQuery};
use talent_entity::user::{CurrentUser, UserQuery, UserRole, UserUpdate};

use crate::context::Context;
use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List users
    Users {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
        /// job_seeker, recruiter or admin
        #[arg(long)]
        role: Option<UserRole>,
        #[arg(long)]
        active: Option<bool>,
        /// Search name, username or email
        #[arg(short, long)]
        q: Option<String>,
    },
    /// Change a user's role or active flag
    UpdateUser {
        id: UserId,
        #[arg(long)]
        role: Option<UserRole>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Browse the audit log
    Audit {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        user: Option<UserId>,
        /// HTTP method
        #[arg(long)]
        method: Option<String>,
        #[arg(long)]
        status: Option<u16>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    username: String,
    name: String,
    email: String,
    role: String,
    status: String,
}

impl From<&CurrentUser> for UserRow {
    fn from(u: &CurrentUser) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role.to_string(),
            status: if u.is_active { "active" } else { "disabled" }.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct AuditRow {
    time: String,
    user: String,
    action: String,
    request: String,
    status: u16,
    ip: String,
}

impl From<&AuditLogEntry> for AuditRow {
    fn from(e: &AuditLogEntry) -> Self {
        Self {
            time: e.created_at.to_string(),
            user: e.user_id.map(|id| id.short()).unwrap_or_else(|| "-".to_string()),
            action: e.action.clone(),
            request: format!("{} {}", e.method, output::truncate(&e.path, 40)),
            status: e.status_code,
            ip: e.ip_address.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, ctx: &Context) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::Users {
            page,
            size,
            role,
            active,
            q,
        } => {
            ctx.enter(Route::Users).await?;
            let users = ctx
                .client
                .list_users(&UserQuery {
                    page: *page,
                    size: *size,
                    role: *role,
                    is_active: *active,
                    q: q.clone(),
                })
                .await?;
            let rows: Vec<UserRow> = users.items.iter().map(UserRow::from).collect();
            output::print_list(&rows, ctx.format);
            output::print_page_footer(users.page, users.total_pages(), users.total, ctx.format);
        }
        AdminCommand::UpdateUser { id, role, active } => {
            ctx.enter(Route::Users).await?;
            if role.is_none() && active.is_none() {
                return Err(AppError::validation("Nothing to update"));
            }
            let response = ctx
                .client
                .update_user(
                    *id,
                    &UserUpdate {
                        role: *role,
                        is_active: *active,
                    },
                )
                .await?;
            output::print_success(&response.message);
        }
        AdminCommand::Audit {
            page,
            size,
            user,
            method,
            status,
        } => {
            ctx.enter(Route::AuditLog).await?;
            let logs = ctx
                .client
                .list_audit_logs(&AuditQuery {
                    page: *page,
                    size: *size,
                    user_id: *user,
                    method: method.as_ref().map(|m| m.to_uppercase()),
                    status_code: *status,
                })
                .await?;
            let rows: Vec<AuditRow> = logs.items.iter().map(AuditRow::from).collect();
            output::print_list(&rows, ctx.format);
            output::print_page_footer(logs.page, logs.total_pages(), logs.total, ctx.format);
        }
    }

    Ok(())
}
