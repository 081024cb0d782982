//! Account settings commands.
//!
//! Each section prints its current values, or sends a PATCH when any field
//! flag is given.

use clap::{Args, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tabled::Tabled;

use talent_auth::Route;
use talent_core::AppError;
use talent_core::types::ResumeId;
use talent_entity::settings::{
    AccountSettingsPatch, AiFeedbackLevel, AiPreferencesPatch, NotificationSettingsPatch,
    PasswordChange, PreferredJobType, PrivacySettingsPatch, ResumeTone, ResumeVisibility,
    SecuritySettingsPatch,
};

use super::{confirm, input_error};
use crate::context::Context;
use crate::output;

/// Arguments for settings commands
#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

/// Settings subcommands
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Profile and job preferences
    Account {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        picture_url: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        years: Option<u32>,
        /// remote, hybrid or onsite
        #[arg(long, value_parser = wire_enum::<PreferredJobType>)]
        job_type: Option<PreferredJobType>,
        #[arg(long)]
        salary_min: Option<f64>,
        #[arg(long)]
        salary_max: Option<f64>,
    },
    /// Two-factor status and session count
    Security {
        #[arg(long)]
        two_factor: Option<bool>,
    },
    /// Generation preferences
    Ai {
        /// professional, creative or technical
        #[arg(long, value_parser = wire_enum::<ResumeTone>)]
        tone: Option<ResumeTone>,
        #[arg(long)]
        auto_cover_letter: Option<bool>,
        /// basic, detailed or advanced
        #[arg(long, value_parser = wire_enum::<AiFeedbackLevel>)]
        feedback_level: Option<AiFeedbackLevel>,
        /// Comma-separated skills to emphasise
        #[arg(long, value_delimiter = ',')]
        emphasis: Option<Vec<String>>,
    },
    /// Email notification switches
    Notifications {
        #[arg(long)]
        job_matches: Option<bool>,
        #[arg(long)]
        status_updates: Option<bool>,
        #[arg(long)]
        recruiter_messages: Option<bool>,
        #[arg(long)]
        weekly_digest: Option<bool>,
        #[arg(long)]
        marketing: Option<bool>,
    },
    /// Resume visibility and download rules
    Privacy {
        /// private, recruiters_only or public
        #[arg(long, value_parser = wire_enum::<ResumeVisibility>)]
        visibility: Option<ResumeVisibility>,
        #[arg(long)]
        allow_download: Option<bool>,
        #[arg(long)]
        default_resume: Option<ResumeId>,
        #[arg(long)]
        auto_embedding_refresh: Option<bool>,
    },
    /// Change the account password
    Password,
    /// List devices holding a session
    Sessions,
    /// Revoke every session, including this one
    LogoutAll {
        #[arg(long)]
        force: bool,
    },
    /// Permanently delete the account
    DeleteAccount {
        #[arg(long)]
        force: bool,
    },
}

/// Parse a snake_case wire value into one of the settings enums.
fn wire_enum<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.to_lowercase()))
        .map_err(|_| format!("unsupported value '{raw}'"))
}

#[derive(Debug, Serialize, Tabled)]
struct SessionRow {
    id: String,
    issued: String,
    expires: String,
    device: String,
    ip: String,
    current: String,
}

/// Execute settings commands
pub async fn execute(args: &SettingsArgs, ctx: &Context) -> Result<(), AppError> {
    ctx.enter(Route::Settings).await?;

    match &args.command {
        SettingsCommand::Account {
            full_name,
            phone,
            location,
            picture_url,
            title,
            years,
            job_type,
            salary_min,
            salary_max,
        } => {
            let patch = AccountSettingsPatch {
                full_name: full_name.clone(),
                phone_number: phone.clone(),
                location: location.clone(),
                profile_picture_url: picture_url.clone(),
                professional_title: title.clone(),
                years_of_experience: *years,
                preferred_job_type: *job_type,
                expected_salary_min: *salary_min,
                expected_salary_max: *salary_max,
            };
            let settings = if is_unchanged(&patch)? {
                ctx.client.account_settings().await?
            } else {
                ctx.client.update_account_settings(&patch).await?
            };
            output::print_item(&settings, ctx.format);
        }
        SettingsCommand::Security { two_factor } => {
            let settings = match two_factor {
                Some(enabled) => {
                    ctx.client
                        .update_security_settings(&SecuritySettingsPatch {
                            two_factor_enabled: *enabled,
                        })
                        .await?
                }
                None => ctx.client.security_settings().await?,
            };
            output::print_item(&settings, ctx.format);
        }
        SettingsCommand::Ai {
            tone,
            auto_cover_letter,
            feedback_level,
            emphasis,
        } => {
            let patch = AiPreferencesPatch {
                resume_tone: *tone,
                auto_cover_letter_generation: *auto_cover_letter,
                ai_feedback_level: *feedback_level,
                preferred_skill_emphasis: emphasis.clone(),
            };
            let prefs = if is_unchanged(&patch)? {
                ctx.client.ai_preferences().await?
            } else {
                ctx.client.update_ai_preferences(&patch).await?
            };
            output::print_item(&prefs, ctx.format);
        }
        SettingsCommand::Notifications {
            job_matches,
            status_updates,
            recruiter_messages,
            weekly_digest,
            marketing,
        } => {
            let patch = NotificationSettingsPatch {
                email_job_matches: *job_matches,
                application_status_updates: *status_updates,
                recruiter_messages: *recruiter_messages,
                weekly_job_digest: *weekly_digest,
                marketing_emails: *marketing,
            };
            let settings = if is_unchanged(&patch)? {
                ctx.client.notification_settings().await?
            } else {
                ctx.client.update_notification_settings(&patch).await?
            };
            output::print_item(&settings, ctx.format);
        }
        SettingsCommand::Privacy {
            visibility,
            allow_download,
            default_resume,
            auto_embedding_refresh,
        } => {
            let patch = PrivacySettingsPatch {
                resume_visibility: *visibility,
                allow_resume_download: *allow_download,
                default_resume_id: *default_resume,
                auto_embedding_refresh: *auto_embedding_refresh,
            };
            let settings = if is_unchanged(&patch)? {
                ctx.client.privacy_settings().await?
            } else {
                ctx.client.update_privacy_settings(&patch).await?
            };
            output::print_item(&settings, ctx.format);
        }
        SettingsCommand::Password => {
            let current_password = dialoguer::Password::new()
                .with_prompt("Current password")
                .interact()
                .map_err(input_error)?;
            let new_password = dialoguer::Password::new()
                .with_prompt("New password")
                .with_confirmation("Confirm new password", "Passwords do not match")
                .interact()
                .map_err(input_error)?;
            let response = ctx
                .client
                .change_password(&PasswordChange {
                    current_password,
                    new_password,
                })
                .await?;
            output::print_success(&response.message);
        }
        SettingsCommand::Sessions => {
            let sessions = ctx.client.list_active_sessions().await?;
            let rows: Vec<SessionRow> = sessions
                .iter()
                .map(|s| SessionRow {
                    id: output::truncate(&s.id, 12),
                    issued: s.issued_at.to_string(),
                    expires: s.expires_at.to_string(),
                    device: output::truncate(s.user_agent.as_deref().unwrap_or("-"), 40),
                    ip: s.ip_address.clone().unwrap_or_else(|| "-".to_string()),
                    current: if s.is_current { "yes" } else { "" }.to_string(),
                })
                .collect();
            output::print_list(&rows, ctx.format);
        }
        SettingsCommand::LogoutAll { force } => {
            if !confirm("Log out of every device?", *force)? {
                output::print_warning("Cancelled");
                return Ok(());
            }
            let response = ctx.client.logout_all_devices().await?;
            ctx.session.logout()?;
            output::print_success(&response.message);
        }
        SettingsCommand::DeleteAccount { force } => {
            if !confirm("Permanently delete this account?", *force)? {
                output::print_warning("Cancelled");
                return Ok(());
            }
            let response = ctx.client.delete_account().await?;
            ctx.session.logout()?;
            output::print_success(&response.message);
        }
    }

    Ok(())
}

/// Whether a patch carries no fields once absent values are skipped.
fn is_unchanged<T: Serialize>(patch: &T) -> Result<bool, AppError> {
    let value = serde_json::to_value(patch)?;
    Ok(value.as_object().is_none_or(|map| map.is_empty()))
}
