//! Login, signup, logout and identity commands.

use clap::{Args, Subcommand};

use talent_core::AppError;
use talent_entity::user::{SignupRequest, SignupRole};

use super::input_error;
use crate::context::Context;
use crate::output;

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Log in with an email address or username
    Login {
        /// Email or username (will prompt if not provided)
        identifier: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(long)]
        password: Option<String>,
    },
    /// Create a job seeker or recruiter account
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        sex: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        email: String,
        /// job_seeker or recruiter
        #[arg(long, default_value = "job_seeker")]
        role: SignupRole,
        /// Password (will prompt if not provided)
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
}

/// Execute auth commands
pub async fn execute(args: &AuthArgs, ctx: &Context) -> Result<(), AppError> {
    match &args.command {
        AuthCommand::Login {
            identifier,
            password,
        } => {
            if let Some(user) = ctx.enter_login().await? {
                output::print_warning(&format!(
                    "Already logged in as '{}'. Run `talent auth logout` first.",
                    user.username
                ));
                return Ok(());
            }

            let identifier = match identifier {
                Some(i) => i.clone(),
                None => dialoguer::Input::<String>::new()
                    .with_prompt("Email or username")
                    .interact_text()
                    .map_err(input_error)?,
            };
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(input_error)?,
            };

            let user = ctx.session.login(&identifier, &password).await?;
            output::print_success(&format!(
                "Logged in as '{}' ({})",
                user.username,
                user.role.label()
            ));
        }
        AuthCommand::Signup {
            username,
            name,
            sex,
            age,
            email,
            role,
            password,
        } => {
            if let Some(user) = ctx.enter_login().await? {
                output::print_warning(&format!(
                    "Already logged in as '{}'. Run `talent auth logout` first.",
                    user.username
                ));
                return Ok(());
            }

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(input_error)?,
            };
            let request = SignupRequest {
                username: username.trim().to_string(),
                name: name.trim().to_string(),
                sex: sex.clone(),
                age: *age,
                email: email.trim().to_string(),
                password,
                role: *role,
            };

            let user = ctx.session.signup(&request).await?;
            output::print_success(&format!(
                "Account created; logged in as '{}' ({})",
                user.username,
                user.role.label()
            ));
        }
        AuthCommand::Logout => {
            ctx.session.logout()?;
            output::print_success("Logged out");
        }
        AuthCommand::Whoami => {
            let snapshot = ctx.resolve().await?;
            match snapshot.user {
                Some(user) => output::print_item(&user, ctx.format),
                None => output::print_warning("Not logged in"),
            }
        }
    }

    Ok(())
}
