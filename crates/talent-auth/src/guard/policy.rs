//! Guard decisions for a route given the session snapshot.

use talent_core::AppError;
use talent_core::result::AppResult;
use talent_entity::user::UserRole;

use crate::session::SessionSnapshot;

use super::route::{Access, Route};

/// Outcome of guarding a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Bootstrap has not finished; show nothing.
    Pending,
    /// Navigate elsewhere instead.
    Redirect(Route),
    /// Show the route.
    Render,
}

/// Decide what to do with a navigation to `route`.
///
/// Protected routes send anonymous users to [`Route::Login`]. Admin routes
/// additionally send non-admins to [`Route::Dashboard`]. The login screen
/// sends already-authenticated users to their dashboard.
pub fn guard(route: Route, session: &SessionSnapshot) -> GuardDecision {
    if session.loading {
        return GuardDecision::Pending;
    }

    match (route.access(), &session.user) {
        (Access::Public, Some(_)) if route == Route::Login => {
            GuardDecision::Redirect(Route::Dashboard)
        }
        (Access::Public, _) => GuardDecision::Render,
        (Access::Protected | Access::AdminOnly, None) => GuardDecision::Redirect(Route::Login),
        (Access::Protected, Some(_)) => GuardDecision::Render,
        (Access::AdminOnly, Some(user)) => match user.role {
            UserRole::Admin => GuardDecision::Render,
            UserRole::JobSeeker | UserRole::Recruiter => GuardDecision::Redirect(Route::Dashboard),
        },
    }
}

/// Like [`guard`], but as an error for callers that cannot navigate.
pub fn require(route: Route, session: &SessionSnapshot) -> AppResult<()> {
    match guard(route, session) {
        GuardDecision::Render => Ok(()),
        GuardDecision::Pending => Err(AppError::internal("Session is still loading")),
        GuardDecision::Redirect(Route::Login) => {
            Err(AppError::authentication("Please log in to continue"))
        }
        GuardDecision::Redirect(_) if route == Route::Login => {
            Err(AppError::validation("Already logged in"))
        }
        GuardDecision::Redirect(_) => Err(AppError::authorization(format!(
            "{route} requires an admin account"
        ))),
    }
}
