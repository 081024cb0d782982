//! Client routes and their access levels.

use std::fmt;
use std::str::FromStr;

use talent_core::AppError;
use talent_entity::user::UserRole;

/// Who may reach a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone.
    Public,
    /// Any authenticated user.
    Protected,
    /// Authenticated admins only.
    AdminOnly,
}

/// Every navigable screen of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Jobs,
    Resume,
    CoverLetter,
    Applications,
    PostJob,
    Applicants,
    Analytics,
    Chat,
    Settings,
    Users,
    AuditLog,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Route; 13] = [
        Route::Login,
        Route::Dashboard,
        Route::Jobs,
        Route::Resume,
        Route::CoverLetter,
        Route::Applications,
        Route::PostJob,
        Route::Applicants,
        Route::Analytics,
        Route::Chat,
        Route::Settings,
        Route::Users,
        Route::AuditLog,
    ];

    pub fn access(&self) -> Access {
        match self {
            Self::Login => Access::Public,
            Self::Users | Self::AuditLog => Access::AdminOnly,
            Self::Dashboard
            | Self::Jobs
            | Self::Resume
            | Self::CoverLetter
            | Self::Applications
            | Self::PostJob
            | Self::Applicants
            | Self::Analytics
            | Self::Chat
            | Self::Settings => Access::Protected,
        }
    }

    /// URL path of the route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/auth",
            Self::Dashboard => "/dashboard",
            Self::Jobs => "/jobs",
            Self::Resume => "/resume",
            Self::CoverLetter => "/cover-letter",
            Self::Applications => "/applications",
            Self::PostJob => "/post-job",
            Self::Applicants => "/applicants",
            Self::Analytics => "/analytics",
            Self::Chat => "/chat",
            Self::Settings => "/settings",
            Self::Users => "/users",
            Self::AuditLog => "/audit-log",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = format!("/{}", s.trim_start_matches('/'));
        Self::ALL
            .into_iter()
            .find(|route| route.path() == wanted)
            .ok_or_else(|| AppError::not_found(format!("Unknown route: '{s}'")))
    }
}

/// Role-specific landing screen behind [`Route::Dashboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    JobSeeker,
    Recruiter,
    Admin,
}

/// Pick the dashboard for a role.
pub fn dashboard_for(role: UserRole) -> Dashboard {
    match role {
        UserRole::JobSeeker => Dashboard::JobSeeker,
        UserRole::Recruiter => Dashboard::Recruiter,
        UserRole::Admin => Dashboard::Admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_routes() {
        let admin: Vec<_> = Route::ALL
            .into_iter()
            .filter(|r| r.access() == Access::AdminOnly)
            .collect();
        assert_eq!(admin, vec![Route::Users, Route::AuditLog]);
    }

    #[test]
    fn test_parse_path() {
        assert_eq!("/audit-log".parse::<Route>().unwrap(), Route::AuditLog);
        assert_eq!("jobs".parse::<Route>().unwrap(), Route::Jobs);
        assert!("/nope".parse::<Route>().is_err());
    }

    #[test]
    fn test_dashboard_per_role() {
        assert_eq!(dashboard_for(UserRole::JobSeeker), Dashboard::JobSeeker);
        assert_eq!(dashboard_for(UserRole::Recruiter), Dashboard::Recruiter);
        assert_eq!(dashboard_for(UserRole::Admin), Dashboard::Admin);
    }
}
