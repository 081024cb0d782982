//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles asserted by the server for an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Candidate browsing jobs and applying.
    JobSeeker,
    /// Posts jobs and reviews applicants.
    Recruiter,
    /// Platform administrator.
    Admin,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobSeeker => "job_seeker",
            Self::Recruiter => "recruiter",
            Self::Admin => "admin",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::JobSeeker => "Job Seeker",
            Self::Recruiter => "Recruiter",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = talent_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "job_seeker" => Ok(Self::JobSeeker),
            "recruiter" => Ok(Self::Recruiter),
            "admin" => Ok(Self::Admin),
            _ => Err(talent_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: job_seeker, recruiter, admin"
            ))),
        }
    }
}

/// Roles a user may pick for themselves at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupRole {
    /// Sign up as a candidate.
    JobSeeker,
    /// Sign up as a recruiter.
    Recruiter,
}

impl From<SignupRole> for UserRole {
    fn from(role: SignupRole) -> Self {
        match role {
            SignupRole::JobSeeker => Self::JobSeeker,
            SignupRole::Recruiter => Self::Recruiter,
        }
    }
}

impl FromStr for SignupRole {
    type Err = talent_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<UserRole>()? {
            UserRole::JobSeeker => Ok(Self::JobSeeker),
            UserRole::Recruiter => Ok(Self::Recruiter),
            UserRole::Admin => Err(talent_core::AppError::validation(
                "Admin accounts cannot be created through signup",
            )),
        }
    }
}
