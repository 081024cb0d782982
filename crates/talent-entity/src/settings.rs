//! Account settings surface: each section is a GET/PATCH pair.
//!
//! Response types mirror the server; `*Patch` types carry only the fields the
//! caller wants to change.

use serde::{Deserialize, Serialize};

use talent_core::AppError;
use talent_core::types::{ResumeId, Timestamp};

/// Preferred working arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredJobType {
    Remote,
    Hybrid,
    Onsite,
}

/// Tone used when generating resume text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeTone {
    Professional,
    Creative,
    Technical,
}

/// Depth of generated resume feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiFeedbackLevel {
    Basic,
    Detailed,
    Advanced,
}

/// Who may see the user's resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeVisibility {
    Private,
    RecruitersOnly,
    Public,
}

/// Profile and job-preference fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSettings {
    pub full_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub professional_title: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub preferred_job_type: Option<PreferredJobType>,
    #[serde(default)]
    pub expected_salary_min: Option<f64>,
    #[serde(default)]
    pub expected_salary_max: Option<f64>,
}

/// Partial update of [`AccountSettings`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_job_type: Option<PreferredJobType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_salary_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_salary_max: Option<f64>,
}

impl AccountSettingsPatch {
    /// Reject a salary range the server would refuse anyway.
    pub fn validate(&self) -> Result<(), AppError> {
        if let (Some(min), Some(max)) = (self.expected_salary_min, self.expected_salary_max) {
            if max < min {
                return Err(AppError::validation(
                    "expected_salary_max must be greater than or equal to expected_salary_min",
                ));
            }
        }
        Ok(())
    }
}

/// Security overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub active_sessions: u32,
    #[serde(default)]
    pub password_changed_at: Option<Timestamp>,
}

/// Body of `PATCH /settings/security`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySettingsPatch {
    pub two_factor_enabled: bool,
}

/// Body of `PATCH /settings/security/change-password`.
#[derive(Clone, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

impl std::fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChange").finish_non_exhaustive()
    }
}

/// A server-side login session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSession {
    pub id: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub is_current: bool,
}

/// AI generation preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiPreferences {
    pub resume_tone: ResumeTone,
    pub auto_cover_letter_generation: bool,
    pub ai_feedback_level: AiFeedbackLevel,
    pub preferred_skill_emphasis: Vec<String>,
}

/// Partial update of [`AiPreferences`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiPreferencesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_tone: Option<ResumeTone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_cover_letter_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_feedback_level: Option<AiFeedbackLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_skill_emphasis: Option<Vec<String>>,
}

/// Email notification switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_job_matches: bool,
    pub application_status_updates: bool,
    pub recruiter_messages: bool,
    pub weekly_job_digest: bool,
    pub marketing_emails: bool,
}

/// Partial update of [`NotificationSettings`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_job_matches: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_status_updates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruiter_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_job_digest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_emails: Option<bool>,
}

/// Resume privacy controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub resume_visibility: ResumeVisibility,
    pub allow_resume_download: bool,
    #[serde(default)]
    pub default_resume_id: Option<ResumeId>,
    pub auto_embedding_refresh: bool,
}

/// Partial update of [`PrivacySettings`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrivacySettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_visibility: Option<ResumeVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_resume_download: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_resume_id: Option<ResumeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_embedding_refresh: Option<bool>,
}
