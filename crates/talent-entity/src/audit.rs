//! Audit log models (admin only).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use talent_core::types::{AuditLogId, Timestamp, UserId};

/// One recorded API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: AuditLogId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub action: String,
    pub method: String,
    pub path: String,
    pub status_code: u16,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
    pub created_at: Timestamp,
}

/// Filters for `GET /admin/audit-logs`.
#[derive(Debug, Clone, Default)]
pub struct AuditQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub user_id: Option<UserId>,
    pub method: Option<String>,
    pub status_code: Option<u16>,
}
