//! Admin audit log.

use talent_core::result::AppResult;
use talent_core::types::{Page, QueryString};
use talent_entity::audit::{AuditLogEntry, AuditQuery};

use crate::client::ApiClient;

impl ApiClient {
    pub async fn list_audit_logs(&self, query: &AuditQuery) -> AppResult<Page<AuditLogEntry>> {
        let qs = QueryString::new()
            .opt("page", query.page)
            .opt("size", query.size)
            .opt("user_id", query.user_id)
            .text("method", query.method.as_deref())
            .opt("status_code", query.status_code);
        self.get(&format!("/admin/audit-logs{}", qs.to_suffix()))
            .await
    }
}
