//! Admin user management.

use talent_core::result::AppResult;
use talent_core::types::{Page, QueryString, UserId};
use talent_entity::user::{UserListItem, UserQuery, UserUpdate, UserUpdateResponse};

use crate::client::ApiClient;

impl ApiClient {
    /// Page through all users.
    pub async fn list_users(&self, query: &UserQuery) -> AppResult<Page<UserListItem>> {
        let qs = QueryString::new()
            .opt("page", query.page)
            .opt("size", query.size)
            .opt("role", query.role.map(|r| r.as_str()))
            .opt("is_active", query.is_active)
            .text("q", query.q.as_deref());
        self.get(&format!("/admin/users{}", qs.to_suffix())).await
    }

    /// Change a user's role or active flag.
    pub async fn update_user(
        &self,
        user_id: UserId,
        update: &UserUpdate,
    ) -> AppResult<UserUpdateResponse> {
        self.patch(&format!("/admin/users/{user_id}"), update).await
    }
}
