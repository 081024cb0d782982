//! Account settings sections.

use talent_core::result::AppResult;
use talent_core::types::ItemList;
use talent_entity::MessageResponse;
use talent_entity::settings::{
    AccountSettings, AccountSettingsPatch, ActiveSession, AiPreferences, AiPreferencesPatch,
    NotificationSettings, NotificationSettingsPatch, PasswordChange, PrivacySettings,
    PrivacySettingsPatch, SecuritySettings, SecuritySettingsPatch,
};

use crate::client::ApiClient;

const REFRESH_TOKEN_HEADER: &str = "X-Refresh-Token";

impl ApiClient {
    pub async fn account_settings(&self) -> AppResult<AccountSettings> {
        self.get("/settings/account").await
    }

    /// Patch profile fields. The salary range is checked locally first.
    pub async fn update_account_settings(
        &self,
        patch: &AccountSettingsPatch,
    ) -> AppResult<AccountSettings> {
        patch.validate()?;
        self.patch("/settings/account", patch).await
    }

    pub async fn security_settings(&self) -> AppResult<SecuritySettings> {
        self.get("/settings/security").await
    }

    pub async fn update_security_settings(
        &self,
        patch: &SecuritySettingsPatch,
    ) -> AppResult<SecuritySettings> {
        self.patch("/settings/security", patch).await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> AppResult<MessageResponse> {
        self.patch("/settings/security/change-password", change)
            .await
    }

    /// Server-side sessions. The stored refresh token, when known, lets the
    /// server flag the current one.
    pub async fn list_active_sessions(&self) -> AppResult<Vec<ActiveSession>> {
        let header = self
            .tokens()
            .refresh_token()?
            .map(|token| (REFRESH_TOKEN_HEADER, token));
        let list: ItemList<ActiveSession> = self
            .get_with_header("/settings/security/sessions", header)
            .await?;
        Ok(list.items)
    }

    /// Revoke every session, including this one.
    pub async fn logout_all_devices(&self) -> AppResult<MessageResponse> {
        self.post_empty("/settings/security/logout-all").await
    }

    pub async fn ai_preferences(&self) -> AppResult<AiPreferences> {
        self.get("/settings/ai-preferences").await
    }

    pub async fn update_ai_preferences(
        &self,
        patch: &AiPreferencesPatch,
    ) -> AppResult<AiPreferences> {
        self.patch("/settings/ai-preferences", patch).await
    }

    pub async fn notification_settings(&self) -> AppResult<NotificationSettings> {
        self.get("/settings/notifications").await
    }

    pub async fn update_notification_settings(
        &self,
        patch: &NotificationSettingsPatch,
    ) -> AppResult<NotificationSettings> {
        self.patch("/settings/notifications", patch).await
    }

    pub async fn privacy_settings(&self) -> AppResult<PrivacySettings> {
        self.get("/settings/privacy").await
    }

    pub async fn update_privacy_settings(
        &self,
        patch: &PrivacySettingsPatch,
    ) -> AppResult<PrivacySettings> {
        self.patch("/settings/privacy", patch).await
    }

    /// Permanently delete the caller's account.
    pub async fn delete_account(&self) -> AppResult<MessageResponse> {
        self.delete("/settings/account").await
    }
}
