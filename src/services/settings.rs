//! System settings service

use crate::{
    error::AppResult,
    models::setting::{SystemSetting, UpdateSetting},
    repository::Repository,
};

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<SystemSetting>> {
        self.repository.settings.list().await
    }

    pub async fn update(&self, key: &str, data: &UpdateSetting) -> AppResult<SystemSetting> {
        self.repository.settings.update_by_key(key, data).await
    }
}
