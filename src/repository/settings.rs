//! System settings repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::setting::{SystemSetting, UpdateSetting},
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: Pool<Postgres>,
}

impl SettingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all settings
    pub async fn list(&self) -> AppResult<Vec<SystemSetting>> {
        let rows = sqlx::query_as::<_, SystemSetting>("SELECT * FROM system_settings ORDER BY key")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Update a setting by key
    pub async fn update_by_key(&self, key: &str, data: &UpdateSetting) -> AppResult<SystemSetting> {
        sqlx::query_as::<_, SystemSetting>(
            r#"
            UPDATE system_settings
            SET value = COALESCE($1, value),
                description = COALESCE($2, description),
                updated_by = COALESCE($3, 'system'),
                updated_at = NOW()
            WHERE key = $4
            RETURNING *
            "#,
        )
        .bind(&data.value)
        .bind(&data.description)
        .bind(&data.updated_by)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Setting {} not found", key)))
    }
}
