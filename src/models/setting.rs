//! System settings model (guest-pass key/value configuration)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// System setting row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SystemSetting {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Update setting request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSetting {
    pub value: Option<String>,
    pub description: Option<String>,
    pub updated_by: Option<String>,
}
