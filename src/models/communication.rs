//! Communication model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Project communication thread entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Communication {
    pub id: i32,
    pub project: String,
    pub user_name: String,
    pub message: String,
    /// Unread message counter for the thread badge
    pub unread: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create communication request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommunication {
    pub project: Option<String>,
    pub user_name: Option<String>,
    pub message: Option<String>,
}

/// Update communication request (read-state only)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCommunication {
    pub unread: Option<i32>,
}
