//! Photo log and photo comment models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Photo log record (one upload batch from the field)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PhotoLog {
    pub id: i32,
    pub project: String,
    pub location: Option<String>,
    /// Number of photos in the batch
    pub photos: i32,
    pub uploaded_by: Option<String>,
    pub time: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Comment on a photo log
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PhotoComment {
    pub id: i32,
    pub photo_log_id: i32,
    pub user_name: Option<String>,
    pub text: String,
    pub time: Option<DateTime<Utc>>,
}

/// Create photo log request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePhotoLog {
    pub project: Option<String>,
    pub location: Option<String>,
    pub photos: Option<i32>,
    pub uploaded_by: Option<String>,
    pub time: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
}

/// Create photo comment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePhotoComment {
    pub photo_log_id: Option<i32>,
    pub user_name: Option<String>,
    pub text: Option<String>,
}
