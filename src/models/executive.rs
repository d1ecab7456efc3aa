//! Executive model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Executive record (staff member who can approve visits)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Executive {
    pub id: Uuid,
    pub user_id: Uuid,
    pub position: Option<String>,
    /// Soft-delete flag; deactivated executives keep their visit history
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Executive joined with the backing user account, as shown on the login screen
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExecutiveDetails {
    pub id: Uuid,
    pub name: String,
    pub position: Option<String>,
    pub email: String,
    pub department: Option<String>,
}

/// Create executive request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateExecutive {
    pub user_id: Option<Uuid>,
    pub position: Option<String>,
}

/// Update executive request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateExecutive {
    pub position: Option<String>,
    pub is_active: Option<bool>,
}
