//! Client access model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Client portal access record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClientAccess {
    pub id: i32,
    pub client: String,
    pub project: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub reports_viewed: i32,
    pub comments: i32,
    pub notifications_enabled: bool,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create client access request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClientAccess {
    pub client: Option<String>,
    pub project: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub reports_viewed: Option<i32>,
    pub comments: Option<i32>,
    pub notifications_enabled: Option<bool>,
    pub status: Option<String>,
}

/// Update client access request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClientAccess {
    pub client: Option<String>,
    pub project: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub reports_viewed: Option<i32>,
    pub comments: Option<i32>,
    pub notifications_enabled: Option<bool>,
    pub status: Option<String>,
}
