//! Personnel model (dashboard staff directory)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Personnel record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Personnel {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub location: Option<String>,
    pub shift: Option<String>,
    pub status: String,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create personnel request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePersonnel {
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub shift: Option<String>,
    pub status: Option<String>,
}

/// Update personnel request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePersonnel {
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub shift: Option<String>,
    pub status: Option<String>,
}
