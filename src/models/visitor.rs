//! Visitor model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Visitor record, keyed by email across repeat visits
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Visitor {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Visitor details supplied with a visit request.
///
/// An existing visitor with the same email is updated in place;
/// otherwise a new row is created.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VisitorInfo {
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// Create visitor request (direct visitor management)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVisitor {
    pub full_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

/// Update visitor request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVisitor {
    pub full_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}
