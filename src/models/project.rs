//! Project model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Project record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub status: String,
    /// Completion percentage, 0 to 100
    pub progress: i32,
    pub client: Option<String>,
    pub manager: Option<String>,
    /// Team headcount
    pub team: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create project request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProject {
    pub name: Option<String>,
    pub status: Option<String>,
    pub progress: Option<i32>,
    pub client: Option<String>,
    pub manager: Option<String>,
    pub team: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Update project request (progress and status only)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProject {
    pub progress: Option<i32>,
    pub status: Option<String>,
}
