//! Property model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Property record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Property {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Property with schedule and personnel counts, as listed on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PropertyWithCounts {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub maintenance_count: i64,
    pub personnel_count: i64,
}

/// Create property request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProperty {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Update property request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProperty {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// Deleted-property acknowledgment
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedProperty {
    pub message: String,
    pub property: Property,
}
