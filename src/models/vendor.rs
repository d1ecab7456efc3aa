//! Vendor model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Vendor record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Vendor {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    /// Average rating, 0.0 to 5.0
    pub rating: Option<f64>,
    pub active_contracts: i32,
    pub last_payment: Option<NaiveDate>,
    /// Performance score, 0 to 100
    pub performance: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create vendor request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVendor {
    pub name: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub active_contracts: Option<i32>,
    pub last_payment: Option<NaiveDate>,
    pub performance: Option<i32>,
}

/// Update vendor request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVendor {
    pub name: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub active_contracts: Option<i32>,
    pub last_payment: Option<NaiveDate>,
    pub performance: Option<i32>,
}
