//! Maintenance schedule model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Maintenance schedule record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceSchedule {
    pub id: i32,
    pub property_id: i32,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub schedule_type: String,
    pub vendor_id: Option<i32>,
    /// Denormalized vendor name; `Not assigned` when no vendor is linked
    pub vendor_name: String,
    pub status: String,
    #[schema(value_type = String)]
    pub requested_time: NaiveTime,
    #[schema(value_type = String)]
    pub start_time: Option<NaiveTime>,
    #[schema(value_type = String)]
    pub end_time: Option<NaiveTime>,
    pub description: Option<String>,
    pub priority: String,
    /// Per-role acknowledgment map, stored as JSON
    pub acknowledgments: serde_json::Value,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create maintenance schedule request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMaintenanceSchedule {
    pub property_id: Option<i32>,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub schedule_type: Option<String>,
    pub vendor_id: Option<i32>,
    pub vendor_name: Option<String>,
    pub status: Option<String>,
    #[schema(value_type = String)]
    pub requested_time: Option<NaiveTime>,
    #[schema(value_type = String)]
    pub start_time: Option<NaiveTime>,
    #[schema(value_type = String)]
    pub end_time: Option<NaiveTime>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub acknowledgments: Option<serde_json::Value>,
}

/// Update maintenance schedule request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMaintenanceSchedule {
    pub property_id: Option<i32>,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub schedule_type: Option<String>,
    pub vendor_id: Option<i32>,
    pub vendor_name: Option<String>,
    pub status: Option<String>,
    #[schema(value_type = String)]
    pub requested_time: Option<NaiveTime>,
    #[schema(value_type = String)]
    pub start_time: Option<NaiveTime>,
    #[schema(value_type = String)]
    pub end_time: Option<NaiveTime>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub acknowledgments: Option<serde_json::Value>,
}
