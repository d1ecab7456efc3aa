//! Dashboard statistics snapshot model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Persisted snapshot of the dashboard aggregate counters.
///
/// One row per refresh; the API always returns the most recent snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DashboardStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_date: Option<NaiveDate>,
    pub pending_tasks: i32,
    pub today_meetings: i32,
    pub pending_payments: i32,
    pub active_vendors: i32,
    #[schema(value_type = String)]
    pub monthly_budget: Decimal,
    #[schema(value_type = String)]
    pub budget_used: Decimal,
    pub staff_present: i32,
    pub total_staff: i32,
    pub active_projects: i32,
    /// Satisfaction score, 0 to 100
    pub client_satisfaction: i32,
    pub daily_photo_uploads: i32,
    pub shifts_today: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl DashboardStats {
    /// All-zero snapshot returned when no refresh has run yet
    pub fn empty() -> Self {
        Self {
            id: None,
            stats_date: None,
            pending_tasks: 0,
            today_meetings: 0,
            pending_payments: 0,
            active_vendors: 0,
            monthly_budget: Decimal::ZERO,
            budget_used: Decimal::ZERO,
            staff_present: 0,
            total_staff: 0,
            active_projects: 0,
            client_satisfaction: 0,
            daily_photo_uploads: 0,
            shifts_today: 0,
            created_at: None,
        }
    }
}

/// Live visitor counters shown on the guest-pass dashboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuestPassStats {
    /// Visits scheduled for today
    pub today_visits: i64,
    /// Visitors currently on the premises
    pub ongoing_visits: i64,
    pub total_visitors: i64,
}
