//! Visit model and related request/response types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{ApprovalStatus, VisitStatus, VisitType};
use super::visitor::VisitorInfo;

/// Visit record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Visit {
    pub id: Uuid,
    /// Unique human-readable pass identifier, `GC-<year>-<6 digits>`
    pub visit_code: String,
    pub visitor_id: Uuid,
    pub executive_id: Option<Uuid>,
    pub scheduled_date: NaiveDate,
    #[schema(value_type = String)]
    pub scheduled_time_from: NaiveTime,
    #[schema(value_type = String)]
    pub scheduled_time_to: NaiveTime,
    pub purpose_of_visit: String,
    pub visit_type: VisitType,
    pub visit_status: VisitStatus,
    pub approval_status: ApprovalStatus,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub actual_checkin_time: Option<DateTime<Utc>>,
    pub actual_checkout_time: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Visit joined with visitor and executive details, as listed on the desk UI
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VisitDetails {
    pub id: Uuid,
    pub visit_code: String,
    pub visit_type: VisitType,
    pub scheduled_date: NaiveDate,
    #[schema(value_type = String)]
    pub scheduled_time_from: NaiveTime,
    #[schema(value_type = String)]
    pub scheduled_time_to: NaiveTime,
    pub purpose_of_visit: String,
    pub visit_status: VisitStatus,
    pub approval_status: ApprovalStatus,
    pub rejection_reason: Option<String>,
    pub actual_checkin_time: Option<DateTime<Utc>>,
    pub actual_checkout_time: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub executive_id: Option<Uuid>,
    pub visitor_name: String,
    pub visitor_email: String,
    pub visitor_phone: Option<String>,
    pub visitor_company: Option<String>,
    pub executive_name: Option<String>,
    pub executive_department: Option<String>,
}

/// Create visit request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVisit {
    pub visitor: VisitorInfo,
    pub executive_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    #[schema(value_type = String)]
    pub time_from: Option<NaiveTime>,
    #[schema(value_type = String)]
    pub time_to: Option<NaiveTime>,
    pub purpose: Option<String>,
    /// Defaults to `scheduled` when omitted
    pub visit_type: Option<VisitType>,
}

/// Partial visit update (approvals, status changes)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateVisit {
    pub approval: Option<ApprovalStatus>,
    pub approved_at: Option<DateTime<Utc>>,
    pub status: Option<VisitStatus>,
    pub rejection_reason: Option<String>,
}

impl UpdateVisit {
    pub fn is_empty(&self) -> bool {
        self.approval.is_none()
            && self.approved_at.is_none()
            && self.status.is_none()
            && self.rejection_reason.is_none()
    }
}

/// Gate validation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateVisit {
    pub code: Option<String>,
}

/// Gate validation verdict
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub visit: VisitDetails,
}

/// Next available visit code preview
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VisitCodePreview {
    pub code: String,
}
