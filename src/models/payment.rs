//! Payment model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Payment record (payable or receivable)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Payment {
    pub id: i32,
    pub vendor: String,
    #[schema(value_type = String)]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub payment_type: String,
    pub due: Option<NaiveDate>,
    pub status: String,
    pub project: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create payment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePayment {
    pub vendor: Option<String>,
    #[schema(value_type = String)]
    pub amount: Option<Decimal>,
    #[serde(rename = "type")]
    pub payment_type: Option<String>,
    pub due: Option<NaiveDate>,
    pub status: Option<String>,
    pub project: Option<String>,
}

/// Update payment request (status transitions only)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePayment {
    pub status: Option<String>,
}
