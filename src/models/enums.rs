//! Shared domain enums for the guest-pass workflow

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// VisitType
// ---------------------------------------------------------------------------

/// How a visit was initiated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VisitType {
    Scheduled,
    WalkIn,
}

impl VisitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::Scheduled => "scheduled",
            VisitType::WalkIn => "walk_in",
        }
    }
}

impl std::fmt::Display for VisitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VisitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(VisitType::Scheduled),
            "walk_in" => Ok(VisitType::WalkIn),
            _ => Err(format!("Invalid visit type: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// VisitStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a visit from booking to departure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Scheduled,
    /// Visitor is on the premises (checked in, not yet out)
    Ongoing,
    Completed,
    Cancelled,
}

impl VisitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Scheduled => "scheduled",
            VisitStatus::Ongoing => "ongoing",
            VisitStatus::Completed => "completed",
            VisitStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VisitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(VisitStatus::Scheduled),
            "ongoing" => Ok(VisitStatus::Ongoing),
            "completed" => Ok(VisitStatus::Completed),
            "cancelled" => Ok(VisitStatus::Cancelled),
            _ => Err(format!("Invalid visit status: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// ApprovalStatus
// ---------------------------------------------------------------------------

/// Executive approval state of a visit request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            _ => Err(format!("Invalid approval status: {}", s)),
        }
    }
}

// SQLx conversions: all three enums are stored as text columns

macro_rules! impl_text_enum_sqlx {
    ($ty:ty) => {
        impl sqlx::Type<Postgres> for $ty {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<Postgres>>::type_info()
            }
        }

        impl<'r> Decode<'r, Postgres> for $ty {
            fn decode(
                value: sqlx::postgres::PgValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let s: String = Decode::<Postgres>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl Encode<'_, Postgres> for $ty {
            fn encode_by_ref(
                &self,
                buf: &mut sqlx::postgres::PgArgumentBuffer,
            ) -> sqlx::encode::IsNull {
                let s: String = self.as_str().to_string();
                <String as Encode<Postgres>>::encode(s, buf)
            }
        }
    };
}

impl_text_enum_sqlx!(VisitType);
impl_text_enum_sqlx!(VisitStatus);
impl_text_enum_sqlx!(ApprovalStatus);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_status_round_trips_through_text() {
        for status in [
            VisitStatus::Scheduled,
            VisitStatus::Ongoing,
            VisitStatus::Completed,
            VisitStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<VisitStatus>().unwrap(), status);
        }
    }

    #[test]
    fn approval_status_rejects_unknown_values() {
        assert!("maybe".parse::<ApprovalStatus>().is_err());
    }

    #[test]
    fn visit_type_serde_uses_snake_case() {
        let json = serde_json::to_string(&VisitType::WalkIn).unwrap();
        assert_eq!(json, "\"walk_in\"");
    }
}
