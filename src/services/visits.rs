//! Visit management service: code allocation, gate validation, check-in/out

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::Row;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{ApprovalStatus, VisitStatus, VisitType},
        visit::{CreateVisit, UpdateVisit, ValidationResult, Visit, VisitCodePreview, VisitDetails},
        visitor::VisitorInfo,
    },
    repository::Repository,
};

/// Trailing sequence digits of a visit code. Tolerates legacy codes with
/// letters between the year and the sequence (e.g. `GC-2025-WI000123`).
static CODE_SEQUENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{6})$").unwrap());

/// Year-scoped prefix of a visit code
pub fn code_prefix(year: i32) -> String {
    format!("GC-{}-", year)
}

/// Format a visit code from its year and sequence number
pub fn format_visit_code(year: i32, sequence: i64) -> String {
    format!("GC-{}-{:06}", year, sequence)
}

/// Extract the numeric sequence from a visit code, if present
pub fn code_sequence(code: &str) -> Option<i64> {
    CODE_SEQUENCE
        .captures(code)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Advisory lock key serializing visit-code allocation for one year.
/// The high bits namespace the lock away from other advisory users.
fn allocation_lock_key(year: i32) -> i64 {
    const NAMESPACE: i64 = 0x4743_5041_0000_0000; // "GCPA"
    NAMESPACE | year as i64
}

#[derive(Clone)]
pub struct VisitsService {
    repository: Repository,
}

impl VisitsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all visits with visitor and executive details
    pub async fn list(&self) -> AppResult<Vec<VisitDetails>> {
        self.repository.visits.list_details().await
    }

    /// Create a visit: upsert the visitor by email, allocate the next visit
    /// code for the current year, and insert the visit row, all in one
    /// transaction. An advisory transaction lock keyed per year serializes
    /// allocation so concurrent creations cannot read the same maximum; the
    /// UNIQUE constraint on visit_code is the backstop.
    pub async fn create(&self, data: &CreateVisit) -> AppResult<VisitDetails> {
        Self::check_required(data)?;
        data.visitor.validate()?;

        let date = data
            .date
            .ok_or_else(|| AppError::Validation("Date is required".to_string()))?;
        let time_from = data
            .time_from
            .ok_or_else(|| AppError::Validation("Start time is required".to_string()))?;
        let time_to = data
            .time_to
            .ok_or_else(|| AppError::Validation("End time is required".to_string()))?;

        let year = Utc::now().year();
        let visit_type = data.visit_type.unwrap_or(VisitType::Scheduled);

        let mut tx = self.repository.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(allocation_lock_key(year))
            .execute(&mut *tx)
            .await?;

        let visitor_id = Self::upsert_visitor(&mut tx, &data.visitor).await?;

        let next_sequence: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(MAX(CAST(RIGHT(visit_code, 6) AS BIGINT)), 0) + 1
            FROM visits
            WHERE visit_code LIKE $1
            "#,
        )
        .bind(format!("{}%", code_prefix(year)))
        .fetch_one(&mut *tx)
        .await?;

        let visit_code = format_visit_code(year, next_sequence);

        let visit_id: Uuid = sqlx::query(
            r#"
            INSERT INTO visits (visit_code, visitor_id, executive_id, scheduled_date,
                                scheduled_time_from, scheduled_time_to, purpose_of_visit,
                                visit_type, visit_status, approval_status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'scheduled', 'pending')
            RETURNING id
            "#,
        )
        .bind(&visit_code)
        .bind(visitor_id)
        .bind(data.executive_id)
        .bind(date)
        .bind(time_from)
        .bind(time_to)
        .bind(&data.purpose)
        .bind(visit_type)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                AppError::Conflict(format!("Visit code {} already allocated", visit_code))
            }
            _ => AppError::from(e),
        })?
        .get("id");

        tx.commit().await?;

        tracing::info!("Created visit {} with code {}", visit_id, visit_code);

        self.repository.visits.get_details(visit_id).await
    }

    /// Preview the next visit code for the current year without reserving it
    pub async fn next_code(&self) -> AppResult<VisitCodePreview> {
        let year = Utc::now().year();
        let last = self
            .repository
            .visits
            .last_code_for_prefix(&code_prefix(year))
            .await?;
        let next_sequence = last
            .as_deref()
            .and_then(code_sequence)
            .unwrap_or(0)
            + 1;
        Ok(VisitCodePreview {
            code: format_visit_code(year, next_sequence),
        })
    }

    /// Partial update (approvals, status changes)
    pub async fn update(&self, id: Uuid, data: &UpdateVisit) -> AppResult<Visit> {
        if data.is_empty() {
            return Err(AppError::BadRequest("No valid fields to update".to_string()));
        }
        self.repository.visits.update(id, data).await
    }

    /// Validate a pass code at the gate. Unknown codes are a 404; known but
    /// expired or cancelled passes come back with `valid: false` and a reason.
    pub async fn validate(&self, code: &str) -> AppResult<ValidationResult> {
        let visit = self
            .repository
            .visits
            .find_details_by_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound("Visit not found".to_string()))?;

        let today = Utc::now().date_naive();

        if visit.scheduled_date < today {
            return Ok(ValidationResult {
                valid: false,
                error: Some("This pass has expired".to_string()),
                visit,
            });
        }

        if visit.visit_status == VisitStatus::Cancelled {
            return Ok(ValidationResult {
                valid: false,
                error: Some("This pass has been cancelled".to_string()),
                visit,
            });
        }

        if visit.approval_status == ApprovalStatus::Rejected {
            return Ok(ValidationResult {
                valid: false,
                error: Some("This visit request was rejected".to_string()),
                visit,
            });
        }

        Ok(ValidationResult {
            valid: true,
            error: None,
            visit,
        })
    }

    /// Check a visitor in
    pub async fn checkin(&self, id: Uuid) -> AppResult<Visit> {
        self.repository.visits.checkin(id).await
    }

    /// Check a visitor out
    pub async fn checkout(&self, id: Uuid) -> AppResult<Visit> {
        self.repository.visits.checkout(id).await
    }

    /// Delete a visit
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.visits.delete(id).await
    }

    fn check_required(data: &CreateVisit) -> AppResult<()> {
        if data.visitor.name.as_deref().map_or(true, |s| s.trim().is_empty()) {
            return Err(AppError::Validation("Visitor name is required".to_string()));
        }
        if data
            .visitor
            .email
            .as_deref()
            .map_or(true, |s| s.trim().is_empty())
        {
            return Err(AppError::Validation("Visitor email is required".to_string()));
        }
        if data.purpose.as_deref().map_or(true, |s| s.trim().is_empty()) {
            return Err(AppError::Validation(
                "Purpose of visit is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Insert the visitor or refresh an existing row matched by email
    async fn upsert_visitor(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        visitor: &VisitorInfo,
    ) -> AppResult<Uuid> {
        let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM visitors WHERE email = $1")
            .bind(&visitor.email)
            .fetch_optional(&mut **tx)
            .await?;

        let id = match existing {
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE visitors
                    SET full_name = $1, phone = $2, company = $3, updated_at = NOW()
                    WHERE id = $4
                    "#,
                )
                .bind(&visitor.name)
                .bind(&visitor.phone)
                .bind(&visitor.company)
                .bind(id)
                .execute(&mut **tx)
                .await?;
                id
            }
            None => {
                sqlx::query(
                    r#"
                    INSERT INTO visitors (full_name, email, phone, company)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&visitor.name)
                .bind(&visitor.email)
                .bind(&visitor.phone)
                .bind(&visitor.company)
                .fetch_one(&mut **tx)
                .await?
                .get("id")
            }
        };

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_zero_padded_to_six_digits() {
        assert_eq!(format_visit_code(2025, 1), "GC-2025-000001");
        assert_eq!(format_visit_code(2025, 123), "GC-2025-000123");
        assert_eq!(format_visit_code(2026, 999999), "GC-2026-999999");
    }

    #[test]
    fn sequential_codes_increase() {
        let codes: Vec<String> = (1..=5).map(|n| format_visit_code(2025, n)).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
        assert_eq!(codes[0], "GC-2025-000001");
        assert_eq!(codes[4], "GC-2025-000005");
    }

    #[test]
    fn sequence_parses_from_standard_codes() {
        assert_eq!(code_sequence("GC-2025-000123"), Some(123));
        assert_eq!(code_sequence("GC-2025-000001"), Some(1));
    }

    #[test]
    fn sequence_parses_from_legacy_codes_with_letters() {
        assert_eq!(code_sequence("GC-2025-WI000123"), Some(123));
    }

    #[test]
    fn sequence_missing_from_malformed_codes() {
        assert_eq!(code_sequence("GC-2025-"), None);
        assert_eq!(code_sequence("GC-2025-12"), None);
    }

    #[test]
    fn lock_keys_differ_per_year() {
        assert_ne!(allocation_lock_key(2024), allocation_lock_key(2025));
    }
}
