//! Visits repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::visit::{UpdateVisit, Visit, VisitDetails},
};

const DETAILS_SELECT: &str = r#"
    SELECT v.id,
           v.visit_code,
           v.visit_type,
           v.scheduled_date,
           v.scheduled_time_from,
           v.scheduled_time_to,
           v.purpose_of_visit,
           v.visit_status,
           v.approval_status,
           v.rejection_reason,
           v.actual_checkin_time,
           v.actual_checkout_time,
           v.created_at,
           v.executive_id,
           vis.full_name as visitor_name,
           vis.email as visitor_email,
           vis.phone as visitor_phone,
           vis.company as visitor_company,
           u.full_name as executive_name,
           u.department as executive_department
    FROM visits v
    LEFT JOIN visitors vis ON v.visitor_id = vis.id
    LEFT JOIN executives e ON v.executive_id = e.id
    LEFT JOIN users u ON e.user_id = u.id
"#;

#[derive(Clone)]
pub struct VisitsRepository {
    pool: Pool<Postgres>,
}

impl VisitsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all visits with visitor and executive details
    pub async fn list_details(&self) -> AppResult<Vec<VisitDetails>> {
        let query = format!(
            "{} ORDER BY v.scheduled_date DESC, v.scheduled_time_from DESC",
            DETAILS_SELECT
        );
        let rows = sqlx::query_as::<_, VisitDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get one visit with details by ID
    pub async fn get_details(&self, id: Uuid) -> AppResult<VisitDetails> {
        let query = format!("{} WHERE v.id = $1", DETAILS_SELECT);
        sqlx::query_as::<_, VisitDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Visit {} not found", id)))
    }

    /// Find a visit with details by its pass code (gate validation)
    pub async fn find_details_by_code(&self, code: &str) -> AppResult<Option<VisitDetails>> {
        let query = format!("{} WHERE v.visit_code = $1", DETAILS_SELECT);
        let row = sqlx::query_as::<_, VisitDetails>(&query)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Highest allocated visit code for a year prefix (for preview only;
    /// allocation reads under a transaction in the visits service)
    pub async fn last_code_for_prefix(&self, prefix: &str) -> AppResult<Option<String>> {
        let code: Option<String> = sqlx::query_scalar(
            "SELECT visit_code FROM visits WHERE visit_code LIKE $1 ORDER BY visit_code DESC LIMIT 1",
        )
        .bind(format!("{}%", prefix))
        .fetch_optional(&self.pool)
        .await?;
        Ok(code)
    }

    /// Partial update of approval and status fields
    pub async fn update(&self, id: Uuid, data: &UpdateVisit) -> AppResult<Visit> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.approval, "approval_status");
        add_field!(data.approved_at, "approved_at");
        add_field!(data.status, "visit_status");
        add_field!(data.rejection_reason, "rejection_reason");

        let query = format!(
            "UPDATE visits SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Visit>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.approval);
        bind_field!(data.approved_at);
        bind_field!(data.status);
        bind_field!(data.rejection_reason);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Visit {} not found", id)))
    }

    /// Mark the visitor as on premises
    pub async fn checkin(&self, id: Uuid) -> AppResult<Visit> {
        sqlx::query_as::<_, Visit>(
            r#"
            UPDATE visits
            SET visit_status = 'ongoing',
                actual_checkin_time = NOW(),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Visit {} not found", id)))
    }

    /// Mark the visit as completed
    pub async fn checkout(&self, id: Uuid) -> AppResult<Visit> {
        sqlx::query_as::<_, Visit>(
            r#"
            UPDATE visits
            SET visit_status = 'completed',
                actual_checkout_time = NOW(),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Visit {} not found", id)))
    }

    /// Delete a visit
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM visits WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Visit {} not found", id)));
        }
        Ok(())
    }

    /// Visits scheduled for today (for the guest-pass dashboard)
    pub async fn count_today(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM visits WHERE scheduled_date = CURRENT_DATE")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Visitors currently on the premises
    pub async fn count_ongoing(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM visits WHERE visit_status = 'ongoing'")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
