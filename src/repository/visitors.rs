//! Visitors repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::visitor::{CreateVisitor, UpdateVisitor, Visitor},
};

#[derive(Clone)]
pub struct VisitorsRepository {
    pool: Pool<Postgres>,
}

impl VisitorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all visitors, newest first
    pub async fn list(&self) -> AppResult<Vec<Visitor>> {
        let rows = sqlx::query_as::<_, Visitor>("SELECT * FROM visitors ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a visitor
    pub async fn create(&self, data: &CreateVisitor) -> AppResult<Visitor> {
        let row = sqlx::query_as::<_, Visitor>(
            r#"
            INSERT INTO visitors (full_name, email, phone, company)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.company)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a visitor
    pub async fn update(&self, id: Uuid, data: &UpdateVisitor) -> AppResult<Visitor> {
        sqlx::query_as::<_, Visitor>(
            r#"
            UPDATE visitors
            SET full_name = COALESCE($1, full_name),
                email = COALESCE($2, email),
                phone = COALESCE($3, phone),
                company = COALESCE($4, company),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.company)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Visitor {} not found", id)))
    }

    /// Delete a visitor
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM visitors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Visitor {} not found", id)));
        }
        Ok(())
    }

    /// Total visitor count (for the guest-pass dashboard)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visitors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
