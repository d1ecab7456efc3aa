//! Payments repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::payment::{CreatePayment, Payment, UpdatePayment},
};

#[derive(Clone)]
pub struct PaymentsRepository {
    pool: Pool<Postgres>,
}

impl PaymentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all payments, soonest due first
    pub async fn list(&self) -> AppResult<Vec<Payment>> {
        let rows = sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY due ASC NULLS LAST")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a payment
    pub async fn create(&self, data: &CreatePayment) -> AppResult<Payment> {
        let row = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (vendor, amount, payment_type, due, status, project)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.vendor)
        .bind(data.amount)
        .bind(data.payment_type.as_deref().unwrap_or("Payable"))
        .bind(data.due)
        .bind(data.status.as_deref().unwrap_or("Pending"))
        .bind(&data.project)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a payment's status
    pub async fn update(&self, id: i32, data: &UpdatePayment) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments
            SET status = COALESCE($1, status),
                updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(&data.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Payment {} not found", id)))
    }

    /// Delete a payment
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Payment {} not found", id)));
        }
        Ok(())
    }
}
