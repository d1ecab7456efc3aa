//! Vendors repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::vendor::{CreateVendor, UpdateVendor, Vendor},
};

#[derive(Clone)]
pub struct VendorsRepository {
    pool: Pool<Postgres>,
}

impl VendorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all vendors
    pub async fn list(&self) -> AppResult<Vec<Vendor>> {
        let rows = sqlx::query_as::<_, Vendor>("SELECT * FROM vendors ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Look up a vendor name by ID (for schedule denormalization)
    pub async fn name_by_id(&self, id: i32) -> AppResult<Option<String>> {
        let name: Option<String> = sqlx::query_scalar("SELECT name FROM vendors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(name)
    }

    /// Create a vendor
    pub async fn create(&self, data: &CreateVendor) -> AppResult<Vendor> {
        let row = sqlx::query_as::<_, Vendor>(
            r#"
            INSERT INTO vendors (name, category, rating, active_contracts, last_payment, performance)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.rating)
        .bind(data.active_contracts.unwrap_or(0))
        .bind(data.last_payment)
        .bind(data.performance)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a vendor
    pub async fn update(&self, id: i32, data: &UpdateVendor) -> AppResult<Vendor> {
        sqlx::query_as::<_, Vendor>(
            r#"
            UPDATE vendors
            SET name = COALESCE($1, name),
                category = COALESCE($2, category),
                rating = COALESCE($3, rating),
                active_contracts = COALESCE($4, active_contracts),
                last_payment = COALESCE($5, last_payment),
                performance = COALESCE($6, performance),
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.category)
        .bind(data.rating)
        .bind(data.active_contracts)
        .bind(data.last_payment)
        .bind(data.performance)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vendor {} not found", id)))
    }

    /// Delete a vendor
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Vendor {} not found", id)));
        }
        Ok(())
    }
}
