//! Personnel repository (dashboard staff directory)

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::personnel::{CreatePersonnel, Personnel, UpdatePersonnel},
};

#[derive(Clone)]
pub struct PersonnelRepository {
    pool: Pool<Postgres>,
}

impl PersonnelRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all personnel
    pub async fn list(&self) -> AppResult<Vec<Personnel>> {
        let rows = sqlx::query_as::<_, Personnel>("SELECT * FROM personnel ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a personnel record
    pub async fn create(&self, data: &CreatePersonnel) -> AppResult<Personnel> {
        let row = sqlx::query_as::<_, Personnel>(
            r#"
            INSERT INTO personnel (name, email, role, location, shift, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.role)
        .bind(&data.location)
        .bind(&data.shift)
        .bind(data.status.as_deref().unwrap_or("active"))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a personnel record
    pub async fn update(&self, id: i32, data: &UpdatePersonnel) -> AppResult<Personnel> {
        sqlx::query_as::<_, Personnel>(
            r#"
            UPDATE personnel
            SET name = COALESCE($1, name),
                email = COALESCE($2, email),
                role = COALESCE($3, role),
                location = COALESCE($4, location),
                shift = COALESCE($5, shift),
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.role)
        .bind(&data.location)
        .bind(&data.shift)
        .bind(&data.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Personnel {} not found", id)))
    }

    /// Delete a personnel record
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM personnel WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Personnel {} not found", id)));
        }
        Ok(())
    }
}
