//! Communications repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::communication::{Communication, CreateCommunication, UpdateCommunication},
};

#[derive(Clone)]
pub struct CommunicationsRepository {
    pool: Pool<Postgres>,
}

impl CommunicationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all communications, newest first
    pub async fn list(&self) -> AppResult<Vec<Communication>> {
        let rows = sqlx::query_as::<_, Communication>(
            "SELECT * FROM communications ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a communication entry (starts unread)
    pub async fn create(&self, data: &CreateCommunication) -> AppResult<Communication> {
        let row = sqlx::query_as::<_, Communication>(
            r#"
            INSERT INTO communications (project, user_name, message, unread)
            VALUES ($1, $2, $3, 1)
            RETURNING *
            "#,
        )
        .bind(&data.project)
        .bind(&data.user_name)
        .bind(&data.message)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update the unread counter
    pub async fn update(&self, id: i32, data: &UpdateCommunication) -> AppResult<Communication> {
        sqlx::query_as::<_, Communication>(
            r#"
            UPDATE communications
            SET unread = COALESCE($1, unread),
                updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(data.unread)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Communication {} not found", id)))
    }

    /// Delete a communication entry
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM communications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Communication {} not found", id)));
        }
        Ok(())
    }
}
