//! Photo logs and photo comments repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::photo_log::{CreatePhotoComment, CreatePhotoLog, PhotoComment, PhotoLog},
};

#[derive(Clone)]
pub struct PhotoLogsRepository {
    pool: Pool<Postgres>,
}

impl PhotoLogsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all photo logs, newest first
    pub async fn list(&self) -> AppResult<Vec<PhotoLog>> {
        let rows = sqlx::query_as::<_, PhotoLog>("SELECT * FROM photo_logs ORDER BY time DESC NULLS LAST")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a photo log
    pub async fn create(&self, data: &CreatePhotoLog) -> AppResult<PhotoLog> {
        let row = sqlx::query_as::<_, PhotoLog>(
            r#"
            INSERT INTO photo_logs (project, location, photos, uploaded_by, time, tags)
            VALUES ($1, $2, $3, $4, COALESCE($5, NOW()), $6)
            RETURNING *
            "#,
        )
        .bind(&data.project)
        .bind(&data.location)
        .bind(data.photos.unwrap_or(0))
        .bind(&data.uploaded_by)
        .bind(data.time)
        .bind(data.tags.clone().unwrap_or_default())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a photo log (comments cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM photo_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Photo log {} not found", id)));
        }
        Ok(())
    }

    /// List comments for one photo log, oldest first
    pub async fn list_comments(&self, photo_log_id: i32) -> AppResult<Vec<PhotoComment>> {
        let rows = sqlx::query_as::<_, PhotoComment>(
            "SELECT * FROM photo_comments WHERE photo_log_id = $1 ORDER BY time ASC",
        )
        .bind(photo_log_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Add a comment to a photo log
    pub async fn create_comment(&self, data: &CreatePhotoComment) -> AppResult<PhotoComment> {
        let row = sqlx::query_as::<_, PhotoComment>(
            r#"
            INSERT INTO photo_comments (photo_log_id, user_name, text, time)
            VALUES ($1, $2, $3, NOW())
            RETURNING *
            "#,
        )
        .bind(data.photo_log_id)
        .bind(&data.user_name)
        .bind(&data.text)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a comment
    pub async fn delete_comment(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM photo_comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Photo comment {} not found", id)));
        }
        Ok(())
    }
}
