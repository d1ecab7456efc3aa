//! Client access repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::client_access::{ClientAccess, CreateClientAccess, UpdateClientAccess},
};

#[derive(Clone)]
pub struct ClientAccessRepository {
    pool: Pool<Postgres>,
}

impl ClientAccessRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all client access records
    pub async fn list(&self) -> AppResult<Vec<ClientAccess>> {
        let rows = sqlx::query_as::<_, ClientAccess>("SELECT * FROM client_access ORDER BY client")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a client access record
    pub async fn create(&self, data: &CreateClientAccess) -> AppResult<ClientAccess> {
        let row = sqlx::query_as::<_, ClientAccess>(
            r#"
            INSERT INTO client_access
                (client, project, last_login, reports_viewed, comments, notifications_enabled, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.client)
        .bind(&data.project)
        .bind(data.last_login)
        .bind(data.reports_viewed.unwrap_or(0))
        .bind(data.comments.unwrap_or(0))
        .bind(data.notifications_enabled.unwrap_or(true))
        .bind(data.status.as_deref().unwrap_or("active"))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a client access record
    pub async fn update(&self, id: i32, data: &UpdateClientAccess) -> AppResult<ClientAccess> {
        sqlx::query_as::<_, ClientAccess>(
            r#"
            UPDATE client_access
            SET client = COALESCE($1, client),
                project = COALESCE($2, project),
                last_login = COALESCE($3, last_login),
                reports_viewed = COALESCE($4, reports_viewed),
                comments = COALESCE($5, comments),
                notifications_enabled = COALESCE($6, notifications_enabled),
                status = COALESCE($7, status),
                updated_at = NOW()
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&data.client)
        .bind(&data.project)
        .bind(data.last_login)
        .bind(data.reports_viewed)
        .bind(data.comments)
        .bind(data.notifications_enabled)
        .bind(&data.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Client access {} not found", id)))
    }

    /// Delete a client access record
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM client_access WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Client access {} not found", id)));
        }
        Ok(())
    }
}
