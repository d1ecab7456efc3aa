//! Projects repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::project::{CreateProject, Project, UpdateProject},
};

#[derive(Clone)]
pub struct ProjectsRepository {
    pool: Pool<Postgres>,
}

impl ProjectsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all projects
    pub async fn list(&self) -> AppResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a project
    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        let row = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, status, progress, client, manager, team, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.status.as_deref().unwrap_or("Planning"))
        .bind(data.progress.unwrap_or(0))
        .bind(&data.client)
        .bind(&data.manager)
        .bind(data.team.unwrap_or(0))
        .bind(data.start_date)
        .bind(data.end_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update progress and status of a project
    pub async fn update(&self, id: i32, data: &UpdateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET progress = COALESCE($1, progress),
                status = COALESCE($2, status),
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(data.progress)
        .bind(&data.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
    }

    /// Delete a project
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Project {} not found", id)));
        }
        Ok(())
    }
}
