//! Executives repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::executive::{CreateExecutive, Executive, ExecutiveDetails, UpdateExecutive},
};

#[derive(Clone)]
pub struct ExecutivesRepository {
    pool: Pool<Postgres>,
}

impl ExecutivesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active executives with their user details (login screen listing)
    pub async fn list_active(&self) -> AppResult<Vec<ExecutiveDetails>> {
        let rows = sqlx::query_as::<_, ExecutiveDetails>(
            r#"
            SELECT e.id, u.full_name as name, e.position, u.email, u.department
            FROM executives e
            JOIN users u ON e.user_id = u.id
            WHERE e.is_active = TRUE AND u.is_active = TRUE
            ORDER BY u.full_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create an executive profile for an existing user
    pub async fn create(&self, data: &CreateExecutive) -> AppResult<Executive> {
        let row = sqlx::query_as::<_, Executive>(
            r#"
            INSERT INTO executives (user_id, position)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(data.user_id)
        .bind(&data.position)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an executive profile
    pub async fn update(&self, id: Uuid, data: &UpdateExecutive) -> AppResult<Executive> {
        let mut sets = vec!["updated_at = NOW()".to_string()];
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.position, "position");
        add_field!(data.is_active, "is_active");

        let query = format!(
            "UPDATE executives SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Executive>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.position);
        bind_field!(data.is_active);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Executive {} not found", id)))
    }

    /// Soft-delete an executive (visit history is preserved)
    pub async fn deactivate(&self, id: Uuid) -> AppResult<Executive> {
        sqlx::query_as::<_, Executive>(
            "UPDATE executives SET is_active = FALSE, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Executive {} not found", id)))
    }
}
