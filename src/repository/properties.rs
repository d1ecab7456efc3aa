//! Properties repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::property::{CreateProperty, Property, PropertyWithCounts, UpdateProperty},
};

#[derive(Clone)]
pub struct PropertiesRepository {
    pool: Pool<Postgres>,
}

impl PropertiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List properties with maintenance and personnel counts
    pub async fn list_with_counts(&self) -> AppResult<Vec<PropertyWithCounts>> {
        let rows = sqlx::query_as::<_, PropertyWithCounts>(
            r#"
            SELECT p.*,
                   COUNT(DISTINCT ms.id) as maintenance_count,
                   COUNT(DISTINCT pp.personnel_id) as personnel_count
            FROM properties p
            LEFT JOIN maintenance_schedules ms ON p.id = ms.property_id
            LEFT JOIN personnel_properties pp ON p.id = pp.property_id
            GROUP BY p.id
            ORDER BY p.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a property
    pub async fn create(&self, data: &CreateProperty) -> AppResult<Property> {
        let row = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (name, location, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.location)
        .bind(data.description.as_deref().unwrap_or(""))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a property
    pub async fn update(&self, id: i32, data: &UpdateProperty) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET name = COALESCE($1, name),
                location = COALESCE($2, location),
                description = COALESCE($3, description),
                updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.location)
        .bind(&data.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Property {} not found", id)))
    }

    /// Delete a property, returning the removed row
    pub async fn delete(&self, id: i32) -> AppResult<Property> {
        sqlx::query_as::<_, Property>("DELETE FROM properties WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Property {} not found", id)))
    }
}
