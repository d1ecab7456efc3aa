//! Maintenance schedules repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{
        CreateMaintenanceSchedule, MaintenanceSchedule, UpdateMaintenanceSchedule,
    },
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all schedules, most recent first
    pub async fn list(&self) -> AppResult<Vec<MaintenanceSchedule>> {
        let rows = sqlx::query_as::<_, MaintenanceSchedule>(
            "SELECT * FROM maintenance_schedules ORDER BY date DESC, requested_time DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a schedule; vendor_name is resolved by the service
    pub async fn create(
        &self,
        data: &CreateMaintenanceSchedule,
        vendor_name: &str,
    ) -> AppResult<MaintenanceSchedule> {
        let row = sqlx::query_as::<_, MaintenanceSchedule>(
            r#"
            INSERT INTO maintenance_schedules (
                property_id, date, schedule_type, vendor_id, vendor_name, status,
                requested_time, start_time, end_time, description, priority, acknowledgments
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(data.property_id)
        .bind(data.date)
        .bind(&data.schedule_type)
        .bind(data.vendor_id)
        .bind(vendor_name)
        .bind(data.status.as_deref().unwrap_or("pending"))
        .bind(data.requested_time)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(&data.description)
        .bind(data.priority.as_deref().unwrap_or("Normal"))
        .bind(
            data.acknowledgments
                .clone()
                .unwrap_or_else(|| serde_json::json!({})),
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Partial update of a schedule
    pub async fn update(
        &self,
        id: i32,
        data: &UpdateMaintenanceSchedule,
    ) -> AppResult<MaintenanceSchedule> {
        sqlx::query_as::<_, MaintenanceSchedule>(
            r#"
            UPDATE maintenance_schedules
            SET property_id = COALESCE($1, property_id),
                date = COALESCE($2, date),
                schedule_type = COALESCE($3, schedule_type),
                vendor_id = COALESCE($4, vendor_id),
                vendor_name = COALESCE($5, vendor_name),
                status = COALESCE($6, status),
                requested_time = COALESCE($7, requested_time),
                start_time = COALESCE($8, start_time),
                end_time = COALESCE($9, end_time),
                description = COALESCE($10, description),
                priority = COALESCE($11, priority),
                acknowledgments = COALESCE($12, acknowledgments),
                updated_at = NOW()
            WHERE id = $13
            RETURNING *
            "#,
        )
        .bind(data.property_id)
        .bind(data.date)
        .bind(&data.schedule_type)
        .bind(data.vendor_id)
        .bind(&data.vendor_name)
        .bind(&data.status)
        .bind(data.requested_time)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(&data.description)
        .bind(&data.priority)
        .bind(&data.acknowledgments)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance schedule {} not found", id)))
    }

    /// Delete a schedule
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Maintenance schedule {} not found",
                id
            )));
        }
        Ok(())
    }
}
