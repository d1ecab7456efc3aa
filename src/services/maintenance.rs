//! Maintenance schedules service

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{
        CreateMaintenanceSchedule, MaintenanceSchedule, UpdateMaintenanceSchedule,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceSchedule>> {
        self.repository.maintenance.list().await
    }

    /// Create a schedule, resolving the denormalized vendor name when a
    /// vendor is linked but no name was supplied
    pub async fn create(&self, data: &CreateMaintenanceSchedule) -> AppResult<MaintenanceSchedule> {
        if data.property_id.is_none()
            || data.date.is_none()
            || data.schedule_type.as_deref().map_or(true, str::is_empty)
            || data.requested_time.is_none()
        {
            return Err(AppError::Validation(
                "Property, date, type, and requested time are required".to_string(),
            ));
        }

        let vendor_name = match (&data.vendor_name, data.vendor_id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(vendor_id)) => self
                .repository
                .vendors
                .name_by_id(vendor_id)
                .await?
                .unwrap_or_else(|| "Not assigned".to_string()),
            _ => "Not assigned".to_string(),
        };

        self.repository.maintenance.create(data, &vendor_name).await
    }

    pub async fn update(
        &self,
        id: i32,
        data: &UpdateMaintenanceSchedule,
    ) -> AppResult<MaintenanceSchedule> {
        self.repository.maintenance.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.maintenance.delete(id).await
    }
}
