//! Vendors service

use crate::{
    error::{AppError, AppResult},
    models::vendor::{CreateVendor, UpdateVendor, Vendor},
    repository::Repository,
};

#[derive(Clone)]
pub struct VendorsService {
    repository: Repository,
}

impl VendorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Vendor>> {
        self.repository.vendors.list().await
    }

    pub async fn create(&self, data: &CreateVendor) -> AppResult<Vendor> {
        if data.name.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        self.repository.vendors.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateVendor) -> AppResult<Vendor> {
        self.repository.vendors.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.vendors.delete(id).await
    }
}
