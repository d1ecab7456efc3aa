//! Personnel service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::personnel::{CreatePersonnel, Personnel, UpdatePersonnel},
    repository::Repository,
};

#[derive(Clone)]
pub struct PersonnelService {
    repository: Repository,
}

impl PersonnelService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Personnel>> {
        self.repository.personnel.list().await
    }

    pub async fn create(&self, data: &CreatePersonnel) -> AppResult<Personnel> {
        if data.name.as_deref().map_or(true, str::is_empty)
            || data.email.as_deref().map_or(true, str::is_empty)
            || data.role.as_deref().map_or(true, str::is_empty)
        {
            return Err(AppError::Validation(
                "Name, email, and role are required".to_string(),
            ));
        }
        data.validate()?;
        self.repository.personnel.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdatePersonnel) -> AppResult<Personnel> {
        data.validate()?;
        self.repository.personnel.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.personnel.delete(id).await
    }
}
