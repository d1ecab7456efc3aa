//! Executives service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::executive::{CreateExecutive, Executive, ExecutiveDetails, UpdateExecutive},
    repository::Repository,
};

#[derive(Clone)]
pub struct ExecutivesService {
    repository: Repository,
}

impl ExecutivesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_active(&self) -> AppResult<Vec<ExecutiveDetails>> {
        self.repository.executives.list_active().await
    }

    pub async fn create(&self, data: &CreateExecutive) -> AppResult<Executive> {
        if data.user_id.is_none() {
            return Err(AppError::Validation("User ID is required".to_string()));
        }
        self.repository.executives.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateExecutive) -> AppResult<Executive> {
        self.repository.executives.update(id, data).await
    }

    /// Deactivate rather than delete, preserving visit history
    pub async fn deactivate(&self, id: Uuid) -> AppResult<Executive> {
        self.repository.executives.deactivate(id).await
    }
}
