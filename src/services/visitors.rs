//! Visitors service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::visitor::{CreateVisitor, UpdateVisitor, Visitor},
    repository::Repository,
};

#[derive(Clone)]
pub struct VisitorsService {
    repository: Repository,
}

impl VisitorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Visitor>> {
        self.repository.visitors.list().await
    }

    pub async fn create(&self, data: &CreateVisitor) -> AppResult<Visitor> {
        if data.full_name.as_deref().map_or(true, str::is_empty)
            || data.email.as_deref().map_or(true, str::is_empty)
        {
            return Err(AppError::Validation(
                "Full name and email are required".to_string(),
            ));
        }
        data.validate()?;
        self.repository.visitors.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateVisitor) -> AppResult<Visitor> {
        data.validate()?;
        self.repository.visitors.update(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.visitors.delete(id).await
    }
}
