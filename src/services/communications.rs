//! Communications service

use crate::{
    error::{AppError, AppResult},
    models::communication::{Communication, CreateCommunication, UpdateCommunication},
    repository::Repository,
};

#[derive(Clone)]
pub struct CommunicationsService {
    repository: Repository,
}

impl CommunicationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Communication>> {
        self.repository.communications.list().await
    }

    pub async fn create(&self, data: &CreateCommunication) -> AppResult<Communication> {
        if data.project.as_deref().map_or(true, str::is_empty)
            || data.user_name.as_deref().map_or(true, str::is_empty)
            || data.message.as_deref().map_or(true, str::is_empty)
        {
            return Err(AppError::Validation(
                "project, user_name, and message are required".to_string(),
            ));
        }
        self.repository.communications.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateCommunication) -> AppResult<Communication> {
        if data.unread.is_none() {
            return Err(AppError::Validation("unread is required".to_string()));
        }
        self.repository.communications.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.communications.delete(id).await
    }
}
