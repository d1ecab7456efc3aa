//! Photo logs and comments service

use crate::{
    error::{AppError, AppResult},
    models::photo_log::{CreatePhotoComment, CreatePhotoLog, PhotoComment, PhotoLog},
    repository::Repository,
};

#[derive(Clone)]
pub struct PhotoLogsService {
    repository: Repository,
}

impl PhotoLogsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<PhotoLog>> {
        self.repository.photo_logs.list().await
    }

    pub async fn create(&self, data: &CreatePhotoLog) -> AppResult<PhotoLog> {
        if data.project.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::Validation("Project is required".to_string()));
        }
        self.repository.photo_logs.create(data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.photo_logs.delete(id).await
    }

    pub async fn list_comments(&self, photo_log_id: i32) -> AppResult<Vec<PhotoComment>> {
        self.repository.photo_logs.list_comments(photo_log_id).await
    }

    pub async fn create_comment(&self, data: &CreatePhotoComment) -> AppResult<PhotoComment> {
        if data.photo_log_id.is_none() || data.text.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::Validation(
                "Photo log ID and text are required".to_string(),
            ));
        }
        self.repository.photo_logs.create_comment(data).await
    }

    pub async fn delete_comment(&self, id: i32) -> AppResult<()> {
        self.repository.photo_logs.delete_comment(id).await
    }
}
