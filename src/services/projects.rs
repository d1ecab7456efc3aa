//! Projects service

use crate::{
    error::{AppError, AppResult},
    models::project::{CreateProject, Project, UpdateProject},
    repository::Repository,
};

#[derive(Clone)]
pub struct ProjectsService {
    repository: Repository,
}

impl ProjectsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Project>> {
        self.repository.projects.list().await
    }

    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        if data.name.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        self.repository.projects.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateProject) -> AppResult<Project> {
        self.repository.projects.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.projects.delete(id).await
    }
}
