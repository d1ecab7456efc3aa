//! Client access service

use crate::{
    error::{AppError, AppResult},
    models::client_access::{ClientAccess, CreateClientAccess, UpdateClientAccess},
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientAccessService {
    repository: Repository,
}

impl ClientAccessService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<ClientAccess>> {
        self.repository.client_access.list().await
    }

    pub async fn create(&self, data: &CreateClientAccess) -> AppResult<ClientAccess> {
        if data.client.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::Validation("Client is required".to_string()));
        }
        self.repository.client_access.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateClientAccess) -> AppResult<ClientAccess> {
        self.repository.client_access.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.client_access.delete(id).await
    }
}
