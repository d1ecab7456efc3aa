//! Properties service

use crate::{
    error::{AppError, AppResult},
    models::property::{CreateProperty, Property, PropertyWithCounts, UpdateProperty},
    repository::Repository,
};

#[derive(Clone)]
pub struct PropertiesService {
    repository: Repository,
}

impl PropertiesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<PropertyWithCounts>> {
        self.repository.properties.list_with_counts().await
    }

    pub async fn create(&self, data: &CreateProperty) -> AppResult<Property> {
        if data.name.as_deref().map_or(true, str::is_empty)
            || data.location.as_deref().map_or(true, str::is_empty)
        {
            return Err(AppError::Validation(
                "Name and location are required".to_string(),
            ));
        }
        self.repository.properties.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateProperty) -> AppResult<Property> {
        self.repository.properties.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<Property> {
        self.repository.properties.delete(id).await
    }
}
