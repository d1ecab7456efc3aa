//! Payments service

use crate::{
    error::{AppError, AppResult},
    models::payment::{CreatePayment, Payment, UpdatePayment},
    repository::Repository,
};

#[derive(Clone)]
pub struct PaymentsService {
    repository: Repository,
}

impl PaymentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Payment>> {
        self.repository.payments.list().await
    }

    pub async fn create(&self, data: &CreatePayment) -> AppResult<Payment> {
        if data.vendor.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::Validation("Vendor is required".to_string()));
        }
        if data.amount.is_none() {
            return Err(AppError::Validation("Amount is required".to_string()));
        }
        self.repository.payments.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdatePayment) -> AppResult<Payment> {
        self.repository.payments.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.payments.delete(id).await
    }
}
