//! Grand City Server
//!
//! Rust implementation of the Grand City backend: an admin REST API for
//! property management (properties, maintenance, payments, projects) and a
//! guest-pass REST API for visitor check-in with live updates.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
