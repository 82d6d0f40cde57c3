//! Book CRUD Server
//!
//! A small REST JSON API over an in-memory store of book records.

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

impl AppState {
    /// Build the state from configuration, seeding the store if configured
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let repository = repository::Repository::with_seed(config.store.seed_sample_books)?;
        Ok(Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        })
    }
}
