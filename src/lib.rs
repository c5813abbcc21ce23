//! Equipment donation registry
//!
//! Tracks donated equipment through registration, verification and recipient
//! assignment. Each record is owned by the donor that registered it; only the
//! donor may change its status, and only a `verified` record can be assigned.
//!
//! The registry core lives in [`services::registry`] and knows nothing about
//! transport or storage; [`api`] exposes it over HTTP.

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
    /// Build state around a fresh in-memory registry using the wall clock
    pub fn in_memory(config: AppConfig) -> Self {
        let services = services::Services::new(
            repository::Repository::in_memory(),
            Box::new(services::SystemClock),
        );
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
