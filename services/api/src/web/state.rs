//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::adapters::latency::{NoLatency, SimulatedLatency};
use crate::adapters::memory::InMemoryCatalog;
use crate::config::{Config, LatencyMode};
use course_catalog_core::ports::{CatalogService, EnrollmentService, LatencyPolicy};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    pub enrollments: Arc<dyn EnrollmentService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires a single in-memory catalog behind both store ports.
    pub fn in_memory(config: Arc<Config>) -> Self {
        let latency: Arc<dyn LatencyPolicy> = match config.latency_mode {
            LatencyMode::Simulated => Arc::new(SimulatedLatency::new(config.latency_percent)),
            LatencyMode::Disabled => Arc::new(NoLatency),
        };

        let store = if config.seed_catalog {
            InMemoryCatalog::seeded(latency)
        } else {
            InMemoryCatalog::empty(latency)
        };
        let store = Arc::new(store);

        Self {
            catalog: store.clone(),
            enrollments: store,
            config,
        }
    }
}
