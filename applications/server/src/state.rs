/// Shared application state
use crate::services::{HealthMonitor, UserStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub health: Arc<HealthMonitor>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>, health: Arc<HealthMonitor>) -> Self {
        Self { store, health }
    }
}
