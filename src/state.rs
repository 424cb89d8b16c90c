// src/state.rs
use std::sync::Arc;

use crate::services::metrics_manager::MetricsManager;
use crate::services::trip_planner::TripPlanner;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub planner: TripPlanner,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new(planner: TripPlanner) -> Self {
        Self {
            planner,
            metrics: MetricsManager::new(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(TripPlanner::from_env()?))
    }
}
