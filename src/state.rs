// src/state.rs
use std::sync::Arc;

use crate::services::agent::Agent;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub agent: Agent,
}

impl AppState {
    pub fn new(agent: Agent) -> Self {
        Self { agent }
    }
}
