use std::sync::Arc;

use crate::domain::session::SessionFactory;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionFactory>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionFactory>) -> Self {
        Self { sessions }
    }
}
