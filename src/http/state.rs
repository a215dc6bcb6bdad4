use std::sync::Arc;

use crate::services::wait_times::WaitTimeSource;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn WaitTimeSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn WaitTimeSource>) -> Self {
        Self { source }
    }
}
