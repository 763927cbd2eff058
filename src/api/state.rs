//! API server state

use std::sync::Arc;

use crate::config::AppConfig;

/// API server state
///
/// Holds the process-wide configuration, established once at startup and
/// never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The gateway address reported back to clients.
    pub fn gateway(&self) -> &str {
        &self.config.gateway
    }

    /// The tenant under which topics are qualified.
    pub fn tenant(&self) -> &str {
        &self.config.tenant
    }

    /// The namespace under which topics are qualified.
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }
}
