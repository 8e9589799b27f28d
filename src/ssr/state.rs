//! Application State
//!
//! Shared state accessible by the render handler. Holds the root
//! component of the application tree and the server configuration.
//! Wrapped in Arc for sharing across async tasks; all per-request
//! state (data client, routing context) is created inside the handler,
//! never here.

use crate::config::{Config, DeployMode};
use crate::render::Component;
use std::sync::Arc;

/// Shared application state for the render handler
#[derive(Clone)]
pub struct AppState {
    /// Root component of the application tree
    pub root: Arc<dyn Component>,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from a root component and config.
    pub fn new(root: Arc<dyn Component>, config: Config) -> Self {
        Self {
            root,
            config: Arc::new(config),
        }
    }

    /// Deployment mode shortcut.
    pub fn mode(&self) -> DeployMode {
        self.config.server.mode
    }
}
