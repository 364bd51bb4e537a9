//! Application state for the calculation service API.
//!
//! This module defines the shared application state that is available
//! to all request handlers and middleware.

use std::sync::Arc;

use crate::config::{AppConfig, AuthConfig};

/// Shared application state.
///
/// Holds the configuration built at startup. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The resolved application configuration.
    config: Arc<AppConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the credentials every request must present.
    pub fn auth(&self) -> &AuthConfig {
        &self.config.auth
    }
}
