//! Configuration loading and management for the calculation service.
//!
//! Configuration is built once at startup from an optional YAML file and
//! `CALC_*` environment variables, then passed to the components that need
//! it.
//!
//! # Example
//!
//! ```no_run
//! use calc_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::from_env().unwrap().into_config();
//! println!("Remote endpoint: {:?}", config.remote.base_url);
//! ```

mod loader;
mod types;

pub use loader::{
    ConfigLoader, ENV_API_URL, ENV_CONFIG, ENV_HOST, ENV_PASSWORD, ENV_PORT, ENV_TIMEOUT_MS,
    ENV_USERNAME,
};
pub use types::{AppConfig, AuthConfig, DEFAULT_TIMEOUT_MS, RemoteConfig, ServerConfig};
