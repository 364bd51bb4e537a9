//! Configuration types for the calculation service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every section and field
//! has a default, so an empty file (or no file) yields a usable config.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Default bound on a remote calculation request.
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Top-level application configuration.
///
/// Built once at startup by [`super::ConfigLoader`] and shared by reference.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Basic-auth credentials.
    pub auth: AuthConfig,
    /// Remote calculation endpoint used by the client.
    pub remote: RemoteConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Basic-auth credentials.
///
/// The server requires them on every request; the client sends them with
/// every remote call.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Expected user name.
    pub username: String,
    /// Expected password.
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password".to_string(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Remote calculation endpoint settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the calculation service. `None` means always compute
    /// locally.
    pub base_url: Option<Url>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl RemoteConfig {
    /// Returns the request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.auth.username, "admin");
        assert_eq!(config.remote.base_url, None);
        assert_eq!(config.remote.timeout(), Duration::from_millis(3000));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "server:\n  port: 9000\nremote:\n  base_url: http://localhost:8080/\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.remote.base_url.as_ref().map(Url::as_str),
            Some("http://localhost:8080/")
        );
        assert_eq!(config.remote.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_auth_debug_hides_password() {
        let auth = AuthConfig {
            username: "user".to_string(),
            password: "secret".to_string(),
        };
        let debug = format!("{:?}", auth);
        assert!(debug.contains("user"));
        assert!(!debug.contains("secret"));
    }
}
