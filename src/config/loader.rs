//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for building an
//! [`AppConfig`] from an optional YAML file plus environment overrides.

use std::fs;
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::error::{EngineError, EngineResult};

use super::types::AppConfig;

/// Overrides `server.host`.
pub const ENV_HOST: &str = "CALC_HOST";
/// Overrides `server.port`.
pub const ENV_PORT: &str = "CALC_PORT";
/// Overrides `auth.username`.
pub const ENV_USERNAME: &str = "CALC_USERNAME";
/// Overrides `auth.password`.
pub const ENV_PASSWORD: &str = "CALC_PASSWORD";
/// Overrides `remote.base_url`. An empty value clears it.
pub const ENV_API_URL: &str = "CALC_API_URL";
/// Overrides `remote.timeout_ms`.
pub const ENV_TIMEOUT_MS: &str = "CALC_TIMEOUT_MS";
/// Names an optional YAML configuration file.
pub const ENV_CONFIG: &str = "CALC_CONFIG";

/// Loads and validates application configuration.
///
/// Values are resolved in order: built-in defaults, then the YAML file (if
/// one is given), then `CALC_*` environment variables.
///
/// # Example
///
/// ```no_run
/// use calc_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/calculator.yaml")?;
/// println!("Listening on {}", loader.config().server.bind_address());
/// # Ok::<(), calc_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file and applies environment overrides.
    ///
    /// # Returns
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML
    /// - Any resulting value fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config = Self::load_yaml(path.as_ref())?;
        Self::resolve(config, |key| std::env::var(key).ok())
    }

    /// Builds configuration from defaults and environment overrides only.
    pub fn from_env() -> EngineResult<Self> {
        Self::resolve(AppConfig::default(), |key| std::env::var(key).ok())
    }

    /// Builds configuration the way both binaries do: the YAML file named by
    /// [`ENV_CONFIG`] if set, otherwise defaults, then environment overrides.
    pub fn discover() -> EngineResult<Self> {
        Self::discover_with(|key| std::env::var(key).ok())
    }

    /// Like [`ConfigLoader::discover`], reading variables through `lookup`.
    pub fn discover_with<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match lookup(ENV_CONFIG).filter(|path| !path.trim().is_empty()) {
            Some(path) => {
                debug!(path = %path, "Loading configuration file");
                Self::load_yaml(Path::new(&path))?
            }
            None => AppConfig::default(),
        };
        Self::resolve(config, lookup)
    }

    /// Validates an already-built configuration without consulting the
    /// environment.
    pub fn from_config(config: AppConfig) -> EngineResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// Applies overrides from `lookup` to `config`, then validates it.
    ///
    /// `lookup` maps an environment key such as [`ENV_PORT`] to its value.
    pub fn resolve<F>(mut config: AppConfig, lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        apply_overrides(&mut config, lookup)?;
        Self::from_config(config)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    fn load_yaml(path: &Path) -> EngineResult<AppConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> EngineResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup(ENV_HOST) {
        config.server.host = host;
    }
    if let Some(port) = lookup(ENV_PORT) {
        config.server.port = port.trim().parse().map_err(|_| EngineError::InvalidConfig {
            key: ENV_PORT.to_string(),
            message: format!("'{}' is not a valid port", port),
        })?;
    }
    if let Some(username) = lookup(ENV_USERNAME) {
        config.auth.username = username;
    }
    if let Some(password) = lookup(ENV_PASSWORD) {
        config.auth.password = password;
    }
    if let Some(url) = lookup(ENV_API_URL) {
        let url = url.trim();
        config.remote.base_url = if url.is_empty() {
            None
        } else {
            Some(Url::parse(url).map_err(|e| EngineError::InvalidConfig {
                key: ENV_API_URL.to_string(),
                message: format!("'{}' is not a valid URL: {}", url, e),
            })?)
        };
    }
    if let Some(timeout) = lookup(ENV_TIMEOUT_MS) {
        config.remote.timeout_ms =
            timeout
                .trim()
                .parse()
                .map_err(|_| EngineError::InvalidConfig {
                    key: ENV_TIMEOUT_MS.to_string(),
                    message: format!("'{}' is not a number of milliseconds", timeout),
                })?;
    }
    Ok(())
}

fn validate(config: &AppConfig) -> EngineResult<()> {
    if config.server.port == 0 {
        return Err(EngineError::InvalidConfig {
            key: "server.port".to_string(),
            message: "must be between 1 and 65535".to_string(),
        });
    }
    if config.auth.username.is_empty() {
        return Err(EngineError::InvalidConfig {
            key: "auth.username".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if config.remote.timeout_ms == 0 {
        return Err(EngineError::InvalidConfig {
            key: "remote.timeout_ms".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    if let Some(url) = &config.remote.base_url {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(EngineError::InvalidConfig {
                key: "remote.base_url".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    fn config_path() -> &'static str {
        "./config/calculator.yaml"
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "calc-engine-{}-{}.yaml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_configuration() {
        let config = ConfigLoader::load_yaml(Path::new(config_path())).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.username, "admin");
        assert_eq!(config.remote.timeout_ms, 3000);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/calculator.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = write_temp("invalid", "server: [unclosed");
        let result = ConfigLoader::load_yaml(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let path = write_temp("empty", "   \n");
        let result = ConfigLoader::load_yaml(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(result.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_resolve_without_overrides_keeps_config() {
        let loader = ConfigLoader::resolve(AppConfig::default(), no_env).unwrap();
        assert_eq!(loader.config(), &AppConfig::default());
    }

    #[test]
    fn test_env_overrides_apply() {
        let lookup = env_from(&[
            (ENV_HOST, "127.0.0.1"),
            (ENV_PORT, "9090"),
            (ENV_USERNAME, "calc"),
            (ENV_PASSWORD, "s3cret"),
            (ENV_API_URL, "http://backend:8080"),
            (ENV_TIMEOUT_MS, "500"),
        ]);
        let config = ConfigLoader::resolve(AppConfig::default(), lookup)
            .unwrap()
            .into_config();

        assert_eq!(config.server.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.auth.username, "calc");
        assert_eq!(config.auth.password, "s3cret");
        assert_eq!(
            config.remote.base_url.as_ref().map(Url::as_str),
            Some("http://backend:8080/")
        );
        assert_eq!(config.remote.timeout_ms, 500);
    }

    #[test]
    fn test_empty_api_url_clears_remote() {
        let mut config = AppConfig::default();
        config.remote.base_url = Some(Url::parse("http://backend:8080").unwrap());

        let config = ConfigLoader::resolve(config, env_from(&[(ENV_API_URL, "")]))
            .unwrap()
            .into_config();
        assert_eq!(config.remote.base_url, None);
    }

    #[test]
    fn test_invalid_port_override() {
        let result = ConfigLoader::resolve(AppConfig::default(), env_from(&[(ENV_PORT, "http")]));
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfig { ref key, .. }) if key == ENV_PORT
        ));
    }

    #[test]
    fn test_invalid_url_override() {
        let result =
            ConfigLoader::resolve(AppConfig::default(), env_from(&[(ENV_API_URL, "not a url")]));
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfig { ref key, .. }) if key == ENV_API_URL
        ));
    }

    #[test]
    fn test_discover_without_file_uses_defaults_and_env() {
        let config = ConfigLoader::discover_with(env_from(&[(ENV_TIMEOUT_MS, "250")]))
            .unwrap()
            .into_config();
        assert_eq!(config.server, AppConfig::default().server);
        assert_eq!(config.remote.timeout_ms, 250);
    }

    #[test]
    fn test_discover_reads_file_then_env() {
        let path = write_temp(
            "discover",
            "remote:\n  base_url: http://backend:8080/\n  timeout_ms: 1500\n",
        );
        let path_str = path.display().to_string();
        let result = ConfigLoader::discover_with(env_from(&[
            (ENV_CONFIG, path_str.as_str()),
            (ENV_USERNAME, "calc"),
        ]));
        let _ = fs::remove_file(&path);

        let config = result.unwrap().into_config();
        assert_eq!(
            config.remote.base_url.as_ref().map(Url::as_str),
            Some("http://backend:8080/")
        );
        assert_eq!(config.remote.timeout_ms, 1500);
        assert_eq!(config.auth.username, "calc");
    }

    #[test]
    fn test_discover_missing_file_returns_error() {
        let result =
            ConfigLoader::discover_with(env_from(&[(ENV_CONFIG, "/nonexistent/calculator.yaml")]));
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_validation_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(ConfigLoader::from_config(config).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let result = ConfigLoader::resolve(AppConfig::default(), env_from(&[(ENV_TIMEOUT_MS, "0")]));
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfig { ref key, .. }) if key == "remote.timeout_ms"
        ));
    }

    #[test]
    fn test_validation_rejects_empty_username() {
        let mut config = AppConfig::default();
        config.auth.username = String::new();
        assert!(ConfigLoader::from_config(config).is_err());
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let mut config = AppConfig::default();
        config.remote.base_url = Some(Url::parse("ftp://backend").unwrap());
        assert!(ConfigLoader::from_config(config).is_err());
    }
}
