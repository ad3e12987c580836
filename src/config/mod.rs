//! Configuration loading and management
//!
//! Configuration is read from YAML. Every section has defaults, so an empty
//! document (or no file at all) yields a working local setup.
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 8080
//! logging:
//!   filter: dinein=debug,tower_http=info
//! seed:
//!   dishes:
//!     - name: Dolcelatte and chickpea spaghetti
//!       description: Spaghetti topped with a blend of dolcelatte and fresh chickpeas
//!       price: 19
//!       image_url: https://images.example.com/spaghetti.jpg
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "DINEIN_CONFIG";

/// Environment variable overriding `server.port`
pub const PORT_VAR: &str = "DINEIN_PORT";

/// Errors raised while loading configuration or seeding the store
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: String, value: String },

    #[error("invalid bind address '{address}': {message}")]
    InvalidAddress { address: String, message: String },

    #[error("invalid seed {entity} at index {index}: {message}")]
    InvalidSeed {
        entity: &'static str,
        index: usize,
        message: String,
    },
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Reported by the health endpoints
    pub service_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            service_name: "dinein".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddress {
                address,
                message: e.to_string(),
            })
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Records loaded into the store at start-up
///
/// Each record has the same shape as the `data` member of a create request,
/// plus an optional `id`. Records are validated like create requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub dishes: Vec<Map<String, Value>>,
    pub orders: Vec<Map<String, Value>>,
}

impl SeedData {
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty() && self.orders.is_empty()
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub seed: SeedData,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from the process environment
    ///
    /// Reads the file named by `DINEIN_CONFIG` if set, then applies
    /// `DINEIN_PORT`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Same as [`load`](Self::load) with an injectable variable lookup
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };

        if let Some(port) = lookup(PORT_VAR) {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                name: PORT_VAR.to_string(),
                value: port,
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.filter, "info");
        assert!(config.seed.is_empty());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.service_name, "dinein");
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            AppConfig::from_yaml_str("server: [1, 2"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_bind_address() {
        let addr = ServerConfig::default().bind_address().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:5000");

        let bad = ServerConfig {
            host: "not a host".into(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            bad.bind_address(),
            Err(ConfigError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_load_with_port_override() {
        let config = AppConfig::load_with(|name| (name == PORT_VAR).then(|| "9090".to_string()))
            .unwrap();
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_load_with_invalid_port() {
        let err = AppConfig::load_with(|name| (name == PORT_VAR).then(|| "high".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_with_missing_file() {
        let err = AppConfig::load_with(|name| {
            (name == CONFIG_PATH_VAR).then(|| "/definitely/not/here.yaml".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
