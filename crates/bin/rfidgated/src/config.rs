//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `rfidgate.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use rfidgate_app::services::record_service::QueryTimeouts;
use serde::Deserialize;

const CONFIG_FILE: &str = "rfidgate.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Document store settings.
    pub store: StoreConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// MongoDB configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// MongoDB connection string.
    pub url: String,
    /// Database holding the device collection.
    pub database: String,
    /// Device collection name.
    pub collection: String,
    /// Bound on connecting and the startup ping.
    pub connect_timeout_secs: u64,
    /// Deadline for `GET /api/data`.
    pub latest_timeout_secs: u64,
    /// Deadline for `GET /api/showall`.
    pub all_timeout_secs: u64,
    /// Deadline for `GET /api/data/{rfid}`.
    pub by_rfid_timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `rfidgate.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("RFIDGATE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("RFIDGATE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("RFIDGATE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = lookup("RFIDGATE_MONGODB_URL") {
            self.store.url = val;
        }
        if let Some(val) = lookup("RFIDGATE_MONGODB_DATABASE") {
            self.store.database = val;
        }
        if let Some(val) = lookup("RFIDGATE_MONGODB_COLLECTION") {
            self.store.collection = val;
        }
        if let Some(val) = lookup("RFIDGATE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        for (name, value) in [
            ("store.url", &self.store.url),
            ("store.database", &self.store.database),
            ("store.collection", &self.store.collection),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        for (name, secs) in [
            ("store.connect_timeout_secs", self.store.connect_timeout_secs),
            ("store.latest_timeout_secs", self.store.latest_timeout_secs),
            ("store.all_timeout_secs", self.store.all_timeout_secs),
            ("store.by_rfid_timeout_secs", self.store.by_rfid_timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::Validation(format!("{name} must be non-zero")));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Connection settings for the MongoDB adapter.
    #[must_use]
    pub fn store_config(&self) -> rfidgate_adapter_storage_mongodb::Config {
        rfidgate_adapter_storage_mongodb::Config {
            url: self.store.url.clone(),
            database: self.store.database.clone(),
            collection: self.store.collection.clone(),
            connect_timeout: Duration::from_secs(self.store.connect_timeout_secs),
        }
    }

    /// Per-operation deadlines for the record service.
    #[must_use]
    pub fn query_timeouts(&self) -> QueryTimeouts {
        QueryTimeouts {
            latest: Duration::from_secs(self.store.latest_timeout_secs),
            all: Duration::from_secs(self.store.all_timeout_secs),
            by_rfid: Duration::from_secs(self.store.by_rfid_timeout_secs),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "kawal_anak".to_string(),
            collection: "alat".to_string(),
            connect_timeout_secs: 10,
            latest_timeout_secs: 10,
            all_timeout_secs: 15,
            by_rfid_timeout_secs: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "rfidgated=info,rfidgate=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
