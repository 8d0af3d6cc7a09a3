//! Configuration for the event publisher.
//!
//! Defaults reproduce the publisher's fixed behaviour: `redis://localhost:6379/0`
//! and input `fixtures/events.json`. An optional `publisher-config.yaml` in
//! the working directory can point the publisher at another server or input.
//! The list key and the sentinel are part of the consumer contract and are
//! not configurable (see [`crate::publish::EVENTS_KEY`] and
//! [`crate::publish::SENTINEL`]).
//!
//! ```yaml
//! redis:
//!   host: cache.internal
//!   port: 6380
//!   db: 2
//! default_input: fixtures/events.json
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default config file name, looked up relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "publisher-config.yaml";

/// Errors raised while reading `publisher-config.yaml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The config file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`PublisherConfig`].
    #[error("invalid publisher config: {source}")]
    Yaml {
        /// The underlying YAML error.
        #[from]
        source: serde_yml::Error,
    },
}

/// Top-level publisher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublisherConfig {
    /// Where the list lives.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Input file used when no path is given on the command line.
    #[serde(default = "default_input")]
    pub default_input: PathBuf,
}

impl PublisherConfig {
    /// Load configuration from `path` if it exists, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read, or
    /// [`ConfigError::Yaml`] if its content is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            redis: RedisConfig::default(),
            default_input: default_input(),
        }
    }
}

/// Connection target for the list store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedisConfig {
    /// Server host name.
    #[serde(default = "default_redis_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_redis_port")]
    pub port: u16,

    /// Logical database index.
    #[serde(default)]
    pub db: u8,
}

impl RedisConfig {
    /// The connection URL, `redis://host:port/db`.
    pub fn url(&self) -> String {
        format!("redis://{}", self.target())
    }

    /// `host:port/db`, safe to log.
    pub fn target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.db)
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: default_redis_host(),
            port: default_redis_port(),
            db: 0,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("fixtures/events.json")
}

fn default_redis_host() -> String {
    "localhost".to_owned()
}

const fn default_redis_port() -> u16 {
    6379
}
