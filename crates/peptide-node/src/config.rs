//! Node configuration.
//!
//! Values are layered, lowest precedence first: built-in defaults, an
//! optional config file, environment variables (`HOST`, `PORT`,
//! `DATABASE_URL`, `DATABASE_NAME`, `LOG_LEVEL`, `LOG_FORMAT`), then
//! [`ConfigOverrides`] from the command line.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Configuration for the catalog node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Document store connection string.
    #[serde(default)]
    pub database_url: Option<String>,
    /// Database name used when the connection string does not name one.
    #[serde(default = "default_database_name")]
    pub database_name: String,
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log format (`pretty` or `json`).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_name() -> String {
    "peptides".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            database_name: default_database_name(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

/// Explicit overrides applied on top of file and environment values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Host to bind to.
    pub host: Option<String>,
    /// Port to bind to.
    pub port: Option<u16>,
    /// Document store connection string.
    pub database_url: Option<String>,
    /// Log level.
    pub log_level: Option<String>,
    /// Log format.
    pub log_format: Option<String>,
}

impl NodeConfig {
    /// Loads configuration from an optional file and the process environment.
    ///
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::build(path, None)
    }

    /// Loads configuration from an optional file and an explicit environment.
    pub fn load_with_env(
        path: Option<&Path>,
        env: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        Self::build(path, Some(env))
    }

    fn build(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let mut environment = Environment::default();
        if let Some(env) = env {
            environment = environment.source(Some(env.into_iter().collect()));
        }

        builder.add_source(environment).build()?.try_deserialize()
    }

    /// Applies overrides; unset fields keep their loaded values.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(url) = overrides.database_url {
            self.database_url = Some(url);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(format) = overrides.log_format {
            self.log_format = format;
        }
    }

    /// Returns the connection string, treating an empty value as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Returns true when a connection string is set.
    pub fn database_url_set(&self) -> bool {
        self.database_url().is_some()
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
