//! Server configuration, read from the environment (and `.env` via dotenvy).

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ActivityDirectory;
use crate::services::activities_service::CapacityPolicy;
use crate::services::catalog::{self, CatalogError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_path: Option<PathBuf>,
    pub capacity: CapacityPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            seed_path: None,
            capacity: CapacityPolicy::Advisory,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("PORT {:?}: {}", port, e)))?;
        }

        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(path) = lookup("ACTIVITIES_SEED_PATH").filter(|p| !p.trim().is_empty()) {
            config.seed_path = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup("ENFORCE_CAPACITY") {
            config.capacity = if parse_bool("ENFORCE_CAPACITY", &flag)? {
                CapacityPolicy::Enforced
            } else {
                CapacityPolicy::Advisory
            };
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Port tried when the configured one is taken.
    pub fn fallback_bind_addr(&self) -> Option<String> {
        self.port
            .checked_add(1)
            .map(|port| format!("{}:{}", self.host, port))
    }

    pub fn load_catalog(&self) -> Result<ActivityDirectory, CatalogError> {
        match &self.seed_path {
            Some(path) => catalog::load_catalog_file(path),
            None => Ok(catalog::default_catalog()),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{} must be a boolean, got {:?}",
            key, other
        ))),
    }
}
