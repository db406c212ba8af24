use apiconn_core::{models::Target, ConnectorError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_ADDRESS: &str = "APICONN_ADDRESS";
pub const ENV_PORT: &str = "APICONN_PORT";
pub const ENV_PATH: &str = "APICONN_PATH";

/// Persistent configuration saved to disk
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Address, port and base path; missing keys fall back to `Target::default()`
    #[serde(flatten)]
    pub target: Target,
}

impl Config {
    /// Get the config file path (~/.config/apiconn/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("apiconn").join("config.json"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply environment overrides; empty values are ignored
    pub fn with_env<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.with_overrides(
            lookup(ENV_ADDRESS),
            lookup(ENV_PORT),
            lookup(ENV_PATH).filter(|p| !p.is_empty()),
        )
    }

    /// Replace fields with the given values when present and non-empty.
    ///
    /// `path` may be set to an empty string to select the root.
    pub fn with_overrides(
        mut self,
        address: Option<String>,
        port: Option<String>,
        path: Option<String>,
    ) -> Self {
        if let Some(address) = address.filter(|a| !a.is_empty()) {
            self.target.server_address = address;
        }
        if let Some(port) = port.filter(|p| !p.is_empty()) {
            self.target.server_port = port;
        }
        if let Some(path) = path {
            self.target.path = path;
        }
        self
    }

    pub fn into_target(self) -> Result<Target, ConnectorError> {
        if self.target.server_address.trim().is_empty() {
            return Err(ConnectorError::Config("server address is empty".to_string()));
        }
        if self.target.server_port.trim().is_empty() {
            return Err(ConnectorError::Config("server port is empty".to_string()));
        }
        Ok(self.target)
    }
}
