//! Configuration management for haloctl

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default Halo API host used when nothing is configured.
pub const DEFAULT_API_HOST: &str = "https://api.usehalo.com";

/// File name of the persisted session, stored next to the config file.
const SESSION_FILE: &str = "session.json";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Halo API host override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".haloctl").join("config.yaml"))
    }

    /// Resolve the config file path, honoring an override
    pub fn resolve_path(path_override: Option<&str>) -> Result<PathBuf> {
        match path_override {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load_at(path_override: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path_override)?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to the resolved path
    pub fn save_at(&self, path_override: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path_override)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Path of the session file, kept next to the config file
    pub fn session_path(path_override: Option<&str>) -> Result<PathBuf> {
        let config_path = Self::resolve_path(path_override)?;
        let dir = config_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(dir.join(SESSION_FILE))
    }

    /// Resolve the API base URL once at startup.
    ///
    /// Precedence: CLI flag/env override > config file > built-in default.
    /// The resolved value is immutable for the rest of the process.
    pub fn resolve_api_host(&self, host_override: Option<&str>) -> String {
        host_override
            .map(str::to_string)
            .or_else(|| self.api_host.clone())
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
    }
}
