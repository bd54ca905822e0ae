//! Application configuration

use crate::links::LinkBuilder;
use crate::utils::error::TubelinkError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the configured backend URL
pub const BACKEND_URL_ENV: &str = "TUBELINK_BACKEND_URL";

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Root of the download service, e.g. `https://dl.example.org`
    pub backend_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:4000".to_string(),
        }
    }
}

impl AppSettings {
    /// Default location of the settings file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tubelink").join("settings.json"))
    }

    /// Read settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, TubelinkError> {
        let json = std::fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&json)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings: an explicit file must exist, the default file is optional.
    /// The environment override is applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, TubelinkError> {
        Self::load_from(path, Self::default_path(), std::env::var(BACKEND_URL_ENV).ok())
    }

    fn load_from(
        path: Option<&Path>,
        default_path: Option<PathBuf>,
        env_url: Option<String>,
    ) -> Result<Self, TubelinkError> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_path {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        Ok(settings.with_env_override(env_url))
    }

    /// Replace the backend URL with the value of [`BACKEND_URL_ENV`], if set
    pub fn with_env_override(mut self, env_url: Option<String>) -> Self {
        if let Some(url) = env_url {
            info!("Using backend URL from {}", BACKEND_URL_ENV);
            self.backend_url = url;
        }
        self
    }

    /// Replace the backend URL with one given on the command line
    pub fn with_base_override(mut self, base: Option<String>) -> Self {
        if let Some(base) = base {
            debug!("Using backend URL from command line");
            self.backend_url = base;
        }
        self
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), TubelinkError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Build the link builder for the configured backend
    pub fn link_builder(&self) -> Result<LinkBuilder, TubelinkError> {
        Ok(LinkBuilder::new(self.backend_url.as_str())?)
    }

    /// Check that the backend URL is usable
    pub fn validate(&self) -> Result<(), TubelinkError> {
        if self.backend_url.trim().is_empty() {
            return Err(TubelinkError::ConfigError("backend_url must not be empty".to_string()));
        }
        self.link_builder().map(|_| ())
    }
}
