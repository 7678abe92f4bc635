//! Client configuration loaded from the promptforge home.

use std::env;
use std::fs;

use serde::Deserialize;
use url::Url;

use super::{AppError, AppPaths};

/// Backend API settings loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Backend API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api/".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl ApiConfig {
    /// Load from `<home>/config.toml`, falling back to defaults when the file
    /// is absent.
    pub fn load(paths: &AppPaths) -> Result<Self, AppError> {
        let path = paths.config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Effective base URL, honoring the `PROMPTFORGE_API_URL` override. The
    /// result always ends with `/` so endpoint joins keep the path prefix.
    pub fn resolved_base_url(&self) -> Result<Url, AppError> {
        let mut raw = env::var("PROMPTFORGE_API_URL").unwrap_or_else(|_| self.base_url.clone());
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw)
            .map_err(|e| AppError::config_error(format!("Invalid API base URL '{raw}': {e}")))
    }
}
