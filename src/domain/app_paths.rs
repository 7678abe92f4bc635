//! Filesystem locations for client-side state.

use std::env;
use std::path::{Path, PathBuf};

use super::AppError;

/// Directory holding `config.toml` and `session.toml`.
pub const APP_DIR: &str = ".promptforge";

/// Resolved layout of the promptforge home directory.
#[derive(Debug, Clone)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    /// Resolve from `PROMPTFORGE_HOME`, falling back to `$HOME/.promptforge`.
    pub fn resolve() -> Result<Self, AppError> {
        if let Some(dir) = env::var_os("PROMPTFORGE_HOME") {
            return Ok(Self { root: PathBuf::from(dir) });
        }
        let home = env::var_os("HOME")
            .ok_or_else(|| AppError::config_error("HOME environment variable not set"))?;
        Ok(Self { root: PathBuf::from(home).join(APP_DIR) })
    }

    /// Use an explicit root directory.
    pub fn at<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn session_file(&self) -> PathBuf {
        self.root.join("session.toml")
    }
}
