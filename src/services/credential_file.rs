//! Filesystem-backed credential store.

use std::fs;

use crate::domain::{AppError, AppPaths, AuthSession};
use crate::ports::CredentialStore;

/// Stores the session as TOML under the promptforge home directory.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    paths: AppPaths,
}

impl FileCredentialStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    /// Store rooted at the resolved promptforge home.
    pub fn resolve() -> Result<Self, AppError> {
        Ok(Self::new(AppPaths::resolve()?))
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<AuthSession>, AppError> {
        let path = self.paths.session_file();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(toml::from_str(&content)?))
    }

    fn save(&self, session: &AuthSession) -> Result<(), AppError> {
        fs::create_dir_all(self.paths.root())?;
        let content = toml::to_string_pretty(session)?;
        fs::write(self.paths.session_file(), content)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let path = self.paths.session_file();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::domain::UserProfile;

    use super::*;

    fn sample_session() -> AuthSession {
        AuthSession {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
            user: UserProfile {
                id: 1,
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                role: "student".to_string(),
                preferences: Default::default(),
                created_at: None,
            },
        }
    }

    #[test]
    fn save_load_clear_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::new(AppPaths::at(dir.path().join("state")));

        assert!(store.load().unwrap().is_none());

        store.save(&sample_session()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.access, "access-token");
        assert_eq!(loaded.user.username, "ada");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::new(AppPaths::at(dir.path()));
        assert!(store.clear().is_ok());
        assert!(store.clear().is_ok());
    }

    #[test]
    fn malformed_session_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join("session.toml"), "not = [valid").unwrap();

        let store = FileCredentialStore::new(AppPaths::at(dir.path()));
        assert!(matches!(store.load(), Err(AppError::TomlParse(_))));
    }
}
