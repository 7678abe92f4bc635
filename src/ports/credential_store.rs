//! Credential persistence port.

use crate::domain::{AppError, AuthSession};

/// Port for persisting the signed-in session between invocations.
pub trait CredentialStore {
    /// Load the stored session, if any.
    fn load(&self) -> Result<Option<AuthSession>, AppError>;

    /// Persist the session, replacing any previous one.
    fn save(&self, session: &AuthSession) -> Result<(), AppError>;

    /// Remove the stored session. Removing an absent session is not an error.
    fn clear(&self) -> Result<(), AppError>;
}
