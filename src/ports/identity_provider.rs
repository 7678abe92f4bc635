//! External identity provider port.

use crate::domain::AppError;

/// Port for acquiring an OAuth ID token from an external identity provider.
///
/// Injected by the caller; nothing in the client reaches for ambient
/// credentials. The token is exchanged for a backend session via
/// `POST /auth/google/`.
pub trait IdentityProvider {
    fn obtain_id_token(&self) -> Result<String, AppError>;
}
