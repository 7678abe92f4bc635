//! Stored authentication session.

use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Tokens and cached profile returned by the auth endpoints.
///
/// This is both the wire shape of a successful login/register response and
/// the on-disk shape persisted by the credential store. The session is always
/// passed explicitly to the HTTP client; there is no ambient token state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer access token attached to authenticated requests.
    pub access: String,
    /// Refresh token used for the single retry on 401.
    pub refresh: String,
    /// Profile cached at sign-in time.
    pub user: UserProfile,
}
