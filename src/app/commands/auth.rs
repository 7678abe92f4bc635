//! Sign-in, registration, and sign-out.

use crate::domain::{AppError, Preferences, UserProfile};
use crate::ports::{AuthApi, CredentialStore, IdentityProvider, LoginRequest, RegisterRequest};

/// Options for account registration.
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub preferences: Preferences,
}

/// Password sign-in. The returned session is persisted before the user is
/// reported back.
pub fn login(
    client: &impl AuthApi,
    store: &impl CredentialStore,
    username: &str,
    password: &str,
) -> Result<UserProfile, AppError> {
    let session = client.login(&LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })?;
    store.save(&session)?;
    Ok(session.user)
}

/// Google sign-in: exchange an ID token from the injected provider for a
/// backend session.
pub fn login_google(
    client: &impl AuthApi,
    store: &impl CredentialStore,
    provider: &impl IdentityProvider,
) -> Result<UserProfile, AppError> {
    let id_token = provider.obtain_id_token()?;
    let session = client.login_google(&id_token)?;
    store.save(&session)?;
    Ok(session.user)
}

/// Create an account and store the returned session.
pub fn register(
    client: &impl AuthApi,
    store: &impl CredentialStore,
    options: RegisterOptions,
) -> Result<UserProfile, AppError> {
    if options.password != options.confirm_password {
        return Err(AppError::config_error("Passwords do not match"));
    }
    let session = client.register(&RegisterRequest {
        username: options.username,
        email: options.email,
        password: options.password,
        confirm_password: options.confirm_password,
        role: options.role,
        preferences: options.preferences,
    })?;
    store.save(&session)?;
    Ok(session.user)
}

/// Drop the stored session.
pub fn logout(store: &impl CredentialStore) -> Result<(), AppError> {
    store.clear()
}
