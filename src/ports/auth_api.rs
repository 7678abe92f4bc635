//! Authentication API port.

use crate::domain::{AppError, AuthSession, Preferences, ProfilePatch, UserProfile};

/// Credentials for password sign-in.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for account registration.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub preferences: Preferences,
}

/// Port for the backend authentication endpoints.
pub trait AuthApi {
    /// `POST /auth/login/`.
    fn login(&self, request: &LoginRequest) -> Result<AuthSession, AppError>;

    /// `POST /auth/register/`.
    fn register(&self, request: &RegisterRequest) -> Result<AuthSession, AppError>;

    /// `POST /auth/google/` with an ID token obtained out-of-band.
    fn login_google(&self, id_token: &str) -> Result<AuthSession, AppError>;

    /// `GET /auth/profile/`.
    fn profile(&self) -> Result<UserProfile, AppError>;

    /// `PATCH /auth/profile/`.
    fn update_profile(&self, patch: &ProfilePatch) -> Result<UserProfile, AppError>;
}
