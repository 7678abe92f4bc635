//! HTTP adapter for the promptforge backend API, using reqwest.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    ApiConfig, AppError, AuthSession, DashboardStats, ExecuteRequest, GeneratedArtifact,
    PersistedPrompt, Preferences, ProfilePatch, PromptPage, PromptPayload, UserProfile,
};
use crate::ports::{AuthApi, LoginRequest, PromptApi, RegisterRequest};

/// HTTP client for the promptforge backend.
///
/// The session is handed to the constructor and owned here; the only
/// mutation is the access-token replacement performed by the single
/// 401-refresh path.
pub struct HttpApiClient {
    base_url: Url,
    client: Client,
    session: RefCell<Option<AuthSession>>,
    refreshed: Cell<bool>,
}

impl std::fmt::Debug for HttpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpApiClient")
            .field("base_url", &self.base_url)
            .field("session", &"[REDACTED]")
            .finish()
    }
}

impl HttpApiClient {
    /// Create a client carrying an existing session.
    pub fn new(config: &ApiConfig, session: AuthSession) -> Result<Self, AppError> {
        Self::build(config, Some(session))
    }

    /// Create a client with no session, for login and registration.
    pub fn anonymous(config: &ApiConfig) -> Result<Self, AppError> {
        Self::build(config, None)
    }

    fn build(config: &ApiConfig, session: Option<AuthSession>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.resolved_base_url()?,
            client,
            session: RefCell::new(session),
            refreshed: Cell::new(false),
        })
    }

    /// Snapshot of the current session. Tokens may differ from the ones the
    /// client was constructed with if a refresh happened.
    pub fn session(&self) -> Option<AuthSession> {
        self.session.borrow().clone()
    }

    /// Whether the access token was replaced via refresh during this
    /// client's lifetime. Callers use this to re-persist the session.
    pub fn was_refreshed(&self) -> bool {
        self.refreshed.get()
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::config_error(format!("Invalid endpoint '{path}': {e}")))
    }

    fn access_token(&self) -> Result<String, AppError> {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.access.clone())
            .ok_or(AppError::NotLoggedIn)
    }

    /// Send an authenticated request.
    ///
    /// On 401 the stored refresh token is exchanged exactly once and the
    /// original request retried exactly once with the new access token. A
    /// second 401, or any refresh failure, is `AuthExpired`.
    fn send_authed(
        &self,
        build: impl Fn(&Client) -> RequestBuilder,
    ) -> Result<Response, AppError> {
        let token = self.access_token()?;
        let response = build(&self.client)
            .bearer_auth(&token)
            .send()
            .map_err(transport_error)?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return into_api_result(response);
        }

        let new_token = self.refresh_access_token()?;
        let retried = build(&self.client)
            .bearer_auth(&new_token)
            .send()
            .map_err(transport_error)?;

        if retried.status() == StatusCode::UNAUTHORIZED {
            return Err(AppError::AuthExpired);
        }
        into_api_result(retried)
    }

    fn refresh_access_token(&self) -> Result<String, AppError> {
        let refresh = self
            .session
            .borrow()
            .as_ref()
            .map(|s| s.refresh.clone())
            .ok_or(AppError::AuthExpired)?;

        debug!("access token rejected; attempting refresh");
        let url = self.endpoint("auth/token/refresh/")?;
        let response = self
            .client
            .post(url)
            .json(&RefreshBody { refresh: &refresh })
            .send()
            .map_err(|_| AppError::AuthExpired)?;

        if !response.status().is_success() {
            return Err(AppError::AuthExpired);
        }
        let tokens: RefreshResponse = response.json().map_err(|_| AppError::AuthExpired)?;

        if let Some(session) = self.session.borrow_mut().as_mut() {
            session.access = tokens.access.clone();
        }
        self.refreshed.set(true);
        Ok(tokens.access)
    }

    fn post_anonymous<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<AuthSession, AppError> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(transport_error)?;
        let session: AuthSession = decode(into_api_result(response)?)?;
        *self.session.borrow_mut() = Some(session.clone());
        Ok(session)
    }
}

fn transport_error(err: reqwest::Error) -> AppError {
    AppError::Transport(err.to_string())
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    response
        .json()
        .map_err(|e| AppError::Transport(format!("Failed to parse response: {e}")))
}

/// Map non-2xx responses to `AppError::Api`, extracting the most useful
/// message the backend offers.
fn into_api_result(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .ok()
        .and_then(|body| extract_error_message(&body))
        .unwrap_or_else(|| "An unexpected error occurred".to_string());
    Err(AppError::Api { status: status.as_u16(), message })
}

/// Django error bodies come in several shapes: `detail`, `error`, `message`,
/// `non_field_errors`, or a per-field map.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "error", "message"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }
    if let Some(first) = value
        .get("non_field_errors")
        .and_then(|v| v.get(0))
        .and_then(|v| v.as_str())
    {
        return Some(first.to_string());
    }
    if value.is_object() {
        return Some("Validation errors occurred".to_string());
    }
    None
}

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
    role: &'a str,
    preferences: &'a Preferences,
}

#[derive(Serialize)]
struct GoogleBody<'a> {
    id_token: &'a str,
}

#[derive(Serialize)]
struct RefreshBody<'a> {
    refresh: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
}

impl AuthApi for HttpApiClient {
    fn login(&self, request: &LoginRequest) -> Result<AuthSession, AppError> {
        self.post_anonymous(
            "auth/login/",
            &LoginBody { username: &request.username, password: &request.password },
        )
    }

    fn register(&self, request: &RegisterRequest) -> Result<AuthSession, AppError> {
        self.post_anonymous(
            "auth/register/",
            &RegisterBody {
                username: &request.username,
                email: &request.email,
                password: &request.password,
                confirm_password: &request.confirm_password,
                role: &request.role,
                preferences: &request.preferences,
            },
        )
    }

    fn login_google(&self, id_token: &str) -> Result<AuthSession, AppError> {
        self.post_anonymous("auth/google/", &GoogleBody { id_token })
    }

    fn profile(&self) -> Result<UserProfile, AppError> {
        let url = self.endpoint("auth/profile/")?;
        decode(self.send_authed(|c| c.get(url.clone()))?)
    }

    fn update_profile(&self, patch: &ProfilePatch) -> Result<UserProfile, AppError> {
        let url = self.endpoint("auth/profile/")?;
        decode(self.send_authed(|c| c.patch(url.clone()).json(patch))?)
    }
}

impl PromptApi for HttpApiClient {
    fn execute(&self, request: &ExecuteRequest) -> Result<GeneratedArtifact, AppError> {
        let url = self.endpoint("prompts/execute/")?;
        decode(self.send_authed(|c| c.post(url.clone()).json(request))?)
    }

    fn create(&self, payload: &PromptPayload) -> Result<PersistedPrompt, AppError> {
        let url = self.endpoint("prompts/")?;
        decode(self.send_authed(|c| c.post(url.clone()).json(payload))?)
    }

    fn update(&self, id: u64, payload: &PromptPayload) -> Result<PersistedPrompt, AppError> {
        let url = self.endpoint(&format!("prompts/{id}/"))?;
        decode(self.send_authed(|c| c.patch(url.clone()).json(payload))?)
    }

    fn fetch(&self, id: u64) -> Result<PersistedPrompt, AppError> {
        let url = self.endpoint(&format!("prompts/{id}/"))?;
        decode(self.send_authed(|c| c.get(url.clone()))?)
    }

    fn list(&self, page: u32) -> Result<PromptPage, AppError> {
        let mut url = self.endpoint("prompts/")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        decode(self.send_authed(|c| c.get(url.clone()))?)
    }

    fn delete(&self, id: u64) -> Result<(), AppError> {
        let url = self.endpoint(&format!("prompts/{id}/"))?;
        self.send_authed(|c| c.delete(url.clone()))?;
        Ok(())
    }

    fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        let url = self.endpoint("prompts/dashboard-stats/")?;
        decode(self.send_authed(|c| c.get(url.clone()))?)
    }
}
