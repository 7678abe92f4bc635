use std::io;

use thiserror::Error;

/// Library-wide error type for promptforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A required draft field is missing or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Unknown prompt category at the API boundary.
    #[error(
        "Invalid category '{0}': must be one of doubt, image_generation, learning_roadmap, video_generation, deep_research, idea_exploration"
    )]
    InvalidCategory(String),

    /// Unknown response style at the API boundary.
    #[error("Invalid style '{0}': must be one of concise, detailed, creative, formal, technical")]
    InvalidStyle(String),

    /// An execution request is already in flight for this draft.
    #[error("An execution is already in flight for this draft")]
    SubmissionInFlight,

    /// Save requested without a completed execution.
    #[error("Nothing to save: execute the prompt first")]
    NothingToSave,

    /// Network-level failure reaching the backend.
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend rejected the request.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Access token expired and the refresh attempt failed.
    #[error("Session expired. Run 'promptforge login' to sign in again.")]
    AuthExpired,

    /// No stored session for an authenticated command.
    #[error("Not logged in. Run 'promptforge login' first.")]
    NotLoggedIn,

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Clipboard write failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
