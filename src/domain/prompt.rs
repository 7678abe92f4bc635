//! Persisted prompt records and library views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PromptCategory, ResponseStyle};

/// A saved prompt as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedPrompt {
    pub id: u64,
    pub title: String,
    pub input_text: String,
    pub category: PromptCategory,
    pub response_style: ResponseStyle,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub generated_prompt: String,
    #[serde(default)]
    pub ai_response: String,
    /// Owning user id.
    pub user: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PersistedPrompt {
    /// Whether this record carries an AI response from a past execution.
    pub fn has_response(&self) -> bool {
        !self.ai_response.is_empty()
    }
}

/// Body of `POST /prompts/` and `PATCH /prompts/{id}/`.
///
/// `generated_prompt` is server-owned: the backend re-renders it from the
/// same inputs, so the payload carries only the draft fields plus the AI
/// response from the saved artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptPayload {
    pub title: String,
    pub input_text: String,
    pub category: PromptCategory,
    pub response_style: ResponseStyle,
    pub description: String,
    pub ai_response: String,
}

/// One page of `GET /prompts/?page=N`.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PersistedPrompt>,
}

/// Response of `GET /prompts/dashboard-stats/`. The backend emits camelCase
/// keys on this endpoint only.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_prompts: u64,
    pub total_executions: u64,
    #[serde(default)]
    pub favorite_category: String,
    pub recent_activity: Vec<PersistedPrompt>,
}
