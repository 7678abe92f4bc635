//! Execution exchange types.

use serde::{Deserialize, Serialize};

use super::{PromptCategory, ResponseStyle};

/// Body of `POST /prompts/execute/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecuteRequest {
    pub input_text: String,
    pub category: PromptCategory,
    pub response_style: ResponseStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The pair produced by one execution: the templated prompt the backend
/// built and the AI response it obtained. Immutable once produced; the next
/// execution replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub generated_prompt: String,
    #[serde(rename = "response")]
    pub ai_response: String,
}
