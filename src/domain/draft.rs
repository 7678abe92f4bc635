//! In-progress prompt draft state.

use super::{
    AppError, ExecuteRequest, GeneratedArtifact, PersistedPrompt, PromptCategory, PromptPayload,
    ResponseStyle,
};

/// Unsaved builder state for one prompt.
///
/// Created transiently per session and mutated by user edits; it becomes
/// durable only through [`PromptPayload`] after a successful execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptDraft {
    pub title: Option<String>,
    pub input_text: String,
    pub category: Option<PromptCategory>,
    pub style: Option<ResponseStyle>,
    pub description: Option<String>,
}

impl PromptDraft {
    /// Rebuild a draft from a persisted record (edit mode).
    pub fn from_persisted(prompt: &PersistedPrompt) -> Self {
        Self {
            title: Some(prompt.title.clone()),
            input_text: prompt.input_text.clone(),
            category: Some(prompt.category),
            style: Some(prompt.response_style),
            description: if prompt.description.is_empty() {
                None
            } else {
                Some(prompt.description.clone())
            },
        }
    }

    /// Check the execute preconditions, naming the first missing field.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.input_text.trim().is_empty() {
            return Err(AppError::MissingField("input_text"));
        }
        if self.category.is_none() {
            return Err(AppError::MissingField("category"));
        }
        if self.style.is_none() {
            return Err(AppError::MissingField("style"));
        }
        Ok(())
    }

    /// Effective context: a non-blank description, if any.
    pub fn context(&self) -> Option<&str> {
        self.description.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }

    /// Build the execute request body. Fails like [`Self::validate`] when a
    /// required field is absent.
    pub fn to_execute_request(&self) -> Result<ExecuteRequest, AppError> {
        self.validate()?;
        let category = self.category.ok_or(AppError::MissingField("category"))?;
        let style = self.style.ok_or(AppError::MissingField("style"))?;
        Ok(ExecuteRequest {
            input_text: self.input_text.trim().to_string(),
            category,
            response_style: style,
            description: self.context().map(str::to_string),
        })
    }

    /// Build the save payload from this draft and a completed artifact.
    pub fn to_payload(&self, artifact: &GeneratedArtifact) -> Result<PromptPayload, AppError> {
        self.validate()?;
        let category = self.category.ok_or(AppError::MissingField("category"))?;
        let style = self.style.ok_or(AppError::MissingField("style"))?;
        Ok(PromptPayload {
            title: self.derived_title(),
            input_text: self.input_text.trim().to_string(),
            category,
            response_style: style,
            description: self.context().unwrap_or_default().to_string(),
            ai_response: artifact.ai_response.clone(),
        })
    }

    /// Title to persist: the explicit title, or `"<Category Label> - <input
    /// prefix>"` derived the way the backend does for untitled prompts.
    pub fn derived_title(&self) -> String {
        if let Some(title) = &self.title
            && !title.trim().is_empty()
        {
            return title.trim().to_string();
        }
        let label = self.category.map(title_case_wire_name).unwrap_or_default();
        let prefix: String = self.input_text.trim().chars().take(50).collect();
        format!("{label} - {prefix}")
    }
}

/// `image_generation` -> `Image Generation`, matching the backend's derived
/// titles.
fn title_case_wire_name(category: PromptCategory) -> String {
    category
        .as_str()
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
