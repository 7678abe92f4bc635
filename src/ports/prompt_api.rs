//! Prompt API port.

use crate::domain::{
    AppError, DashboardStats, ExecuteRequest, GeneratedArtifact, PersistedPrompt, PromptPage,
    PromptPayload,
};

/// Port for the backend prompt endpoints.
pub trait PromptApi {
    /// `POST /prompts/execute/`: render the template server-side and run the
    /// AI model, without persisting anything.
    fn execute(&self, request: &ExecuteRequest) -> Result<GeneratedArtifact, AppError>;

    /// `POST /prompts/`.
    fn create(&self, payload: &PromptPayload) -> Result<PersistedPrompt, AppError>;

    /// `PATCH /prompts/{id}/`.
    fn update(&self, id: u64, payload: &PromptPayload) -> Result<PersistedPrompt, AppError>;

    /// `GET /prompts/{id}/`.
    fn fetch(&self, id: u64) -> Result<PersistedPrompt, AppError>;

    /// `GET /prompts/?page=N`.
    fn list(&self, page: u32) -> Result<PromptPage, AppError>;

    /// `DELETE /prompts/{id}/`.
    fn delete(&self, id: u64) -> Result<(), AppError>;

    /// `GET /prompts/dashboard-stats/`.
    fn dashboard_stats(&self) -> Result<DashboardStats, AppError>;
}
