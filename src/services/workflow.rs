//! Execution workflow controller.
//!
//! Owns the draft/artifact lifecycle for one builder session: validates the
//! draft, tracks the single in-flight execution, and reconciles results with
//! the backend on save.

use log::debug;

use crate::domain::{AppError, GeneratedArtifact, PersistedPrompt, PromptDraft};
use crate::ports::PromptApi;

/// Lifecycle states for one draft session.
///
/// `Idle → Submitting → {Succeeded, Failed}`; the next submission or an
/// explicit reset returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Handle for an in-flight submission.
///
/// Completion is accepted only while the ticket's epoch matches the
/// workflow's, so a response that arrives after the session was reset or
/// rehydrated is dropped instead of clobbering newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    epoch: u64,
}

/// State machine driving prompt execution and persistence for one draft.
///
/// At most one submission can be in flight; a second attempt while
/// `Submitting` is rejected rather than queued, so results always apply in
/// request-issue order.
#[derive(Debug, Default)]
pub struct ExecutionWorkflow {
    draft: PromptDraft,
    state: ExecutionState,
    artifact: Option<GeneratedArtifact>,
    origin: Option<u64>,
    last_error: Option<String>,
    epoch: u64,
}

impl ExecutionWorkflow {
    /// Start a fresh session for the given draft.
    pub fn new(draft: PromptDraft) -> Self {
        Self { draft, ..Self::default() }
    }

    pub fn draft(&self) -> &PromptDraft {
        &self.draft
    }

    /// Mutable access for user edits between submissions.
    pub fn draft_mut(&mut self) -> &mut PromptDraft {
        &mut self.draft
    }

    pub fn state(&self) -> ExecutionState {
        self.state
    }

    /// Artifact from the most recent successful execution, if any.
    pub fn artifact(&self) -> Option<&GeneratedArtifact> {
        self.artifact.as_ref()
    }

    /// Message from the most recent failed execution, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether a save will update an existing record instead of creating one.
    pub fn is_editing(&self) -> bool {
        self.origin.is_some()
    }

    /// Reinitialize from a persisted prompt (edit mode).
    ///
    /// Pure hydration: an existing AI response is restored as the artifact
    /// without touching the execute endpoint. Outstanding tickets become
    /// stale.
    pub fn hydrate(&mut self, prompt: &PersistedPrompt) {
        self.draft = PromptDraft::from_persisted(prompt);
        self.origin = Some(prompt.id);
        self.artifact = prompt.has_response().then(|| GeneratedArtifact {
            generated_prompt: prompt.generated_prompt.clone(),
            ai_response: prompt.ai_response.clone(),
        });
        self.state = if self.artifact.is_some() {
            ExecutionState::Succeeded
        } else {
            ExecutionState::Idle
        };
        self.last_error = None;
        self.epoch += 1;
    }

    /// Fetch a persisted prompt and hydrate from it.
    pub fn load_for_edit(&mut self, client: &impl PromptApi, id: u64) -> Result<(), AppError> {
        let prompt = client.fetch(id)?;
        self.hydrate(&prompt);
        Ok(())
    }

    /// Validate preconditions and transition to `Submitting`.
    ///
    /// A validation failure leaves the state untouched and names the missing
    /// field; a submission already in flight is rejected outright.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, AppError> {
        if self.state == ExecutionState::Submitting {
            return Err(AppError::SubmissionInFlight);
        }
        self.draft.validate()?;
        self.state = ExecutionState::Submitting;
        self.epoch += 1;
        Ok(SubmissionTicket { epoch: self.epoch })
    }

    /// Apply a successful execution result.
    ///
    /// Returns `false` (and changes nothing) when the ticket is stale.
    pub fn complete(&mut self, ticket: SubmissionTicket, artifact: GeneratedArtifact) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.artifact = Some(artifact);
        self.last_error = None;
        self.state = ExecutionState::Succeeded;
        true
    }

    /// Record a failed execution.
    ///
    /// A previously succeeded artifact is kept; only the error message and
    /// state change. Returns `false` when the ticket is stale.
    pub fn fail(&mut self, ticket: SubmissionTicket, message: impl Into<String>) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.last_error = Some(message.into());
        self.state = ExecutionState::Failed;
        true
    }

    /// Return to `Idle`, invalidating any outstanding ticket.
    pub fn reset_to_idle(&mut self) {
        self.state = ExecutionState::Idle;
        self.epoch += 1;
    }

    fn accepts(&self, ticket: SubmissionTicket) -> bool {
        if ticket.epoch != self.epoch || self.state != ExecutionState::Submitting {
            debug!(
                "dropping stale execution result (ticket epoch {}, current {})",
                ticket.epoch, self.epoch
            );
            return false;
        }
        true
    }

    /// Run one full execution cycle against the backend.
    ///
    /// Issues no network call unless the draft passes validation.
    pub fn execute(&mut self, client: &impl PromptApi) -> Result<GeneratedArtifact, AppError> {
        let ticket = self.begin_submission()?;
        let request = self.draft.to_execute_request()?;
        match client.execute(&request) {
            Ok(artifact) => {
                self.complete(ticket, artifact.clone());
                Ok(artifact)
            }
            Err(err) => {
                self.fail(ticket, err.to_string());
                Err(err)
            }
        }
    }

    /// Persist the current draft and artifact.
    ///
    /// Requires a completed execution. Updates the originating record in
    /// edit mode, creates a new one otherwise. On failure local state is
    /// untouched so the save can be retried.
    pub fn save(&mut self, client: &impl PromptApi) -> Result<PersistedPrompt, AppError> {
        if self.state != ExecutionState::Succeeded {
            return Err(AppError::NothingToSave);
        }
        let artifact = self.artifact.as_ref().ok_or(AppError::NothingToSave)?;
        let payload = self.draft.to_payload(artifact)?;

        let saved = match self.origin {
            Some(id) => client.update(id, &payload)?,
            None => client.create(&payload)?,
        };
        // Subsequent saves in this session update the record just created.
        self.origin = Some(saved.id);
        Ok(saved)
    }
}
