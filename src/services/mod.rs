mod clipboard_arboard;
mod credential_file;
mod http_api;
mod identity_prompt;
mod workflow;

pub use clipboard_arboard::ArboardClipboardWriter;
pub use credential_file::FileCredentialStore;
pub use http_api::HttpApiClient;
pub use identity_prompt::{PastedTokenProvider, StaticTokenProvider};
pub use workflow::{ExecutionState, ExecutionWorkflow, SubmissionTicket};
