mod auth_api;
mod clipboard_writer;
mod credential_store;
mod identity_provider;
mod prompt_api;

pub use auth_api::{AuthApi, LoginRequest, RegisterRequest};
pub use clipboard_writer::ClipboardWriter;
pub use credential_store::CredentialStore;
pub use identity_provider::IdentityProvider;
pub use prompt_api::PromptApi;
