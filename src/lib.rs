//! promptforge: build, execute, and manage AI prompts against a promptforge backend.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::commands::{auth, build, profile, prompts, stats};
use domain::{ApiConfig, AppPaths, AuthSession};
use ports::{ClipboardWriter, CredentialStore, IdentityProvider};
use services::{ArboardClipboardWriter, FileCredentialStore, HttpApiClient};

pub use app::commands::auth::RegisterOptions;
pub use app::commands::build::{BuildOptions, BuildOutcome, CopyTarget};
pub use app::commands::profile::ProfileOptions;
pub use domain::AppError;

fn open_store() -> Result<FileCredentialStore, AppError> {
    FileCredentialStore::resolve()
}

fn load_config() -> Result<ApiConfig, AppError> {
    ApiConfig::load(&AppPaths::resolve()?)
}

fn authed_client(store: &FileCredentialStore) -> Result<(HttpApiClient, AuthSession), AppError> {
    let session = store.load()?.ok_or(AppError::NotLoggedIn)?;
    let client = HttpApiClient::new(&load_config()?, session.clone())?;
    Ok((client, session))
}

/// Reconcile credential state after an authenticated command: persist tokens
/// replaced by a refresh, drop credentials when the session expired.
fn finish<T>(
    store: &FileCredentialStore,
    client: &HttpApiClient,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match &result {
        Err(AppError::AuthExpired) => {
            let _ = store.clear();
        }
        Ok(_) => {
            if client.was_refreshed()
                && let Some(refreshed) = client.session()
            {
                // Merge the new tokens into the stored session so a cached
                // profile updated by the command itself is not clobbered.
                let mut session = store.load()?.unwrap_or_else(|| refreshed.clone());
                session.access = refreshed.access;
                session.refresh = refreshed.refresh;
                store.save(&session)?;
            }
        }
        Err(_) => {}
    }
    result
}

/// Sign in with username and password.
pub fn login(username: &str, password: &str) -> Result<(), AppError> {
    let store = open_store()?;
    let client = HttpApiClient::anonymous(&load_config()?)?;
    let user = auth::login(&client, &store, username, password)?;
    println!("✅ Signed in as {}", user.username);
    Ok(())
}

/// Sign in by exchanging a Google ID token from the given provider.
pub fn login_google(provider: &impl IdentityProvider) -> Result<(), AppError> {
    let store = open_store()?;
    let client = HttpApiClient::anonymous(&load_config()?)?;
    let user = auth::login_google(&client, &store, provider)?;
    println!("✅ Signed in as {}", user.username);
    Ok(())
}

/// Create an account and sign in.
pub fn register(options: RegisterOptions) -> Result<(), AppError> {
    let store = open_store()?;
    let client = HttpApiClient::anonymous(&load_config()?)?;
    let user = auth::register(&client, &store, options)?;
    println!("✅ Registered and signed in as {}", user.username);
    Ok(())
}

/// Remove the stored session.
pub fn logout() -> Result<(), AppError> {
    let store = open_store()?;
    auth::logout(&store)?;
    println!("✅ Signed out");
    Ok(())
}

/// Show the signed-in profile.
pub fn profile_show() -> Result<(), AppError> {
    let store = open_store()?;
    let (client, _) = authed_client(&store)?;
    let result = profile::show(&client).map(|_| ());
    finish(&store, &client, result)
}

/// Update the signed-in profile.
pub fn profile_update(options: ProfileOptions) -> Result<(), AppError> {
    let store = open_store()?;
    let (client, _) = authed_client(&store)?;
    let result = profile::update(&client, &store, options).map(|_| ());
    finish(&store, &client, result)
}

/// Run the prompt builder.
pub fn build(options: BuildOptions) -> Result<BuildOutcome, AppError> {
    let store = open_store()?;
    let (client, session) = authed_client(&store)?;

    let mut clipboard = if options.copy != CopyTarget::Nothing {
        match ArboardClipboardWriter::new() {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Warning: {err}");
                None
            }
        }
    } else {
        None
    };
    let clipboard_ref = clipboard.as_mut().map(|w| w as &mut dyn ClipboardWriter);

    let result = build::execute(&client, &session.user, clipboard_ref, options);
    finish(&store, &client, result)
}

/// List saved prompts, one page at a time.
pub fn list(page: u32) -> Result<(), AppError> {
    let store = open_store()?;
    let (client, _) = authed_client(&store)?;
    let result = prompts::list(&client, page).map(|_| ());
    finish(&store, &client, result)
}

/// Show one saved prompt in full.
pub fn show(id: u64) -> Result<(), AppError> {
    let store = open_store()?;
    let (client, _) = authed_client(&store)?;
    let result = prompts::show(&client, id).map(|_| ());
    finish(&store, &client, result)
}

/// Delete a saved prompt.
pub fn delete(id: u64) -> Result<(), AppError> {
    let store = open_store()?;
    let (client, _) = authed_client(&store)?;
    let result = prompts::delete(&client, id);
    finish(&store, &client, result)
}

/// Show dashboard statistics.
pub fn dashboard_stats() -> Result<(), AppError> {
    let store = open_store()?;
    let (client, _) = authed_client(&store)?;
    let result = stats::show(&client).map(|_| ());
    finish(&store, &client, result)
}
