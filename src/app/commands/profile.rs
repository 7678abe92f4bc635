//! Profile inspection and updates.

use crate::domain::{
    AppError, Preferences, ProfilePatch, PromptCategory, ResponseStyle, UserProfile,
};
use crate::ports::{AuthApi, CredentialStore};

/// Requested profile changes, already parsed at the CLI boundary.
#[derive(Debug, Clone, Default)]
pub struct ProfileOptions {
    pub email: Option<String>,
    pub role: Option<String>,
    pub default_category: Option<PromptCategory>,
    pub default_style: Option<ResponseStyle>,
}

impl ProfileOptions {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.role.is_none()
            && self.default_category.is_none()
            && self.default_style.is_none()
    }
}

/// `GET /auth/profile/` and print the record.
pub fn show(client: &impl AuthApi) -> Result<UserProfile, AppError> {
    let user = client.profile()?;
    print_profile(&user);
    Ok(user)
}

/// Apply the requested changes and keep the cached session profile current.
///
/// The backend replaces the preferences object wholesale on PATCH, so the
/// patch starts from the cached preferences and overlays the changed fields.
pub fn update(
    client: &impl AuthApi,
    store: &impl CredentialStore,
    options: ProfileOptions,
) -> Result<UserProfile, AppError> {
    if options.is_empty() {
        return Err(AppError::config_error("Nothing to update"));
    }

    let cached_prefs = store
        .load()?
        .map(|session| session.user.preferences)
        .unwrap_or_default();

    let preferences = if options.default_category.is_some() || options.default_style.is_some() {
        Some(Preferences {
            default_category: options.default_category.or(cached_prefs.default_category),
            default_style: options.default_style.or(cached_prefs.default_style),
            theme: cached_prefs.theme,
        })
    } else {
        None
    };

    let patch = ProfilePatch { email: options.email, role: options.role, preferences };
    let user = client.update_profile(&patch)?;

    if let Some(mut session) = store.load()? {
        session.user = user.clone();
        store.save(&session)?;
    }

    println!("✅ Profile updated");
    print_profile(&user);
    Ok(user)
}

fn print_profile(user: &UserProfile) {
    println!("Username: {}", user.username);
    println!("Email:    {}", user.email);
    println!("Role:     {}", user.role);
    if let Some(category) = user.preferences.default_category {
        println!("Default category: {}", category.label());
    }
    if let Some(style) = user.preferences.default_style {
        println!("Default style:    {}", style.label());
    }
}
