//! Interactive identity provider.

use dialoguer::Password;

use crate::domain::AppError;
use crate::ports::IdentityProvider;

/// Accepts a Google ID token pasted by the operator.
///
/// The token itself is obtained out-of-band (for example via the provider's
/// OAuth playground); this adapter only carries it into the sign-in exchange.
#[derive(Debug, Default)]
pub struct PastedTokenProvider;

impl IdentityProvider for PastedTokenProvider {
    fn obtain_id_token(&self) -> Result<String, AppError> {
        let token = Password::new()
            .with_prompt("Paste the Google ID token")
            .interact()
            .map_err(|e| AppError::config_error(format!("Failed to read ID token: {e}")))?;

        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(AppError::MissingField("id_token"));
        }
        Ok(token)
    }
}

/// Carries a token supplied up front (e.g. via a CLI flag).
#[derive(Debug, Clone)]
pub struct StaticTokenProvider(pub String);

impl IdentityProvider for StaticTokenProvider {
    fn obtain_id_token(&self) -> Result<String, AppError> {
        let token = self.0.trim().to_string();
        if token.is_empty() {
            return Err(AppError::MissingField("id_token"));
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_provider_trims_token() {
        let provider = StaticTokenProvider("  tok-123  ".to_string());
        assert_eq!(provider.obtain_id_token().unwrap(), "tok-123");
    }

    #[test]
    fn static_provider_rejects_blank_token() {
        let provider = StaticTokenProvider("   ".to_string());
        assert!(matches!(provider.obtain_id_token(), Err(AppError::MissingField("id_token"))));
    }
}
