//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ORDERDESK_API_URL` - Base URL of the order backend
//!   (e.g. `https://api.example.com`)
//!
//! ## Optional
//! - `ORDERDESK_API_TOKEN` - Bearer credential for admin requests. When
//!   absent the surface starts unauthenticated and redirects to login.
//! - `RUST_LOG` - Tracing filter (default: `orderdesk_admin=info`)

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
///
/// Implements `Debug` manually to redact the bearer credential.
#[derive(Clone)]
pub struct AdminConfig {
    /// Base URL of the order backend, without a trailing slash.
    pub api_url: String,
    /// Bearer credential for admin requests (optional; absence means the
    /// surface starts unauthenticated).
    pub api_token: Option<SecretString>,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("api_url", &self.api_url)
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = normalize_base_url(&get_required_env("ORDERDESK_API_URL")?)?;
        let api_token = get_optional_env("ORDERDESK_API_TOKEN").map(SecretString::from);

        Ok(Self { api_url, api_token })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Strip any trailing slash so endpoint paths join predictably.
fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            "ORDERDESK_API_URL".to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
