//! Bearer credential guard.
//!
//! The token itself is issued and validated by an external service; this
//! module only holds the credential, decodes its claims, and decides whether
//! a request may proceed. On an invalid or absent credential the caller must
//! abandon the in-flight operation and redirect to login - there is no local
//! retry.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Claims carried by the bearer token.
///
/// Only the fields the guard needs are decoded; anything else in the payload
/// is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Whether the subject has admin access.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    /// Subject role label.
    #[serde(default)]
    pub role: Option<String>,
    /// Expiry as epoch seconds.
    pub exp: i64,
}

impl Claims {
    /// A credential whose expiry is at or before `now` is already invalid.
    #[must_use]
    pub const fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Decode the claims from a JWT-shaped bearer token.
///
/// Returns `None` for anything that is not three dot-separated segments with
/// a base64url JSON payload; a token the guard cannot read is treated the
/// same as a rejected one.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Explicitly scoped credential context injected into the gateway and the
/// view model - there is no ambient credential lookup.
#[derive(Debug, Clone)]
pub struct CredentialContext {
    token: Option<SecretString>,
}

impl CredentialContext {
    /// Create a context holding the given bearer token, if any.
    #[must_use]
    pub const fn new(token: Option<SecretString>) -> Self {
        Self { token }
    }

    /// The raw bearer token, when one is held.
    #[must_use]
    pub const fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// Decoded claims of the held token, when it can be read.
    #[must_use]
    pub fn claims(&self) -> Option<Claims> {
        self.token
            .as_ref()
            .and_then(|t| decode_claims(t.expose_secret()))
    }

    /// Whether a request may proceed: a token is held, its claims decode,
    /// and it has not expired.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(chrono::Utc::now().timestamp())
    }

    /// Time-injected variant of [`Self::is_valid`].
    #[must_use]
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.claims().is_some_and(|c| !c.is_expired_at(now))
    }
}
