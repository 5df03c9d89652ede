//! Access-token providers.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Supplies the bearer token stamped on every request.
///
/// How the token was obtained (browser OAuth flow, refresh exchange, a
/// token pasted from the Strava settings page) is up to the implementor.
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// The current access token.
    fn access_token(&self) -> SecretString;
}

/// An authenticator holding a fixed access token.
///
/// # Example
///
/// ```
/// use strava_rs::auth::{Authenticator, StaticAuthenticator};
/// use secrecy::ExposeSecret;
///
/// let auth = StaticAuthenticator::new("abc123").unwrap();
/// assert_eq!(auth.access_token().expose_secret(), "abc123");
/// ```
#[derive(Clone)]
pub struct StaticAuthenticator {
    token: SecretString,
}

impl StaticAuthenticator {
    /// Wrap an access token.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::InvalidInput(
                "the access token must not be empty".to_string(),
            ));
        }
        Ok(Self {
            token: SecretString::from(token),
        })
    }
}

impl Authenticator for StaticAuthenticator {
    fn access_token(&self) -> SecretString {
        self.token.clone()
    }
}

impl fmt::Debug for StaticAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticAuthenticator")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Render a token for an `Authorization` header.
pub(crate) fn bearer(token: &SecretString) -> String {
    format!("Bearer {}", token.expose_secret())
}
