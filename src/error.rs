//! Error types for the Strava API client.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! side distinguishes argument errors (raised before any I/O), transport
//! failures, non-success HTTP statuses and decode failures.

use thiserror::Error;

use crate::client::{Limit, Usage};

/// A specialized `Result` type for Strava operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Strava API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The request could not be sent or the response could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON for the requested shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with a non-success status
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body, if any
        message: String,
        /// Raw response body for debugging
        body: String,
    },

    /// The access token was rejected (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// A single-object endpoint answered with a success status and an empty body
    #[error("No content: {0}")]
    NoContent(String),

    /// The API refused the request because a rate limit was exceeded (429)
    #[error("Rate limited: usage={usage}, limit={limit}")]
    RateLimited {
        /// Usage reported with the refusal
        usage: Usage,
        /// Limits reported with the refusal
        limit: Limit,
    },

    /// Invalid input provided to a function; raised before any I/O
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Reading an upload file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::Unauthorized(_)
            | Error::NotFound(_)
            | Error::NoContent(_)
            | Error::InvalidInput(_)
            | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the requested object does not exist, either because
    /// the API answered 404 or because it returned no content.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::NoContent(_))
    }

    /// The HTTP status associated with this error, if there is one.
    ///
    /// [`Error::NoContent`] came with a success status and reports `None`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Unauthorized(_) => Some(401),
            Error::NotFound(_) => Some(404),
            Error::RateLimited { .. } => Some(429),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from a non-success response body.
    pub(crate) fn from_api_response(status: u16, body: String) -> Self {
        Error::Api {
            status,
            message: message_from_body(&body),
            body,
        }
    }
}

/// Extract a readable message from a Strava error body.
///
/// Strava error bodies look like
/// `{"message": "Bad Request", "errors": [{"resource": ..., "field": ..., "code": ...}]}`.
pub(crate) fn message_from_body(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str())
        .unwrap_or("Unknown API error")
        .to_string();

    let details: Vec<String> = parsed
        .as_ref()
        .and_then(|v| v.get("errors"))
        .and_then(|e| e.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| {
                    let field = e.get("field").and_then(|f| f.as_str())?;
                    let code = e.get("code").and_then(|c| c.as_str()).unwrap_or("invalid");
                    Some(format!("{field}: {code}"))
                })
                .collect()
        })
        .unwrap_or_default();

    if details.is_empty() {
        message
    } else {
        format!("{message} ({})", details.join(", "))
    }
}
