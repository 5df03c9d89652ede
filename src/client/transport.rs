//! The HTTP transport: one call per invocation, raw body text out.
//!
//! Callers hand over a fully formed URL (query string and access token
//! included). Every response, successful or not, feeds its rate-limit
//! headers into the [`RateLimitTracker`].

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response, StatusCode};
use url::Url;

use super::rate_limit::RateLimitTracker;
use crate::error::message_from_body;
use crate::{Error, Result};

/// Issues HTTP requests and records rate-limit usage.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    rate_limits: RateLimitTracker,
}

impl Transport {
    /// Create a transport on top of an existing `reqwest` client.
    pub fn new(http: reqwest::Client, rate_limits: RateLimitTracker) -> Self {
        Self { http, rate_limits }
    }

    /// The tracker updated by this transport.
    pub fn rate_limits(&self) -> &RateLimitTracker {
        &self.rate_limits
    }

    /// Send a GET request.
    pub async fn get(&self, url: &str) -> Result<String> {
        self.send(Method::GET, url).await
    }

    /// Send a POST request without a body.
    pub async fn post(&self, url: &str) -> Result<String> {
        self.send(Method::POST, url).await
    }

    /// Send a PUT request without a body.
    pub async fn put(&self, url: &str) -> Result<String> {
        self.send(Method::PUT, url).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, url: &str) -> Result<String> {
        self.send(Method::DELETE, url).await
    }

    /// Send a multipart POST authenticated with an `Authorization` header.
    ///
    /// This is the upload path; the URL carries no access token.
    pub async fn post_multipart(
        &self,
        url: &str,
        authorization: &str,
        form: reqwest::multipart::Form,
    ) -> Result<String> {
        let url = parse_url(url)?;
        tracing::debug!(method = "POST", path = url.path(), "sending multipart request");

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, authorization)
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Send a request and return the body text of a successful response.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `url` is empty, before any I/O
    /// - [`Error::UrlParse`] if `url` is not a valid absolute URL
    /// - [`Error::Http`] if the request could not be sent
    /// - [`Error::Api`], [`Error::Unauthorized`], [`Error::NotFound`] or
    ///   [`Error::RateLimited`] for non-success statuses
    pub async fn send(&self, method: Method, url: &str) -> Result<String> {
        let url = parse_url(url)?;
        // The query string carries the access token and stays out of the logs.
        tracing::debug!(method = %method, path = url.path(), "sending request");

        let response = self.http.request(method, url).send().await?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> Result<String> {
        self.rate_limits.record(response.headers());

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        tracing::warn!(status = status.as_u16(), "request failed");

        match status {
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized(message_from_body(&body))),
            StatusCode::NOT_FOUND => Err(Error::NotFound(message_from_body(&body))),
            StatusCode::TOO_MANY_REQUESTS => {
                let current = self.rate_limits.status();
                Err(Error::RateLimited {
                    usage: current.usage,
                    limit: current.limit,
                })
            }
            _ => Err(Error::from_api_response(status.as_u16(), body)),
        }
    }
}

fn parse_url(url: &str) -> Result<Url> {
    if url.trim().is_empty() {
        return Err(Error::InvalidInput("the request url must not be empty".to_string()));
    }
    Ok(Url::parse(url)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> Transport {
        Transport::new(reqwest::Client::new(), RateLimitTracker::new())
    }

    #[tokio::test]
    async fn test_empty_url_rejected_before_io() {
        let err = transport().get("").await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_relative_url_rejected() {
        let err = transport().delete("/activities/1").await.unwrap_err();
        assert!(matches!(err, Error::UrlParse(_)));
    }
}
