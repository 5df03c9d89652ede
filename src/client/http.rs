//! The client facade and its shared request plumbing.

use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::api::{
    ActivitiesService, AthletesService, ClubsService, EffortsService, GearService,
    RoutesService, SegmentsService, StatsService, StreamsService, UploadsService,
};
use crate::auth::{Authenticator, StaticAuthenticator};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::decode::{decode_list, decode_object};
use super::query::Query;
use super::rate_limit::RateLimitTracker;
use super::transport::Transport;

/// Environment variable holding the access token for [`StravaClient::from_env`].
pub const ACCESS_TOKEN_ENV: &str = "STRAVA_ACCESS_TOKEN";
/// Optional environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "STRAVA_API_BASE_URL";

/// The main client for interacting with the Strava API.
///
/// Operations are grouped into services returned by accessor methods. The
/// client is cheap to clone; clones share the connection pool, the access
/// token and the rate-limit tracker.
///
/// # Example
///
/// ```no_run
/// use strava_rs::StravaClient;
///
/// # async fn example() -> strava_rs::Result<()> {
/// let client = StravaClient::new("your-access-token")?;
///
/// let me = client.athletes().current().await?;
/// println!("Hello {}", me.summary.first_name);
///
/// let recent = client.activities().list(&Default::default(), 1, 30).await?;
/// for activity in recent {
///     println!("{} - {:.1} km", activity.name, activity.distance / 1000.0);
/// }
///
/// println!("usage: {}", client.rate_limits().usage());
/// # Ok(())
/// # }
/// ```
pub struct StravaClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) transport: Transport,
    pub(crate) auth: Arc<dyn Authenticator>,
    pub(crate) config: ClientConfig,
    base_url: String,
}

impl StravaClient {
    /// Create a client for the public API with a fixed access token.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the token is empty.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        let auth = StaticAuthenticator::new(access_token)?;
        Self::with_authenticator(Arc::new(auth), ClientConfig::default())
    }

    /// Create a client from `STRAVA_ACCESS_TOKEN` and, when set,
    /// `STRAVA_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(ACCESS_TOKEN_ENV)
            .map_err(|_| Error::Config(format!("{ACCESS_TOKEN_ENV} is not set")))?;

        let mut config = ClientConfig::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }

        Self::with_authenticator(Arc::new(StaticAuthenticator::new(token)?), config)
    }

    /// Create a client with a custom token source and configuration.
    pub fn with_authenticator(auth: Arc<dyn Authenticator>, config: ClientConfig) -> Result<Self> {
        Self::with_rate_limit_tracker(auth, config, RateLimitTracker::new())
    }

    /// Create a client that publishes rate-limit usage to an existing tracker.
    ///
    /// Useful when several clients share one application's quota.
    pub fn with_rate_limit_tracker(
        auth: Arc<dyn Authenticator>,
        config: ClientConfig,
        rate_limits: RateLimitTracker,
    ) -> Result<Self> {
        let base_url = config
            .parsed_base_url()?
            .as_str()
            .trim_end_matches('/')
            .to_string();

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport: Transport::new(http, rate_limits),
                auth,
                config,
                base_url,
            }),
        })
    }

    /// Get the activities service.
    pub fn activities(&self) -> ActivitiesService {
        ActivitiesService::new(self.inner.clone())
    }

    /// Get the athletes service.
    pub fn athletes(&self) -> AthletesService {
        AthletesService::new(self.inner.clone())
    }

    /// Get the clubs service.
    pub fn clubs(&self) -> ClubsService {
        ClubsService::new(self.inner.clone())
    }

    /// Get the gear service.
    pub fn gear(&self) -> GearService {
        GearService::new(self.inner.clone())
    }

    /// Get the routes service.
    pub fn routes(&self) -> RoutesService {
        RoutesService::new(self.inner.clone())
    }

    /// Get the segments service.
    pub fn segments(&self) -> SegmentsService {
        SegmentsService::new(self.inner.clone())
    }

    /// Get the segment efforts service.
    pub fn efforts(&self) -> EffortsService {
        EffortsService::new(self.inner.clone())
    }

    /// Get the streams service.
    pub fn streams(&self) -> StreamsService {
        StreamsService::new(self.inner.clone())
    }

    /// Get the uploads service.
    pub fn uploads(&self) -> UploadsService {
        UploadsService::new(self.inner.clone())
    }

    /// Get the athlete statistics service.
    pub fn stats(&self) -> StatsService {
        StatsService::new(self.inner.clone())
    }

    /// Usage and limits observed on the most recent responses.
    pub fn rate_limits(&self) -> &RateLimitTracker {
        self.inner.transport.rate_limits()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Absolute endpoint URL without credentials, for the upload path.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute URL for `path` with `query` and the access token appended.
    ///
    /// The token always comes last so that the caller's parameters render
    /// identically for identical inputs.
    pub(crate) fn endpoint(&self, path: &str, query: &Query) -> Result<String> {
        let token = self.auth.access_token();
        let query = query
            .clone()
            .push("access_token", token.expose_secret());
        Ok(format!("{}?{}", self.endpoint_url(path), query.encode()))
    }

    /// GET a list endpoint.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<Vec<T>> {
        let body = self.transport.get(&self.endpoint(path, query)?).await?;
        decode_list(&body)
    }

    /// GET a single-object endpoint; `what` names the resource in errors.
    pub(crate) async fn get_object<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        what: &str,
    ) -> Result<T> {
        let body = self.transport.get(&self.endpoint(path, query)?).await?;
        decode_object(&body, what)
    }

    /// POST with parameters in the query string, decoding the created object.
    pub(crate) async fn post_object<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        what: &str,
    ) -> Result<T> {
        let body = self.transport.post(&self.endpoint(path, query)?).await?;
        decode_object(&body, what)
    }

    /// POST whose response body is not needed.
    pub(crate) async fn post(&self, path: &str, query: &Query) -> Result<()> {
        self.transport.post(&self.endpoint(path, query)?).await?;
        Ok(())
    }

    /// PUT with parameters in the query string, decoding the updated object.
    pub(crate) async fn put_object<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        what: &str,
    ) -> Result<T> {
        let body = self.transport.put(&self.endpoint(path, query)?).await?;
        decode_object(&body, what)
    }

    /// DELETE a resource.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.transport
            .delete(&self.endpoint(path, &Query::new())?)
            .await?;
        Ok(())
    }
}

impl Clone for StravaClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for StravaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StravaClient")
            .field("config", &self.inner.config)
            .field("auth", &self.inner.auth)
            .finish()
    }
}
