//! HTTP client and request plumbing for the Strava API.
//!
//! [`StravaClient`] is the entry point. Underneath it sit the
//! [`Transport`] (one HTTP call per invocation, rate-limit headers recorded
//! on every response), the JSON [`decode`] helpers, [`Query`] composition
//! and page-number pagination.
//!
//! # Example
//!
//! ```no_run
//! use strava_rs::StravaClient;
//!
//! # async fn example() -> strava_rs::Result<()> {
//! let client = StravaClient::from_env()?;
//!
//! let clubs = client.clubs().list().await?;
//! println!("member of {} clubs", clubs.len());
//! # Ok(())
//! # }
//! ```

mod config;
pub mod decode;
mod http;
pub mod paginated;
pub mod query;
pub mod rate_limit;
mod transport;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use decode::{decode, decode_list, decode_object};
pub use http::{StravaClient, ACCESS_TOKEN_ENV, BASE_URL_ENV};
pub use paginated::{PaginatedStream, DEFAULT_PAGE_SIZE};
pub use query::{validate_page, Query, MAX_PER_PAGE};
pub use rate_limit::{Limit, RateLimitStatus, RateLimitTracker, Usage};
pub use transport::Transport;
pub(crate) use http::ClientInner;
