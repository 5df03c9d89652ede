//! Authentication for the Strava API.
//!
//! The client only needs a bearer token. It is read from an
//! [`Authenticator`] whenever a request is built, so implementations that
//! refresh tokens behind the scenes work without rebuilding the client.
//!
//! ```no_run
//! use std::sync::Arc;
//! use strava_rs::auth::StaticAuthenticator;
//! use strava_rs::{ClientConfig, StravaClient};
//!
//! # fn example() -> strava_rs::Result<()> {
//! let auth = StaticAuthenticator::new(std::env::var("STRAVA_ACCESS_TOKEN").unwrap())?;
//! let client = StravaClient::with_authenticator(Arc::new(auth), ClientConfig::default())?;
//! # Ok(())
//! # }
//! ```

mod token;

pub use token::{Authenticator, StaticAuthenticator};
pub(crate) use token::bearer;
