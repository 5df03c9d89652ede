//! # strava-rs
//!
//! An async Rust client for the Strava v3 REST API.
//!
//! The crate covers athletes, activities, clubs, gear, routes, segments,
//! segment efforts, leaderboards, streams and uploads. Underneath sits a
//! small request layer: an HTTP transport, a strict JSON decoder, query
//! composition, page-number pagination and tracking of the API's rate-limit
//! headers.
//!
//! ## Features
//!
//! - **Typed resources**: identifier newtypes, closed enums with explicit
//!   wire tokens, and Meta / Summary / Detailed shapes per resource
//! - **Pagination**: single pages, auto-paginating aggregates, and lazy
//!   [`PaginatedStream`]s
//! - **Leaderboards**: complete boards assembled from a probe plus pages
//! - **Rate limits**: the latest usage and limits from every response,
//!   observable through a [`RateLimitTracker`]
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use strava_rs::StravaClient;
//!
//! #[tokio::main]
//! async fn main() -> strava_rs::Result<()> {
//!     let client = StravaClient::new("your-access-token")?;
//!
//!     let me = client.athletes().current().await?;
//!     println!("Logged in as {}", me.summary.full_name());
//!
//!     let activities = client.activities().all().await?;
//!     println!("{} activities", activities.len());
//!
//!     let usage = client.rate_limits().usage();
//!     println!("used {} requests in the last 15 minutes", usage.short_term);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Leaderboards
//!
//! ```rust,no_run
//! use strava_rs::api::LeaderboardQuery;
//! use strava_rs::models::{AgeGroup, SegmentId};
//! use strava_rs::StravaClient;
//!
//! #[tokio::main]
//! async fn main() -> strava_rs::Result<()> {
//!     let client = StravaClient::from_env()?;
//!
//!     let query = LeaderboardQuery::default().age_group(AgeGroup::From35To44);
//!     let board = client.segments().leaderboard(SegmentId::new(229781), &query).await?;
//!     println!("{} of {} entries", board.entries.len(), board.entry_count);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{
    ActivityId, AthleteId, ClubId, EffortId, GearId, RouteId, SegmentId, UploadId,
};
pub use client::{
    ClientConfig, PaginatedStream, RateLimitStatus, RateLimitTracker, StravaClient,
};
pub use auth::{Authenticator, StaticAuthenticator};

/// Prelude module for convenient imports.
///
/// ```rust
/// use strava_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        ActivityId, AthleteId, ClubId, EffortId, GearId, RouteId, SegmentId, UploadId,
        Coordinate, Bounds,
        // Enums
        ActivityType, ResourceState, Gender, GenderFilter, AgeGroup, WeightClass, DateRange,
        ActivityParameter, AthleteParameter, ClimbCategory,
        // Activity models
        Activity, ActivitySummary, NewActivity, Comment, ActivityZone, ActivityLap, Photo,
        ProgressSummary,
        // Athlete models
        Athlete, AthleteSummary, Stats,
        // Segment models
        Segment, SegmentSummary, SegmentEffort, Leaderboard, LeaderboardEntry,
        // Other resources
        Club, ClubSummary, Gear, Route,
        // Streams and uploads
        StreamType, StreamTypes, StreamResolution, ActivityStream,
        DataFormat, UploadRequest, UploadStatus, UploadState,
    };
    pub use crate::api::{ActivitiesQuery, EffortsQuery, LeaderboardQuery};
    pub use crate::client::{ClientConfig, RateLimitStatus, RateLimitTracker, StravaClient};
    pub use crate::auth::{Authenticator, StaticAuthenticator};
}
