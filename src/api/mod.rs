//! API service modules for Strava endpoints.
//!
//! Each service provides methods for one resource family. Services are
//! obtained from [`StravaClient`](crate::StravaClient) accessors and share
//! its connection, token and rate-limit tracker.

mod activities;
mod athletes;
mod clubs;
mod efforts;
mod gear;
mod routes;
mod segments;
mod stats;
mod streams;
mod uploads;

pub use activities::{ActivitiesQuery, ActivitiesService, FOLLOWING_PAGE_SIZE};
pub use athletes::AthletesService;
pub use clubs::ClubsService;
pub use efforts::{EffortsQuery, EffortsService};
pub use gear::GearService;
pub use routes::RoutesService;
pub use segments::{LeaderboardQuery, SegmentsService};
pub use stats::StatsService;
pub use streams::StreamsService;
pub use uploads::UploadsService;
