//! Data models for the Strava API.
//!
//! Models are organized by resource:
//!
//! - [`primitives`] - Identifier newtypes, coordinates and bounds
//! - [`enums`] - Activity types, resource states, leaderboard filters, update keys
//! - [`activity`] - Activities, comments, zones, laps, photos
//! - [`athlete`] - Athletes and statistics
//! - [`club`] - Clubs
//! - [`gear`] - Bikes and shoes
//! - [`route`] - Routes
//! - [`segment`] - Segments, efforts, leaderboards, explorer results
//! - [`stream`] - Stream types and samples
//! - [`upload`] - Upload metadata and status
//! - [`progress`] - Locally computed summaries
//!
//! Athletes, activities, segments and clubs come in up to three detail
//! levels. Each level embeds the one below it as a flattened field
//! (`summary.meta.id`), and which one you get depends on the endpoint.

pub mod primitives;
pub mod enums;
pub mod activity;
pub mod athlete;
pub mod club;
pub mod gear;
pub mod route;
pub mod segment;
pub mod stream;
pub mod upload;
pub mod progress;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use activity::*;
pub use athlete::*;
pub use club::*;
pub use gear::*;
pub use route::*;
pub use segment::*;
pub use stream::*;
pub use upload::*;
pub use progress::*;
