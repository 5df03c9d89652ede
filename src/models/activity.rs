//! Activity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::athlete::{AthleteMeta, AthleteSummary};
use super::enums::{ActivityType, ResourceState};
use super::gear::GearSummary;
use super::primitives::{ActivityId, Coordinate, GearId, UploadId, null_as_default};
use super::segment::SegmentEffort;

/// Identifier-only activity representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityMeta {
    /// Activity id
    #[serde(deserialize_with = "null_as_default")]
    pub id: ActivityId,
    /// Level of detail in this payload
    #[serde(deserialize_with = "null_as_default")]
    pub resource_state: ResourceState,
}

/// Polyline map of an activity, segment or route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Map {
    /// Map id
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Full-resolution encoded polyline (detailed payloads only)
    pub polyline: Option<String>,
    /// Simplified encoded polyline
    pub summary_polyline: Option<String>,
}

/// Activity as returned by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivitySummary {
    /// Id and resource state
    #[serde(flatten)]
    pub meta: ActivityMeta,
    /// Identifier supplied with the upload, if any
    pub external_id: Option<String>,
    /// Upload this activity came from
    pub upload_id: Option<UploadId>,
    /// Owner
    #[serde(deserialize_with = "null_as_default")]
    pub athlete: AthleteMeta,
    /// Title
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Distance in meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Moving time in seconds
    #[serde(deserialize_with = "null_as_default")]
    pub moving_time: u64,
    /// Elapsed time in seconds
    #[serde(deserialize_with = "null_as_default")]
    pub elapsed_time: u64,
    /// Elevation gain in meters
    #[serde(deserialize_with = "null_as_default")]
    pub total_elevation_gain: f64,
    /// Highest elevation in meters
    pub elev_high: Option<f64>,
    /// Lowest elevation in meters
    pub elev_low: Option<f64>,
    /// Sport
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub activity_type: ActivityType,
    /// Start time
    pub start_date: Option<DateTime<Utc>>,
    /// Start time in the athlete's local time zone, written with a `Z` suffix
    pub start_date_local: Option<DateTime<Utc>>,
    /// Time zone description, e.g. `(GMT-08:00) America/Los_Angeles`
    pub timezone: Option<String>,
    /// `[lat, lng]` of the start point
    #[serde(deserialize_with = "null_as_default")]
    pub start_latlng: Vec<f64>,
    /// `[lat, lng]` of the end point
    #[serde(deserialize_with = "null_as_default")]
    pub end_latlng: Vec<f64>,
    /// Number of achievements
    #[serde(deserialize_with = "null_as_default")]
    pub achievement_count: u32,
    /// Number of kudos
    #[serde(deserialize_with = "null_as_default")]
    pub kudos_count: u32,
    /// Number of comments
    #[serde(deserialize_with = "null_as_default")]
    pub comment_count: u32,
    /// Number of athletes in the group
    #[serde(deserialize_with = "null_as_default")]
    pub athlete_count: u32,
    /// Number of Instagram photos
    #[serde(deserialize_with = "null_as_default")]
    pub photo_count: u32,
    /// Number of photos of any source
    #[serde(deserialize_with = "null_as_default")]
    pub total_photo_count: u32,
    /// Route map
    #[serde(deserialize_with = "null_as_default")]
    pub map: Map,
    /// Recorded on a trainer
    #[serde(deserialize_with = "null_as_default")]
    pub trainer: bool,
    /// Flagged as a commute
    #[serde(deserialize_with = "null_as_default")]
    pub commute: bool,
    /// Manually entered
    #[serde(deserialize_with = "null_as_default")]
    pub manual: bool,
    /// Only visible to the owner
    #[serde(deserialize_with = "null_as_default")]
    pub private: bool,
    /// Flagged by other athletes
    #[serde(deserialize_with = "null_as_default")]
    pub flagged: bool,
    /// Gear used
    pub gear_id: Option<GearId>,
    /// Average speed in meters per second
    #[serde(deserialize_with = "null_as_default")]
    pub average_speed: f64,
    /// Max speed in meters per second
    #[serde(deserialize_with = "null_as_default")]
    pub max_speed: f64,
    /// Average cadence
    pub average_cadence: Option<f64>,
    /// Average power in watts
    pub average_watts: Option<f64>,
    /// Normalized power in watts
    pub weighted_average_watts: Option<f64>,
    /// Work in kilojoules
    pub kilojoules: Option<f64>,
    /// Power comes from a power meter rather than an estimate
    #[serde(deserialize_with = "null_as_default")]
    pub device_watts: bool,
    /// Heart rate data was recorded
    #[serde(deserialize_with = "null_as_default")]
    pub has_heartrate: bool,
    /// Average heart rate
    pub average_heartrate: Option<f64>,
    /// Max heart rate
    pub max_heartrate: Option<f64>,
    /// Number of personal records
    #[serde(deserialize_with = "null_as_default")]
    pub pr_count: u32,
    /// The authenticated athlete gave kudos
    #[serde(deserialize_with = "null_as_default")]
    pub has_kudoed: bool,
    /// Workout type code (race, long run, ...)
    pub workout_type: Option<u32>,
}

impl ActivitySummary {
    /// Start point, when the activity has a GPS track.
    pub fn start_coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_latlng(&self.start_latlng)
    }

    /// End point, when the activity has a GPS track.
    pub fn end_coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_latlng(&self.end_latlng)
    }
}

/// Activity with every field, as returned by `GET /activities/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    /// Listing-level fields
    #[serde(flatten)]
    pub summary: ActivitySummary,
    /// Free text description
    pub description: Option<String>,
    /// Kilocalories burned
    #[serde(deserialize_with = "null_as_default")]
    pub calories: f64,
    /// Name of the recording device
    pub device_name: Option<String>,
    /// Token used to embed the activity on a web page
    pub embed_token: Option<String>,
    /// Gear used
    pub gear: Option<GearSummary>,
    /// Segment efforts; all of them when `include_all_efforts` was set
    #[serde(deserialize_with = "null_as_default")]
    pub segment_efforts: Vec<SegmentEffort>,
    /// Best efforts at standard distances (runs)
    #[serde(deserialize_with = "null_as_default")]
    pub best_efforts: Vec<SegmentEffort>,
    /// Laps
    #[serde(deserialize_with = "null_as_default")]
    pub laps: Vec<ActivityLap>,
}

/// Fields needed to create a manual activity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    /// Title
    pub name: String,
    /// Sport
    pub activity_type: ActivityType,
    /// Start time in the athlete's local time
    pub start_date_local: DateTime<Utc>,
    /// Elapsed time in seconds
    pub elapsed_time: u64,
    /// Free text description
    pub description: Option<String>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Recorded on a trainer
    pub trainer: bool,
    /// Flagged as a commute
    pub commute: bool,
}

impl NewActivity {
    /// Describe a manual activity with the required fields.
    pub fn new(
        name: impl Into<String>,
        activity_type: ActivityType,
        start_date_local: DateTime<Utc>,
        elapsed_time: u64,
    ) -> Self {
        Self {
            name: name.into(),
            activity_type,
            start_date_local,
            elapsed_time,
            description: None,
            distance: None,
            trainer: false,
            commute: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the distance in meters.
    pub fn with_distance(mut self, meters: f64) -> Self {
        self.distance = Some(meters);
        self
    }

    /// Mark as recorded on a trainer.
    pub fn with_trainer(mut self, trainer: bool) -> Self {
        self.trainer = trainer;
        self
    }

    /// Mark as a commute.
    pub fn with_commute(mut self, commute: bool) -> Self {
        self.commute = commute;
        self
    }
}

/// A comment on an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// Comment id
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Activity commented on
    #[serde(deserialize_with = "null_as_default")]
    pub activity_id: ActivityId,
    /// Comment text
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    /// Author
    #[serde(deserialize_with = "null_as_default")]
    pub athlete: AthleteSummary,
    /// When the comment was posted
    pub created_at: Option<DateTime<Utc>>,
}

/// Time spent in one zone bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionBucket {
    /// Lower bound
    #[serde(deserialize_with = "null_as_default")]
    pub min: f64,
    /// Upper bound
    #[serde(deserialize_with = "null_as_default")]
    pub max: f64,
    /// Seconds spent in the bucket
    #[serde(deserialize_with = "null_as_default")]
    pub time: f64,
}

/// Heart rate or power zone distribution of an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityZone {
    /// `heartrate` or `power`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub zone_type: String,
    /// Effort score
    pub score: Option<i64>,
    /// Buckets in ascending order
    #[serde(deserialize_with = "null_as_default")]
    pub distribution_buckets: Vec<DistributionBucket>,
    /// Measured by a sensor
    #[serde(deserialize_with = "null_as_default")]
    pub sensor_based: bool,
    /// Points
    pub points: Option<i64>,
    /// The athlete configured custom zones
    #[serde(deserialize_with = "null_as_default")]
    pub custom_zones: bool,
    /// Max value
    pub max: Option<i64>,
}

/// A lap of an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityLap {
    /// Lap id
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Level of detail in this payload
    #[serde(deserialize_with = "null_as_default")]
    pub resource_state: ResourceState,
    /// Lap name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Activity the lap belongs to
    #[serde(deserialize_with = "null_as_default")]
    pub activity: ActivityMeta,
    /// Athlete who recorded the lap
    #[serde(deserialize_with = "null_as_default")]
    pub athlete: AthleteMeta,
    /// Elapsed time in seconds
    #[serde(deserialize_with = "null_as_default")]
    pub elapsed_time: u64,
    /// Moving time in seconds
    #[serde(deserialize_with = "null_as_default")]
    pub moving_time: u64,
    /// Start time
    pub start_date: Option<DateTime<Utc>>,
    /// Local start time
    pub start_date_local: Option<DateTime<Utc>>,
    /// Distance in meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    /// First stream index of the lap
    #[serde(deserialize_with = "null_as_default")]
    pub start_index: u64,
    /// Last stream index of the lap
    #[serde(deserialize_with = "null_as_default")]
    pub end_index: u64,
    /// Elevation gain in meters
    #[serde(deserialize_with = "null_as_default")]
    pub total_elevation_gain: f64,
    /// Average speed in meters per second
    #[serde(deserialize_with = "null_as_default")]
    pub average_speed: f64,
    /// Max speed in meters per second
    #[serde(deserialize_with = "null_as_default")]
    pub max_speed: f64,
    /// Average cadence
    pub average_cadence: Option<f64>,
    /// Average power in watts
    pub average_watts: Option<f64>,
    /// Position of the lap in the activity
    #[serde(deserialize_with = "null_as_default")]
    pub lap_index: u32,
    /// Split number
    #[serde(deserialize_with = "null_as_default")]
    pub split: u32,
}

/// A photo attached to an activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    /// Strava-hosted photo id
    pub unique_id: Option<String>,
    /// Instagram photo id
    pub id: Option<i64>,
    /// Activity the photo is attached to
    #[serde(deserialize_with = "null_as_default")]
    pub activity_id: ActivityId,
    /// Caption
    pub caption: Option<String>,
    /// 1 for Strava, 2 for Instagram
    #[serde(deserialize_with = "null_as_default")]
    pub source: u8,
    /// Image URLs keyed by size
    #[serde(deserialize_with = "null_as_default")]
    pub urls: HashMap<String, String>,
    /// When the photo was taken
    pub created_at: Option<DateTime<Utc>>,
    /// When the photo was uploaded
    pub uploaded_at: Option<DateTime<Utc>>,
}
