//! Segment, effort, leaderboard and explorer models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::activity::{ActivityMeta, Map};
use super::athlete::AthleteMeta;
use super::enums::{ClimbCategory, ResourceState};
use super::primitives::{ActivityId, AthleteId, EffortId, SegmentId, null_as_default};

/// Identifier-only segment representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentMeta {
    /// Segment id
    #[serde(deserialize_with = "null_as_default")]
    pub id: SegmentId,
    /// Level of detail in this payload
    #[serde(deserialize_with = "null_as_default")]
    pub resource_state: ResourceState,
}

/// Segment as returned by list endpoints and embedded in efforts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentSummary {
    /// Id and resource state
    #[serde(flatten)]
    pub meta: SegmentMeta,
    /// Name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// `Ride` or `Run`
    #[serde(deserialize_with = "null_as_default")]
    pub activity_type: String,
    /// Length in meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Average grade in percent
    #[serde(deserialize_with = "null_as_default")]
    pub average_grade: f64,
    /// Maximum grade in percent
    #[serde(deserialize_with = "null_as_default")]
    pub maximum_grade: f64,
    /// Highest elevation in meters
    #[serde(deserialize_with = "null_as_default")]
    pub elevation_high: f64,
    /// Lowest elevation in meters
    #[serde(deserialize_with = "null_as_default")]
    pub elevation_low: f64,
    /// `[lat, lng]` of the start
    #[serde(deserialize_with = "null_as_default")]
    pub start_latlng: Vec<f64>,
    /// `[lat, lng]` of the end
    #[serde(deserialize_with = "null_as_default")]
    pub end_latlng: Vec<f64>,
    /// Climb category code, 0 through 5
    #[serde(deserialize_with = "null_as_default")]
    pub climb_category: i32,
    /// City
    pub city: Option<String>,
    /// State or region
    pub state: Option<String>,
    /// Country
    pub country: Option<String>,
    /// Only visible to the creator
    #[serde(deserialize_with = "null_as_default")]
    pub private: bool,
    /// Flagged as hazardous
    #[serde(deserialize_with = "null_as_default")]
    pub hazardous: bool,
    /// Starred by the authenticated athlete
    #[serde(deserialize_with = "null_as_default")]
    pub starred: bool,
}

impl SegmentSummary {
    /// Typed climb category.
    pub fn climb_category(&self) -> Option<ClimbCategory> {
        ClimbCategory::from_code(self.climb_category)
    }
}

/// Segment with every field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    /// Listing-level fields
    #[serde(flatten)]
    pub summary: SegmentSummary,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Last update
    pub updated_at: Option<DateTime<Utc>>,
    /// Elevation gain in meters
    #[serde(deserialize_with = "null_as_default")]
    pub total_elevation_gain: f64,
    /// Segment map
    #[serde(deserialize_with = "null_as_default")]
    pub map: Map,
    /// Number of efforts
    #[serde(deserialize_with = "null_as_default")]
    pub effort_count: u32,
    /// Number of distinct athletes
    #[serde(deserialize_with = "null_as_default")]
    pub athlete_count: u32,
    /// Number of stars
    #[serde(deserialize_with = "null_as_default")]
    pub star_count: u32,
}

/// One attempt at a segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentEffort {
    /// Effort id
    #[serde(deserialize_with = "null_as_default")]
    pub id: EffortId,
    /// Level of detail in this payload
    #[serde(deserialize_with = "null_as_default")]
    pub resource_state: ResourceState,
    /// Segment name at the time of the effort
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Activity the effort belongs to
    #[serde(deserialize_with = "null_as_default")]
    pub activity: ActivityMeta,
    /// Athlete who made the effort
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
    /// First activity stream index
    #[serde(deserialize_with = "null_as_default")]
    pub start_index: u64,
    /// Last activity stream index
    #[serde(deserialize_with = "null_as_default")]
    pub end_index: u64,
    /// Average cadence
    pub average_cadence: Option<f64>,
    /// Average power in watts
    pub average_watts: Option<f64>,
    /// Average heart rate
    pub average_heartrate: Option<f64>,
    /// Max heart rate
    pub max_heartrate: Option<f64>,
    /// Segment ridden or run
    #[serde(deserialize_with = "null_as_default")]
    pub segment: SegmentSummary,
    /// Overall rank when in the top 10
    pub kom_rank: Option<u32>,
    /// Personal rank when in the top 3
    pub pr_rank: Option<u32>,
    /// Hidden from the segment leaderboard
    #[serde(deserialize_with = "null_as_default")]
    pub hidden: bool,
}

/// One row of a segment leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    /// Athlete display name
    #[serde(deserialize_with = "null_as_default")]
    pub athlete_name: String,
    /// Athlete id
    #[serde(deserialize_with = "null_as_default")]
    pub athlete_id: AthleteId,
    /// `M` or `F`
    pub athlete_gender: Option<String>,
    /// Profile picture URL
    pub athlete_profile: Option<String>,
    /// Average heart rate
    pub average_hr: Option<f64>,
    /// Average power in watts
    pub average_watts: Option<f64>,
    /// Distance in meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
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
    /// Activity containing the effort
    #[serde(deserialize_with = "null_as_default")]
    pub activity_id: ActivityId,
    /// The effort itself
    #[serde(deserialize_with = "null_as_default")]
    pub effort_id: EffortId,
    /// 1-based rank
    #[serde(deserialize_with = "null_as_default")]
    pub rank: u32,
}

impl LeaderboardEntry {
    /// Elapsed time as a [`Duration`].
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs(self.elapsed_time)
    }
}

/// A segment leaderboard, or one page of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leaderboard {
    /// Total efforts on the (filtered) board
    #[serde(deserialize_with = "null_as_default")]
    pub effort_count: u32,
    /// Total entries on the (filtered) board
    #[serde(deserialize_with = "null_as_default")]
    pub entry_count: u32,
    /// Entries in rank order
    #[serde(deserialize_with = "null_as_default")]
    pub entries: Vec<LeaderboardEntry>,
}

/// A segment found by the explorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerSegment {
    /// Segment id
    #[serde(deserialize_with = "null_as_default")]
    pub id: SegmentId,
    /// Name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Climb category code
    #[serde(deserialize_with = "null_as_default")]
    pub climb_category: i32,
    /// `NC`, `4`, `3`, `2`, `1` or `HC`
    #[serde(deserialize_with = "null_as_default")]
    pub climb_category_desc: String,
    /// Average grade in percent
    #[serde(deserialize_with = "null_as_default")]
    pub avg_grade: f64,
    /// `[lat, lng]` of the start
    #[serde(deserialize_with = "null_as_default")]
    pub start_latlng: Vec<f64>,
    /// `[lat, lng]` of the end
    #[serde(deserialize_with = "null_as_default")]
    pub end_latlng: Vec<f64>,
    /// Elevation difference in meters
    #[serde(deserialize_with = "null_as_default")]
    pub elev_difference: f64,
    /// Length in meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Encoded polyline
    #[serde(deserialize_with = "null_as_default")]
    pub points: String,
    /// Starred by the authenticated athlete
    #[serde(deserialize_with = "null_as_default")]
    pub starred: bool,
}

/// Segments returned by `GET /segments/explore`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerResult {
    /// Matching segments, at most ten
    #[serde(deserialize_with = "null_as_default")]
    pub segments: Vec<ExplorerSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_decode() {
        let json = r#"{
            "effort_count": 7000,
            "entry_count": 350,
            "entries": [{
                "athlete_name": "Jim Whimpey",
                "athlete_id": 123529,
                "athlete_gender": "M",
                "elapsed_time": 360,
                "activity_id": 2,
                "effort_id": 3,
                "rank": 1
            }]
        }"#;

        let board: Leaderboard = serde_json::from_str(json).unwrap();
        assert_eq!(board.entry_count, 350);
        assert_eq!(board.entries[0].rank, 1);
        assert_eq!(board.entries[0].elapsed(), Duration::from_secs(360));
    }

    #[test]
    fn test_segment_climb_category() {
        let segment: Segment = serde_json::from_str(
            r#"{"id": 229781, "resource_state": 3, "name": "Hawk Hill", "climb_category": 1, "effort_count": 309974}"#,
        )
        .unwrap();
        assert_eq!(segment.summary.meta.id.get(), 229781);
        assert_eq!(segment.summary.climb_category(), Some(ClimbCategory::Cat4));
        assert_eq!(segment.effort_count, 309974);
    }
}
