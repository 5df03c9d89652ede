//! Athlete and athlete statistics models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::club::ClubSummary;
use super::enums::{Gender, ResourceState};
use super::gear::GearSummary;
use super::primitives::{AthleteId, null_as_default};

/// Identifier-only athlete representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteMeta {
    /// Athlete id
    #[serde(deserialize_with = "null_as_default")]
    pub id: AthleteId,
    /// Level of detail in this payload
    #[serde(deserialize_with = "null_as_default")]
    pub resource_state: ResourceState,
}

/// Athlete as returned by list endpoints (followers, club members, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteSummary {
    /// Id and resource state
    #[serde(flatten)]
    pub meta: AthleteMeta,
    /// First name
    #[serde(rename = "firstname", deserialize_with = "null_as_default")]
    pub first_name: String,
    /// Last name
    #[serde(rename = "lastname", deserialize_with = "null_as_default")]
    pub last_name: String,
    /// 62x62 profile picture URL
    pub profile_medium: Option<String>,
    /// 124x124 profile picture URL
    pub profile: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or region
    pub state: Option<String>,
    /// Country
    pub country: Option<String>,
    /// Sex, when the athlete shared it
    pub sex: Option<Gender>,
    /// Follow status of the authenticated athlete towards this one
    pub friend: Option<String>,
    /// Follow status of this athlete towards the authenticated one
    pub follower: Option<String>,
    /// Subscriber flag
    #[serde(deserialize_with = "null_as_default")]
    pub premium: bool,
    /// Subscriber flag (current name)
    #[serde(deserialize_with = "null_as_default")]
    pub summit: bool,
    /// Account creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Last profile update
    pub updated_at: Option<DateTime<Utc>>,
}

impl AthleteSummary {
    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Athlete with every field; only available for the authenticated athlete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Athlete {
    /// Listing-level fields
    #[serde(flatten)]
    pub summary: AthleteSummary,
    /// Number of followers
    #[serde(deserialize_with = "null_as_default")]
    pub follower_count: u32,
    /// Number of athletes followed
    #[serde(deserialize_with = "null_as_default")]
    pub friend_count: u32,
    /// Number of athletes followed by both
    #[serde(deserialize_with = "null_as_default")]
    pub mutual_friend_count: u32,
    /// 0 for cyclist, 1 for runner
    #[serde(deserialize_with = "null_as_default")]
    pub athlete_type: u8,
    /// Preferred date format
    pub date_preference: Option<String>,
    /// `feet` or `meters`
    pub measurement_preference: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Functional threshold power
    pub ftp: Option<u32>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Clubs the athlete belongs to
    #[serde(deserialize_with = "null_as_default")]
    pub clubs: Vec<ClubSummary>,
    /// Bikes
    #[serde(deserialize_with = "null_as_default")]
    pub bikes: Vec<GearSummary>,
    /// Shoes
    #[serde(deserialize_with = "null_as_default")]
    pub shoes: Vec<GearSummary>,
}

/// Totals over a time window for one sport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Totals {
    /// Number of activities
    #[serde(deserialize_with = "null_as_default")]
    pub count: u32,
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
    pub elevation_gain: f64,
    /// Achievements (recent totals only)
    pub achievement_count: Option<u32>,
}

/// Rolled-up statistics for an athlete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    /// Longest ride in meters
    pub biggest_ride_distance: Option<f64>,
    /// Biggest climb in meters
    pub biggest_climb_elevation_gain: Option<f64>,
    /// Rides in the last four weeks
    #[serde(deserialize_with = "null_as_default")]
    pub recent_ride_totals: Totals,
    /// Runs in the last four weeks
    #[serde(deserialize_with = "null_as_default")]
    pub recent_run_totals: Totals,
    /// Swims in the last four weeks
    #[serde(deserialize_with = "null_as_default")]
    pub recent_swim_totals: Totals,
    /// Rides this year
    #[serde(deserialize_with = "null_as_default")]
    pub ytd_ride_totals: Totals,
    /// Runs this year
    #[serde(deserialize_with = "null_as_default")]
    pub ytd_run_totals: Totals,
    /// Swims this year
    #[serde(deserialize_with = "null_as_default")]
    pub ytd_swim_totals: Totals,
    /// All-time rides
    #[serde(deserialize_with = "null_as_default")]
    pub all_ride_totals: Totals,
    /// All-time runs
    #[serde(deserialize_with = "null_as_default")]
    pub all_run_totals: Totals,
    /// All-time swims
    #[serde(deserialize_with = "null_as_default")]
    pub all_swim_totals: Totals,
}
