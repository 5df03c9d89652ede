//! Route models.

use serde::{Deserialize, Serialize};

use super::activity::Map;
use super::athlete::AthleteSummary;
use super::primitives::{RouteId, null_as_default};
use super::segment::SegmentSummary;

/// A planned route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Route id
    #[serde(deserialize_with = "null_as_default")]
    pub id: RouteId,
    /// Name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Free text description
    pub description: Option<String>,
    /// Creator
    #[serde(deserialize_with = "null_as_default")]
    pub athlete: AthleteSummary,
    /// Distance in meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Elevation gain in meters
    #[serde(deserialize_with = "null_as_default")]
    pub elevation_gain: f64,
    /// Route map
    #[serde(deserialize_with = "null_as_default")]
    pub map: Map,
    /// Only visible to the creator
    #[serde(deserialize_with = "null_as_default")]
    pub private: bool,
    /// Starred by the authenticated athlete
    #[serde(deserialize_with = "null_as_default")]
    pub starred: bool,
    /// Creation time, Unix epoch seconds
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
    /// 1 for ride, 2 for run
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub route_type: u8,
    /// 1 road, 2 mountain bike, 3 cross, 4 trail, 5 mixed
    #[serde(deserialize_with = "null_as_default")]
    pub sub_type: u8,
    /// Segments along the route
    #[serde(deserialize_with = "null_as_default")]
    pub segments: Vec<SegmentSummary>,
}
