//! Raw sensor streams of activities, segments and efforts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::primitives::Coordinate;
use crate::{Error, Result};

/// One kind of stream.
///
/// Variant order is the canonical order used when rendering a set of
/// stream types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamType {
    /// Seconds since start
    Time,
    /// `[lat, lng]` pairs
    #[serde(rename = "latlng")]
    LatLng,
    /// Meters since start
    Distance,
    /// Meters above sea level
    Altitude,
    /// Meters per second, smoothed
    VelocitySmooth,
    /// Beats per minute
    Heartrate,
    /// Revolutions or steps per minute
    Cadence,
    /// Watts
    Watts,
    /// Degrees Celsius
    Temp,
    /// Moving flag
    Moving,
    /// Grade in percent, smoothed
    GradeSmooth,
}

impl StreamType {
    /// Every stream type in canonical order.
    pub const ALL: [StreamType; 11] = [
        StreamType::Time,
        StreamType::LatLng,
        StreamType::Distance,
        StreamType::Altitude,
        StreamType::VelocitySmooth,
        StreamType::Heartrate,
        StreamType::Cadence,
        StreamType::Watts,
        StreamType::Temp,
        StreamType::Moving,
        StreamType::GradeSmooth,
    ];

    /// Wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamType::Time => "time",
            StreamType::LatLng => "latlng",
            StreamType::Distance => "distance",
            StreamType::Altitude => "altitude",
            StreamType::VelocitySmooth => "velocity_smooth",
            StreamType::Heartrate => "heartrate",
            StreamType::Cadence => "cadence",
            StreamType::Watts => "watts",
            StreamType::Temp => "temp",
            StreamType::Moving => "moving",
            StreamType::GradeSmooth => "grade_smooth",
        }
    }

    /// Returns `true` for the types segments and efforts offer.
    pub fn is_segment_stream(&self) -> bool {
        matches!(
            self,
            StreamType::LatLng | StreamType::Distance | StreamType::Altitude | StreamType::Time
        )
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StreamType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown stream type {s:?}")))
    }
}

/// A set of stream types.
///
/// Renders as a comma-joined token list in canonical order regardless of
/// insertion order, and parses back to the same set.
///
/// ```
/// use strava_rs::models::{StreamType, StreamTypes};
///
/// let types = StreamTypes::from_iter([StreamType::Heartrate, StreamType::Time]);
/// assert_eq!(types.to_string(), "time,heartrate");
/// assert_eq!("time,heartrate".parse::<StreamTypes>().unwrap(), types);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StreamTypes(BTreeSet<StreamType>);

impl StreamTypes {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stream type.
    pub fn all() -> Self {
        StreamType::ALL.into_iter().collect()
    }

    /// Add a type, builder style.
    pub fn with(mut self, stream_type: StreamType) -> Self {
        self.0.insert(stream_type);
        self
    }

    /// Add a type.
    pub fn insert(&mut self, stream_type: StreamType) -> bool {
        self.0.insert(stream_type)
    }

    /// Returns `true` if `stream_type` is in the set.
    pub fn contains(&self, stream_type: StreamType) -> bool {
        self.0.contains(&stream_type)
    }

    /// Number of types.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Types in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = StreamType> + '_ {
        self.0.iter().copied()
    }

    /// Path segment for an activity stream request.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the set is empty.
    pub(crate) fn activity_path_segment(&self) -> Result<String> {
        if self.is_empty() {
            return Err(Error::InvalidInput(
                "at least one stream type must be requested".to_string(),
            ));
        }
        Ok(self.to_string())
    }

    /// Path segment for a segment or effort stream request.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the set is empty or holds a type other
    /// than `latlng`, `distance`, `altitude` or `time`.
    pub(crate) fn segment_path_segment(&self) -> Result<String> {
        if let Some(bad) = self.iter().find(|t| !t.is_segment_stream()) {
            return Err(Error::InvalidInput(format!(
                "stream type {bad} is not available for segments or efforts"
            )));
        }
        self.activity_path_segment()
    }
}

impl fmt::Display for StreamTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.iter().map(|t| t.as_str()).collect();
        f.write_str(&tokens.join(","))
    }
}

impl FromStr for StreamTypes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(StreamType::from_str)
            .collect()
    }
}

impl FromIterator<StreamType> for StreamTypes {
    fn from_iter<I: IntoIterator<Item = StreamType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<StreamType> for StreamTypes {
    fn from(stream_type: StreamType) -> Self {
        Self::new().with(stream_type)
    }
}

/// Sampling resolution of a stream request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreamResolution {
    /// About 100 points
    Low,
    /// About 1000 points
    Medium,
    /// About 10000 points
    High,
    /// Every recorded point
    #[default]
    All,
}

impl StreamResolution {
    /// Wire token, `None` for full resolution.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            StreamResolution::Low => Some("low"),
            StreamResolution::Medium => Some("medium"),
            StreamResolution::High => Some("high"),
            StreamResolution::All => None,
        }
    }
}

/// One sample in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamPoint {
    /// A `[lat, lng]` pair
    LatLng([f64; 2]),
    /// A numeric sample
    Number(f64),
    /// A boolean sample (`moving`)
    Flag(bool),
}

impl StreamPoint {
    /// The numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StreamPoint::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The position, if this is a coordinate pair.
    pub fn as_coordinate(&self) -> Option<Coordinate> {
        match self {
            StreamPoint::LatLng([lat, lng]) => Some(Coordinate::new(*lat, *lng)),
            _ => None,
        }
    }

    /// The flag, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StreamPoint::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

/// One stream of samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityStream {
    /// Kind of samples
    #[serde(rename = "type")]
    pub stream_type: StreamType,
    /// Samples
    #[serde(default)]
    pub data: Vec<StreamPoint>,
    /// `distance` or `time`: the axis the samples are indexed by
    #[serde(default)]
    pub series_type: String,
    /// Number of points before downsampling
    #[serde(default)]
    pub original_size: u64,
    /// `low`, `medium` or `high`
    #[serde(default)]
    pub resolution: String,
}
