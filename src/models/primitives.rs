//! Primitive types and newtypes for type-safe API interactions.
//!
//! Strava identifies most resources with 64-bit integers. Wrapping each in
//! its own type keeps an activity id from being passed where a segment id is
//! expected.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier.
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// The raw identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// An activity identifier.
    ///
    /// ```
    /// use strava_rs::ActivityId;
    ///
    /// let id = ActivityId::new(1_234_567_890);
    /// assert_eq!(id.to_string(), "1234567890");
    /// ```
    ActivityId
);
numeric_id!(
    /// An athlete identifier.
    AthleteId
);
numeric_id!(
    /// A segment identifier.
    SegmentId
);
numeric_id!(
    /// A segment effort identifier.
    EffortId
);
numeric_id!(
    /// A club identifier.
    ClubId
);
numeric_id!(
    /// A route identifier.
    RouteId
);
numeric_id!(
    /// An upload identifier.
    UploadId
);

/// A gear identifier (`b12345` for bikes, `g12345` for shoes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GearId(String);

impl GearId {
    /// Create a new gear id from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the gear id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for GearId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for GearId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GearId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Read a `[lat, lng]` pair as sent by the API; anything else is `None`.
    pub fn from_latlng(pair: &[f64]) -> Option<Self> {
        match pair {
            [lat, lng] => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }
}

/// A rectangular area given by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// South-west corner
    pub south_west: Coordinate,
    /// North-east corner
    pub north_east: Coordinate,
}

impl Bounds {
    /// Create bounds from two corners.
    pub fn new(south_west: Coordinate, north_east: Coordinate) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Render as `sw_lat,sw_lng,ne_lat,ne_lng`.
    pub fn to_query_value(&self) -> String {
        format!(
            "{},{},{},{}",
            self.south_west.latitude,
            self.south_west.longitude,
            self.north_east.latitude,
            self.north_east.longitude
        )
    }
}

/// Deserialize a field that the API may send as `null`, falling back to the
/// type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_transparent() {
        let id: ActivityId = serde_json::from_str("9876543210").unwrap();
        assert_eq!(id.get(), 9_876_543_210);
        assert_eq!(serde_json::to_string(&id).unwrap(), "9876543210");

        let gear: GearId = serde_json::from_str("\"b1234\"").unwrap();
        assert_eq!(gear.as_str(), "b1234");
    }

    #[test]
    fn test_coordinate_from_latlng() {
        assert_eq!(
            Coordinate::from_latlng(&[37.77, -122.42]),
            Some(Coordinate::new(37.77, -122.42))
        );
        assert_eq!(Coordinate::from_latlng(&[]), None);
    }

    #[test]
    fn test_bounds_query_value() {
        let bounds = Bounds::new(
            Coordinate::new(37.821362, -122.505373),
            Coordinate::new(37.842038, -122.465977),
        );
        assert_eq!(
            bounds.to_query_value(),
            "37.821362,-122.505373,37.842038,-122.465977"
        );
    }
}
