//! Gear (bikes and shoes).

use serde::{Deserialize, Serialize};

use super::enums::ResourceState;
use super::primitives::{GearId, null_as_default};

/// Gear as embedded in athlete and activity payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearSummary {
    /// Gear id
    #[serde(deserialize_with = "null_as_default")]
    pub id: GearId,
    /// Level of detail in this payload
    #[serde(deserialize_with = "null_as_default")]
    pub resource_state: ResourceState,
    /// Default gear for its sport
    #[serde(deserialize_with = "null_as_default")]
    pub primary: bool,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Distance logged in meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
}

/// Gear with every field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gear {
    /// Listing-level fields
    #[serde(flatten)]
    pub summary: GearSummary,
    /// Brand
    pub brand_name: Option<String>,
    /// Model
    pub model_name: Option<String>,
    /// Bike frame type code
    pub frame_type: Option<u8>,
    /// Free text description
    pub description: Option<String>,
}

impl Gear {
    /// Returns `true` for bikes; shoe ids start with `g`.
    pub fn is_bike(&self) -> bool {
        self.summary.id.as_str().starts_with('b')
    }
}
