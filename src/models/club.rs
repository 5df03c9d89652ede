//! Club models.

use serde::{Deserialize, Serialize};

use super::enums::ResourceState;
use super::primitives::{ClubId, null_as_default};

/// Identifier-only club representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubMeta {
    /// Club id
    #[serde(deserialize_with = "null_as_default")]
    pub id: ClubId,
    /// Level of detail in this payload
    #[serde(deserialize_with = "null_as_default")]
    pub resource_state: ResourceState,
}

/// Club as returned by `GET /athlete/clubs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubSummary {
    /// Id and resource state
    #[serde(flatten)]
    pub meta: ClubMeta,
    /// Name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// 60x60 picture URL
    pub profile_medium: Option<String>,
    /// 124x124 picture URL
    pub profile: Option<String>,
    /// Cover photo URL
    pub cover_photo: Option<String>,
    /// `cycling`, `running`, `triathlon` or `other`
    pub sport_type: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or region
    pub state: Option<String>,
    /// Country
    pub country: Option<String>,
    /// Members must be approved
    #[serde(deserialize_with = "null_as_default")]
    pub private: bool,
    /// Number of members
    #[serde(deserialize_with = "null_as_default")]
    pub member_count: u32,
    /// Featured by Strava
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    /// Verified by Strava
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
    /// Vanity URL slug
    pub url: Option<String>,
}

/// Club with every field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Club {
    /// Listing-level fields
    #[serde(flatten)]
    pub summary: ClubSummary,
    /// Free text description
    pub description: Option<String>,
    /// `casual_club`, `racing_team`, `shop`, `company` or `other`
    pub club_type: Option<String>,
    /// `member` or `pending` for the authenticated athlete
    pub membership: Option<String>,
    /// The authenticated athlete administers the club
    #[serde(deserialize_with = "null_as_default")]
    pub admin: bool,
    /// The authenticated athlete owns the club
    #[serde(deserialize_with = "null_as_default")]
    pub owner: bool,
    /// Members the authenticated athlete follows
    #[serde(deserialize_with = "null_as_default")]
    pub following_count: u32,
}
