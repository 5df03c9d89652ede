//! Enumeration types for the Strava API.
//!
//! Each enum that travels in a query string carries an explicit
//! `as_str` table with the server's token vocabulary; serde handles the
//! JSON side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sport of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivityType {
    /// Alpine skiing
    AlpineSki,
    /// Backcountry skiing
    BackcountrySki,
    /// Canoeing
    Canoeing,
    /// Crossfit
    Crossfit,
    /// E-bike ride
    EBikeRide,
    /// Elliptical trainer
    Elliptical,
    /// Hike
    Hike,
    /// Ice skating
    IceSkate,
    /// Inline skating
    InlineSkate,
    /// Kayaking
    Kayaking,
    /// Kitesurfing
    Kitesurf,
    /// Nordic skiing
    NordicSki,
    /// Ride
    Ride,
    /// Rock climbing
    RockClimbing,
    /// Roller skiing
    RollerSki,
    /// Rowing
    Rowing,
    /// Run
    Run,
    /// Snowboarding
    Snowboard,
    /// Snowshoeing
    Snowshoe,
    /// Stair stepper
    StairStepper,
    /// Stand-up paddling
    StandUpPaddling,
    /// Surfing
    Surfing,
    /// Swim
    Swim,
    /// Virtual ride
    VirtualRide,
    /// Virtual run
    VirtualRun,
    /// Walk
    Walk,
    /// Weight training
    WeightTraining,
    /// Wheelchair
    Wheelchair,
    /// Windsurfing
    Windsurf,
    /// Workout
    Workout,
    /// Yoga
    Yoga,
    /// A type this client does not know about yet
    #[serde(other)]
    #[default]
    Unknown,
}

impl ActivityType {
    /// Lowercase token used by the create, update and upload endpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::AlpineSki => "alpineski",
            ActivityType::BackcountrySki => "backcountryski",
            ActivityType::Canoeing => "canoeing",
            ActivityType::Crossfit => "crossfit",
            ActivityType::EBikeRide => "ebikeride",
            ActivityType::Elliptical => "elliptical",
            ActivityType::Hike => "hike",
            ActivityType::IceSkate => "iceskate",
            ActivityType::InlineSkate => "inlineskate",
            ActivityType::Kayaking => "kayaking",
            ActivityType::Kitesurf => "kitesurf",
            ActivityType::NordicSki => "nordicski",
            ActivityType::Ride => "ride",
            ActivityType::RockClimbing => "rockclimbing",
            ActivityType::RollerSki => "rollerski",
            ActivityType::Rowing => "rowing",
            ActivityType::Run => "run",
            ActivityType::Snowboard => "snowboard",
            ActivityType::Snowshoe => "snowshoe",
            ActivityType::StairStepper => "stairstepper",
            ActivityType::StandUpPaddling => "standuppaddling",
            ActivityType::Surfing => "surfing",
            ActivityType::Swim => "swim",
            ActivityType::VirtualRide => "virtualride",
            ActivityType::VirtualRun => "virtualrun",
            ActivityType::Walk => "walk",
            ActivityType::WeightTraining => "weighttraining",
            ActivityType::Wheelchair => "wheelchair",
            ActivityType::Windsurf => "windsurf",
            ActivityType::Workout => "workout",
            ActivityType::Yoga => "yoga",
            ActivityType::Unknown => "unknown",
        }
    }

    /// Returns `true` for types that can be sent to the API.
    pub fn is_known(&self) -> bool {
        !matches!(self, ActivityType::Unknown)
    }

    /// Returns `true` for cycling types.
    pub fn is_ride(&self) -> bool {
        matches!(
            self,
            ActivityType::Ride | ActivityType::EBikeRide | ActivityType::VirtualRide
        )
    }

    /// Returns `true` for running types.
    pub fn is_run(&self) -> bool {
        matches!(self, ActivityType::Run | ActivityType::VirtualRun)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much of a resource the server included in a payload.
///
/// Serialized as the integers 1, 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum ResourceState {
    /// Identifier only
    #[default]
    Meta,
    /// Listing-level fields
    Summary,
    /// Every field
    Detailed,
}

impl TryFrom<u8> for ResourceState {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(ResourceState::Meta),
            2 => Ok(ResourceState::Summary),
            3 => Ok(ResourceState::Detailed),
            other => Err(format!("unknown resource_state {other}")),
        }
    }
}

impl From<ResourceState> for u8 {
    fn from(state: ResourceState) -> Self {
        match state {
            ResourceState::Meta => 1,
            ResourceState::Summary => 2,
            ResourceState::Detailed => 3,
        }
    }
}

/// An athlete's sex as stored on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    #[serde(rename = "M")]
    Male,
    /// Female
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

/// Gender filter for segment leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenderFilter {
    /// No filter
    #[default]
    All,
    /// Men only
    Male,
    /// Women only
    Female,
}

impl GenderFilter {
    /// Wire token, `None` when the filter is unset.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            GenderFilter::All => None,
            GenderFilter::Male => Some("M"),
            GenderFilter::Female => Some("F"),
        }
    }
}

/// Age-group filter for segment leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgeGroup {
    /// No filter
    #[default]
    All,
    /// 0 to 19
    Under20,
    /// 20 to 24
    From20To24,
    /// 25 to 34
    From25To34,
    /// 35 to 44
    From35To44,
    /// 45 to 54
    From45To54,
    /// 55 to 64
    From55To64,
    /// 65 to 69
    From65To69,
    /// 70 to 74
    From70To74,
    /// 75 and older
    Over75,
}

impl AgeGroup {
    /// Wire token, `None` when the filter is unset.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            AgeGroup::All => None,
            AgeGroup::Under20 => Some("0_19"),
            AgeGroup::From20To24 => Some("20_24"),
            AgeGroup::From25To34 => Some("25_34"),
            AgeGroup::From35To44 => Some("35_44"),
            AgeGroup::From45To54 => Some("45_54"),
            AgeGroup::From55To64 => Some("55_64"),
            AgeGroup::From65To69 => Some("65_69"),
            AgeGroup::From70To74 => Some("70_74"),
            AgeGroup::Over75 => Some("75_plus"),
        }
    }
}

/// Weight-class filter for segment leaderboards, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeightClass {
    /// No filter
    #[default]
    All,
    /// Up to 54 kg
    Under55,
    /// 55 to 64 kg
    From55To64,
    /// 65 to 74 kg
    From65To74,
    /// 75 to 84 kg
    From75To84,
    /// 85 to 94 kg
    From85To94,
    /// 95 to 104 kg
    From95To104,
    /// 105 to 114 kg
    From105To114,
    /// 115 kg and above
    Over115,
}

impl WeightClass {
    /// Wire token, `None` when the filter is unset.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            WeightClass::All => None,
            WeightClass::Under55 => Some("0_54"),
            WeightClass::From55To64 => Some("55_64"),
            WeightClass::From65To74 => Some("65_74"),
            WeightClass::From75To84 => Some("75_84"),
            WeightClass::From85To94 => Some("85_94"),
            WeightClass::From95To104 => Some("95_104"),
            WeightClass::From105To114 => Some("105_114"),
            WeightClass::Over115 => Some("115_plus"),
        }
    }
}

/// Time window filter for segment leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateRange {
    /// All time
    #[default]
    All,
    /// This calendar year
    ThisYear,
    /// This month
    ThisMonth,
    /// This week
    ThisWeek,
    /// Today
    Today,
}

impl DateRange {
    /// Wire token, `None` when the filter is unset.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            DateRange::All => None,
            DateRange::ThisYear => Some("this_year"),
            DateRange::ThisMonth => Some("this_month"),
            DateRange::ThisWeek => Some("this_week"),
            DateRange::Today => Some("today"),
        }
    }
}

/// An activity field that can be changed with an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityParameter {
    /// Title
    Name,
    /// Free text description
    Description,
    /// Gear used, by gear id
    GearId,
    /// Only visible to the owner
    Private,
    /// Recorded on a trainer
    Trainer,
    /// Flagged as a commute
    Commute,
}

impl ActivityParameter {
    /// Query key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityParameter::Name => "name",
            ActivityParameter::Description => "description",
            ActivityParameter::GearId => "gear_id",
            ActivityParameter::Private => "private",
            ActivityParameter::Trainer => "trainer",
            ActivityParameter::Commute => "commute",
        }
    }
}

/// An athlete profile field that can be changed with an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AthleteParameter {
    /// City
    City,
    /// State or region
    State,
    /// Country
    Country,
    /// Weight in kilograms
    Weight,
}

impl AthleteParameter {
    /// Query key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            AthleteParameter::City => "city",
            AthleteParameter::State => "state",
            AthleteParameter::Country => "country",
            AthleteParameter::Weight => "weight",
        }
    }
}

/// Climb category of a segment, from flat to hors catégorie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClimbCategory {
    /// Not categorized
    Uncategorized,
    /// Category 4
    Cat4,
    /// Category 3
    Cat3,
    /// Category 2
    Cat2,
    /// Category 1
    Cat1,
    /// Hors catégorie
    Hc,
}

impl ClimbCategory {
    /// Map the integer the API sends (0 through 5).
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ClimbCategory::Uncategorized),
            1 => Some(ClimbCategory::Cat4),
            2 => Some(ClimbCategory::Cat3),
            3 => Some(ClimbCategory::Cat2),
            4 => Some(ClimbCategory::Cat1),
            5 => Some(ClimbCategory::Hc),
            _ => None,
        }
    }

    /// The integer the API uses for this category.
    pub fn code(&self) -> u8 {
        match self {
            ClimbCategory::Uncategorized => 0,
            ClimbCategory::Cat4 => 1,
            ClimbCategory::Cat3 => 2,
            ClimbCategory::Cat2 => 3,
            ClimbCategory::Cat1 => 4,
            ClimbCategory::Hc => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_wire_names() {
        let t: ActivityType = serde_json::from_str("\"EBikeRide\"").unwrap();
        assert_eq!(t, ActivityType::EBikeRide);
        assert_eq!(t.as_str(), "ebikeride");
        assert!(t.is_ride());

        let unknown: ActivityType = serde_json::from_str("\"Pickleball\"").unwrap();
        assert_eq!(unknown, ActivityType::Unknown);
        assert!(!unknown.is_known());
    }

    #[test]
    fn test_resource_state_integers() {
        let state: ResourceState = serde_json::from_str("3").unwrap();
        assert_eq!(state, ResourceState::Detailed);
        assert_eq!(serde_json::to_string(&ResourceState::Summary).unwrap(), "2");
        assert!(serde_json::from_str::<ResourceState>("7").is_err());
    }

    #[test]
    fn test_filters_unset_render_nothing() {
        assert_eq!(GenderFilter::All.as_str(), None);
        assert_eq!(AgeGroup::All.as_str(), None);
        assert_eq!(WeightClass::All.as_str(), None);
        assert_eq!(DateRange::All.as_str(), None);
        assert_eq!(AgeGroup::From25To34.as_str(), Some("25_34"));
        assert_eq!(WeightClass::Over115.as_str(), Some("115_plus"));
    }

    #[test]
    fn test_commute_parameter_key() {
        assert_eq!(ActivityParameter::Commute.as_str(), "commute");
        assert_eq!(ActivityParameter::GearId.as_str(), "gear_id");
    }

    #[test]
    fn test_climb_category_codes() {
        assert_eq!(ClimbCategory::from_code(5), Some(ClimbCategory::Hc));
        assert_eq!(ClimbCategory::from_code(9), None);
        assert_eq!(ClimbCategory::Cat4.code(), 1);
    }
}
