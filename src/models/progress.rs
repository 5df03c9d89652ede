//! Locally computed activity summaries.

use chrono::{DateTime, Utc};
use std::time::Duration;

use super::activity::ActivitySummary;
use super::enums::ActivityType;

/// Activities in a time window, bucketed by sport.
///
/// Rides and runs are matched on the exact `Ride` and `Run` types; every
/// other type (virtual rides included) lands in `other_activities`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    /// Start of the window
    pub start: DateTime<Utc>,
    /// End of the window
    pub end: DateTime<Utc>,
    /// Rides in the window
    pub rides: Vec<ActivitySummary>,
    /// Runs in the window
    pub runs: Vec<ActivitySummary>,
    /// Everything else
    pub other_activities: Vec<ActivitySummary>,
    /// Total ride distance in meters
    pub ride_distance: f64,
    /// Total run distance in meters
    pub run_distance: f64,
    /// Moving time over all activities
    pub total_time: Duration,
}

impl ProgressSummary {
    /// An empty summary for a window.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            rides: Vec::new(),
            runs: Vec::new(),
            other_activities: Vec::new(),
            ride_distance: 0.0,
            run_distance: 0.0,
            total_time: Duration::ZERO,
        }
    }

    /// Classify every activity into a new summary.
    pub fn from_activities(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        activities: impl IntoIterator<Item = ActivitySummary>,
    ) -> Self {
        let mut summary = Self::new(start, end);
        for activity in activities {
            summary.add(activity);
        }
        summary
    }

    /// Classify one activity.
    pub fn add(&mut self, activity: ActivitySummary) {
        self.total_time += Duration::from_secs(activity.moving_time);
        match activity.activity_type {
            ActivityType::Ride => {
                self.ride_distance += activity.distance;
                self.rides.push(activity);
            }
            ActivityType::Run => {
                self.run_distance += activity.distance;
                self.runs.push(activity);
            }
            _ => self.other_activities.push(activity),
        }
    }

    /// Number of activities in all buckets.
    pub fn activity_count(&self) -> usize {
        self.rides.len() + self.runs.len() + self.other_activities.len()
    }

    /// Length of the window.
    pub fn window(&self) -> chrono::Duration {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn activity(activity_type: ActivityType, distance: f64, moving_time: u64) -> ActivitySummary {
        ActivitySummary {
            activity_type,
            distance,
            moving_time,
            ..Default::default()
        }
    }

    #[test]
    fn test_progress_buckets() {
        let start = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();

        let summary = ProgressSummary::from_activities(
            start,
            end,
            [
                activity(ActivityType::Ride, 10000.0, 3600),
                activity(ActivityType::Run, 5000.0, 3600),
                activity(ActivityType::Hike, 2000.0, 3600),
            ],
        );

        assert_eq!(summary.ride_distance, 10000.0);
        assert_eq!(summary.run_distance, 5000.0);
        assert_eq!(summary.total_time, Duration::from_secs(10800));
        assert_eq!(summary.activity_count(), 3);
        assert_eq!(summary.other_activities.len(), 1);
        assert_eq!(summary.window(), chrono::Duration::days(7));
    }

    #[test]
    fn test_virtual_ride_is_other() {
        let now = Utc::now();
        let summary = ProgressSummary::from_activities(
            now,
            now,
            [activity(ActivityType::VirtualRide, 30000.0, 3600)],
        );
        assert!(summary.rides.is_empty());
        assert_eq!(summary.ride_distance, 0.0);
        assert_eq!(summary.total_time, Duration::from_secs(3600));
    }
}
