//! Activities service.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc};

use crate::client::paginated::{
    collect_pages, PaginatedStream, PaginatedStreamBuilder, DEFAULT_PAGE_SIZE,
};
use crate::client::{ClientInner, Query};
use crate::models::{
    Activity, ActivityId, ActivityLap, ActivityParameter, ActivitySummary, ActivityType,
    ActivityZone, AthleteSummary, Comment, NewActivity, Photo, ProgressSummary,
};
use crate::{Error, Result};

/// Page size of the following feed, which the API caps lower than other lists.
pub const FOLLOWING_PAGE_SIZE: u32 = 20;

/// How many photos [`ActivitiesService::latest_photos`] gathers before stopping.
const LATEST_PHOTOS_TARGET: usize = 4;

/// Service for activity operations.
///
/// # Example
///
/// ```no_run
/// use chrono::{Duration, Utc};
///
/// # async fn example(client: strava_rs::StravaClient) -> strava_rs::Result<()> {
/// let last_month = client.activities().after(Utc::now() - Duration::days(30)).await?;
/// println!("{} activities in the last 30 days", last_month.len());
///
/// let week = client.activities().weekly_progress().await?;
/// println!("ridden {:.1} km this week", week.ride_distance / 1000.0);
/// # Ok(())
/// # }
/// ```
pub struct ActivitiesService {
    inner: Arc<ClientInner>,
}

/// Time-window filter for the authenticated athlete's activities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivitiesQuery {
    /// Only activities that started before this time
    pub before: Option<DateTime<Utc>>,
    /// Only activities that started after this time
    pub after: Option<DateTime<Utc>>,
}

impl ActivitiesQuery {
    /// Activities before `before`.
    pub fn before(before: DateTime<Utc>) -> Self {
        Self {
            before: Some(before),
            after: None,
        }
    }

    /// Activities after `after`.
    pub fn after(after: DateTime<Utc>) -> Self {
        Self {
            before: None,
            after: Some(after),
        }
    }

    /// Activities between `after` and `before`.
    pub fn between(after: DateTime<Utc>, before: DateTime<Utc>) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
        }
    }

    pub(crate) fn to_query(self) -> Query {
        let mut query = Query::new();
        if let Some(before) = self.before {
            query = query.epoch("before", before);
        }
        if let Some(after) = self.after {
            query = query.epoch("after", after);
        }
        query
    }
}

impl ActivitiesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get one activity.
    ///
    /// With `include_all_efforts`, every segment effort is embedded rather
    /// than only the notable ones.
    pub async fn get(&self, id: ActivityId, include_all_efforts: bool) -> Result<Activity> {
        let query = Query::new().push("include_all_efforts", include_all_efforts);
        self.inner
            .get_object(&format!("/activities/{id}"), &query, &format!("activity {id}"))
            .await
    }

    /// Create a manual activity.
    pub async fn create(&self, activity: &NewActivity) -> Result<Activity> {
        if activity.name.trim().is_empty() {
            return Err(Error::InvalidInput(
                "a new activity needs a name".to_string(),
            ));
        }
        ensure_known(activity.activity_type)?;

        let query = Query::new()
            .push("name", &activity.name)
            .push("type", activity.activity_type.as_str())
            .iso8601("start_date_local", activity.start_date_local)
            .push("elapsed_time", activity.elapsed_time)
            .push_opt("description", activity.description.as_deref())
            .push_opt("distance", activity.distance)
            .push("trainer", u8::from(activity.trainer))
            .push("commute", u8::from(activity.commute));

        tracing::info!(name = %activity.name, "creating manual activity");
        self.inner.post_object("/activities", &query, "created activity").await
    }

    /// Change one field of an activity.
    pub async fn update(
        &self,
        id: ActivityId,
        parameter: ActivityParameter,
        value: impl ToString,
    ) -> Result<Activity> {
        let query = Query::new().push(parameter.as_str(), value);
        self.inner
            .put_object(&format!("/activities/{id}"), &query, &format!("activity {id}"))
            .await
    }

    /// Change the sport of an activity.
    pub async fn update_type(&self, id: ActivityId, activity_type: ActivityType) -> Result<Activity> {
        ensure_known(activity_type)?;
        let query = Query::new().push("type", activity_type.as_str());
        self.inner
            .put_object(&format!("/activities/{id}"), &query, &format!("activity {id}"))
            .await
    }

    /// Delete an activity.
    pub async fn delete(&self, id: ActivityId) -> Result<()> {
        tracing::info!(%id, "deleting activity");
        self.inner.delete(&format!("/activities/{id}")).await
    }

    /// One page of the authenticated athlete's activities.
    pub async fn list(
        &self,
        query: &ActivitiesQuery,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<ActivitySummary>> {
        let query = query.to_query().page(page, per_page)?;
        self.inner.get_list("/athlete/activities", &query).await
    }

    /// Every activity matching `query`, fetched page by page.
    pub async fn list_all(&self, query: &ActivitiesQuery) -> Result<Vec<ActivitySummary>> {
        self.list_all_with(query, |_| {}).await
    }

    /// Like [`list_all`](Self::list_all), calling `observer` for each
    /// activity as it arrives.
    pub async fn list_all_with(
        &self,
        query: &ActivitiesQuery,
        observer: impl FnMut(&ActivitySummary),
    ) -> Result<Vec<ActivitySummary>> {
        collect_pages(
            &self.inner,
            "/athlete/activities",
            &query.to_query(),
            DEFAULT_PAGE_SIZE,
            None,
            observer,
        )
        .await
    }

    /// Stream every activity matching `query`, one page at a time.
    pub fn list_stream(&self, query: &ActivitiesQuery) -> PaginatedStream<ActivitySummary> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/athlete/activities")
            .query(query.to_query())
            .per_page(DEFAULT_PAGE_SIZE)
            .build()
    }

    /// Every activity of the authenticated athlete.
    pub async fn all(&self) -> Result<Vec<ActivitySummary>> {
        self.list_all(&ActivitiesQuery::default()).await
    }

    /// Every activity that started before `before`.
    pub async fn before(&self, before: DateTime<Utc>) -> Result<Vec<ActivitySummary>> {
        self.list_all(&ActivitiesQuery::before(before)).await
    }

    /// Every activity that started after `after`.
    pub async fn after(&self, after: DateTime<Utc>) -> Result<Vec<ActivitySummary>> {
        self.list_all(&ActivitiesQuery::after(after)).await
    }

    /// Every activity that started between `after` and `before`.
    pub async fn between(
        &self,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Vec<ActivitySummary>> {
        self.list_all(&ActivitiesQuery::between(after, before)).await
    }

    /// Number of activities of the authenticated athlete.
    ///
    /// Walks the whole history; [`StatsService`](crate::api::StatsService)
    /// is cheaper when per-sport totals are enough.
    pub async fn total_count(&self) -> Result<usize> {
        let mut count = 0;
        self.list_all_with(&ActivitiesQuery::default(), |_| count += 1)
            .await?;
        Ok(count)
    }

    /// One page of activities by athletes the authenticated athlete follows.
    pub async fn following(&self, page: u32, per_page: u32) -> Result<Vec<ActivitySummary>> {
        let query = Query::new().page(page, per_page)?;
        self.inner.get_list("/activities/following", &query).await
    }

    /// The latest `count` activities from followed athletes.
    ///
    /// Pages are fetched until `count` activities are held or the feed ends.
    pub async fn friends(&self, count: usize) -> Result<Vec<ActivitySummary>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        collect_pages(
            &self.inner,
            "/activities/following",
            &Query::new(),
            FOLLOWING_PAGE_SIZE,
            Some(count),
            |_| {},
        )
        .await
    }

    /// Comments on an activity.
    pub async fn comments(&self, id: ActivityId) -> Result<Vec<Comment>> {
        self.inner
            .get_list(&format!("/activities/{id}/comments"), &Query::new())
            .await
    }

    /// Athletes who gave kudos to an activity.
    pub async fn kudoers(&self, id: ActivityId) -> Result<Vec<AthleteSummary>> {
        self.inner
            .get_list(&format!("/activities/{id}/kudos"), &Query::new())
            .await
    }

    /// Heart rate and power zone distribution of an activity.
    pub async fn zones(&self, id: ActivityId) -> Result<Vec<ActivityZone>> {
        self.inner
            .get_list(&format!("/activities/{id}/zones"), &Query::new())
            .await
    }

    /// Laps of an activity.
    pub async fn laps(&self, id: ActivityId) -> Result<Vec<ActivityLap>> {
        self.inner
            .get_list(&format!("/activities/{id}/laps"), &Query::new())
            .await
    }

    /// Photos attached to an activity.
    pub async fn photos(&self, id: ActivityId) -> Result<Vec<Photo>> {
        let query = Query::new().push("photo_sources", true);
        self.inner
            .get_list(&format!("/activities/{id}/photos"), &query)
            .await
    }

    /// Recent photos from activities since `since`, newest activity first.
    ///
    /// Stops requesting photos once at least four are gathered, so the
    /// result can hold a few more than that.
    pub async fn latest_photos(&self, since: DateTime<Utc>) -> Result<Vec<Photo>> {
        let mut activities = self.after(since).await?;
        activities.sort_by(|a, b| b.start_date.cmp(&a.start_date));

        let mut photos = Vec::new();
        for activity in activities {
            if photos.len() >= LATEST_PHOTOS_TARGET {
                break;
            }
            if activity.total_photo_count == 0 && activity.photo_count == 0 {
                continue;
            }
            photos.extend(self.photos(activity.meta.id).await?);
        }
        Ok(photos)
    }

    /// Give kudos to an activity.
    pub async fn give_kudos(&self, id: ActivityId) -> Result<()> {
        self.inner
            .post(&format!("/activities/{id}/kudos"), &Query::new())
            .await
    }

    /// Comment on an activity.
    pub async fn post_comment(&self, id: ActivityId, text: &str) -> Result<Comment> {
        if text.trim().is_empty() {
            return Err(Error::InvalidInput(
                "comment text must not be empty".to_string(),
            ));
        }
        let query = Query::new().push("text", text);
        self.inner
            .post_object(&format!("/activities/{id}/comments"), &query, "comment")
            .await
    }

    /// Progress since Monday 00:00 UTC of the current week.
    pub async fn weekly_progress(&self) -> Result<ProgressSummary> {
        self.weekly_progress_at(Utc::now()).await
    }

    /// Progress from the start of the week containing `now` up to `now`.
    pub async fn weekly_progress_at(&self, now: DateTime<Utc>) -> Result<ProgressSummary> {
        self.summary(start_of_week(now), now).await
    }

    /// Activities between `start` and `end`, bucketed by sport.
    pub async fn summary(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ProgressSummary> {
        if end < start {
            return Err(Error::InvalidInput(format!(
                "summary window ends ({end}) before it starts ({start})"
            )));
        }
        let activities = self.between(start, end).await?;
        Ok(ProgressSummary::from_activities(start, end, activities))
    }

    /// Progress since January 1st of the current year.
    pub async fn summary_this_year(&self) -> Result<ProgressSummary> {
        let now = Utc::now();
        self.summary(start_of_year(now.year())?, now).await
    }

    /// Progress over the whole previous year.
    pub async fn summary_last_year(&self) -> Result<ProgressSummary> {
        let this_year = Utc::now().year();
        self.summary(start_of_year(this_year - 1)?, start_of_year(this_year)?)
            .await
    }
}

fn ensure_known(activity_type: ActivityType) -> Result<()> {
    if activity_type.is_known() {
        Ok(())
    } else {
        Err(Error::InvalidInput(
            "activity type must be a known sport".to_string(),
        ))
    }
}

/// Monday 00:00 UTC of the week containing `now`.
pub(crate) fn start_of_week(now: DateTime<Utc>) -> DateTime<Utc> {
    let days = i64::from(now.weekday().num_days_from_monday());
    (now - Duration::days(days))
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

fn start_of_year(year: i32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| Error::InvalidInput(format!("year {year} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activities_query_epoch_seconds() {
        let after = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        let query = ActivitiesQuery::between(after, before).to_query();
        assert_eq!(query.encode(), "before=1706745600&after=1704067200");
        assert!(ActivitiesQuery::default().to_query().is_empty());
    }

    #[test]
    fn test_start_of_week() {
        // Thursday
        let now = Utc.with_ymd_and_hms(2024, 6, 6, 15, 30, 0).unwrap();
        assert_eq!(
            start_of_week(now),
            Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap()
        );

        let monday = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
        assert_eq!(start_of_week(monday), monday);
    }

    #[test]
    fn test_start_of_year() {
        assert_eq!(
            start_of_year(2023).unwrap(),
            Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
        );
    }
}
