//! Segments service and leaderboard assembly.
//!
//! A full leaderboard is built from several pages. The first request is a
//! one-entry probe that reports the total number of entries; pages of up to
//! 200 entries are then fetched until that total is covered. A page that
//! comes back empty ends the loop early, since the board can shrink between
//! requests.

use std::sync::Arc;

use crate::client::paginated::DEFAULT_PAGE_SIZE;
use crate::client::{ClientInner, Query};
use crate::models::{
    AgeGroup, AthleteId, Bounds, ClimbCategory, ClubId, DateRange, ExplorerResult, GenderFilter,
    Leaderboard, Segment, SegmentId, SegmentSummary, WeightClass,
};
use crate::{Error, Result};

/// Service for segment operations.
///
/// # Example
///
/// ```no_run
/// use strava_rs::api::LeaderboardQuery;
/// use strava_rs::models::{DateRange, GenderFilter, SegmentId};
///
/// # async fn example(client: strava_rs::StravaClient) -> strava_rs::Result<()> {
/// let query = LeaderboardQuery::default()
///     .gender(GenderFilter::Female)
///     .date_range(DateRange::ThisYear);
///
/// let board = client.segments().leaderboard(SegmentId::new(229781), &query).await?;
/// for entry in board.entries.iter().take(10) {
///     println!("{:>3}. {} {:?}", entry.rank, entry.athlete_name, entry.elapsed());
/// }
/// # Ok(())
/// # }
/// ```
pub struct SegmentsService {
    inner: Arc<ClientInner>,
}

/// Filters for a segment leaderboard.
///
/// Filters left at their "all" value are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaderboardQuery {
    /// Gender filter
    pub gender: GenderFilter,
    /// Age group filter
    pub age_group: AgeGroup,
    /// Weight class filter
    pub weight_class: WeightClass,
    /// Time window filter
    pub date_range: DateRange,
    /// Only members of this club
    pub club_id: Option<ClubId>,
    /// Only athletes the authenticated athlete follows
    pub following: bool,
}

impl LeaderboardQuery {
    /// Set the gender filter.
    pub fn gender(mut self, gender: GenderFilter) -> Self {
        self.gender = gender;
        self
    }

    /// Set the age group filter.
    pub fn age_group(mut self, age_group: AgeGroup) -> Self {
        self.age_group = age_group;
        self
    }

    /// Set the weight class filter.
    pub fn weight_class(mut self, weight_class: WeightClass) -> Self {
        self.weight_class = weight_class;
        self
    }

    /// Set the time window filter.
    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    /// Restrict to members of a club.
    pub fn club(mut self, club_id: ClubId) -> Self {
        self.club_id = Some(club_id);
        self
    }

    /// Restrict to followed athletes.
    pub fn following(mut self, following: bool) -> Self {
        self.following = following;
        self
    }

    pub(crate) fn to_query(self) -> Query {
        let mut query = Query::new()
            .push_opt("gender", self.gender.as_str())
            .push_opt("age_group", self.age_group.as_str())
            .push_opt("weight_class", self.weight_class.as_str())
            .push_opt("date_range", self.date_range.as_str())
            .push_opt("club_id", self.club_id);
        if self.following {
            query = query.push("following", true);
        }
        query
    }
}

impl SegmentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get one segment.
    pub async fn get(&self, id: SegmentId) -> Result<Segment> {
        self.inner
            .get_object(&format!("/segments/{id}"), &Query::new(), &format!("segment {id}"))
            .await
    }

    /// Segments starred by the authenticated athlete.
    pub async fn starred(&self) -> Result<Vec<SegmentSummary>> {
        self.inner.get_list("/segments/starred", &Query::new()).await
    }

    /// Segments starred by another athlete.
    pub async fn starred_by(&self, athlete_id: AthleteId) -> Result<Vec<SegmentSummary>> {
        self.inner
            .get_list(
                &format!("/athletes/{athlete_id}/segments/starred"),
                &Query::new(),
            )
            .await
    }

    /// One page of a segment leaderboard.
    pub async fn leaderboard_page(
        &self,
        id: SegmentId,
        query: &LeaderboardQuery,
        page: u32,
        per_page: u32,
    ) -> Result<Leaderboard> {
        let query = query.to_query().page(page, per_page)?;
        self.inner
            .get_object(
                &format!("/segments/{id}/leaderboard"),
                &query,
                &format!("leaderboard of segment {id}"),
            )
            .await
    }

    /// The complete leaderboard matching `query`.
    pub async fn leaderboard(&self, id: SegmentId, query: &LeaderboardQuery) -> Result<Leaderboard> {
        self.leaderboard_with_page_size(id, query, DEFAULT_PAGE_SIZE)
            .await
    }

    /// The complete leaderboard, fetched `per_page` entries at a time.
    pub async fn leaderboard_with_page_size(
        &self,
        id: SegmentId,
        query: &LeaderboardQuery,
        per_page: u32,
    ) -> Result<Leaderboard> {
        crate::client::validate_page(1, per_page)?;

        let probe = self.leaderboard_page(id, query, 1, 1).await?;
        let total = u64::from(probe.entry_count);

        let mut board = Leaderboard {
            effort_count: probe.effort_count,
            entry_count: probe.entry_count,
            entries: Vec::new(),
        };

        let mut page: u32 = 1;
        while u64::from(page - 1) * u64::from(per_page) < total {
            let batch = self.leaderboard_page(id, query, page, per_page).await?;
            tracing::trace!(segment = %id, page, count = batch.entries.len(), "fetched leaderboard page");

            if batch.entries.is_empty() {
                break;
            }
            board.entries.extend(batch.entries);
            page += 1;
        }

        Ok(board)
    }

    /// The complete, unfiltered leaderboard.
    pub async fn full_leaderboard(&self, id: SegmentId) -> Result<Leaderboard> {
        self.leaderboard(id, &LeaderboardQuery::default()).await
    }

    /// Number of entries on the unfiltered leaderboard; one request.
    pub async fn entry_count(&self, id: SegmentId) -> Result<u32> {
        let probe = self
            .leaderboard_page(id, &LeaderboardQuery::default(), 1, 1)
            .await?;
        Ok(probe.entry_count)
    }

    /// Number of efforts on the unfiltered leaderboard; one request.
    pub async fn effort_count(&self, id: SegmentId) -> Result<u32> {
        let probe = self
            .leaderboard_page(id, &LeaderboardQuery::default(), 1, 1)
            .await?;
        Ok(probe.effort_count)
    }

    /// Popular segments inside `bounds`, optionally limited to a range of
    /// climb categories (lowest, highest).
    pub async fn explore(
        &self,
        bounds: Bounds,
        climb_categories: Option<(ClimbCategory, ClimbCategory)>,
    ) -> Result<ExplorerResult> {
        let mut query = Query::new().push("bounds", bounds.to_query_value());
        if let Some((min, max)) = climb_categories {
            if min > max {
                return Err(Error::InvalidInput(format!(
                    "climb category range is inverted: {min:?} > {max:?}"
                )));
            }
            query = query.push("min_cat", min.code()).push("max_cat", max.code());
        }
        self.inner.get_object("/segments/explore", &query, "segment explorer result").await
    }
}
