//! Segment efforts service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::client::paginated::{
    collect_pages, PaginatedStream, PaginatedStreamBuilder, DEFAULT_PAGE_SIZE,
};
use crate::client::{ClientInner, Query};
use crate::models::{AthleteId, SegmentEffort, SegmentId};
use crate::Result;

/// Service for listing efforts on a segment.
pub struct EffortsService {
    inner: Arc<ClientInner>,
}

/// Filters for a segment's efforts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffortsQuery {
    /// Only efforts by this athlete
    pub athlete_id: Option<AthleteId>,
    /// Only efforts starting at or after this local time
    pub start_date_local: Option<DateTime<Utc>>,
    /// Only efforts starting at or before this local time
    pub end_date_local: Option<DateTime<Utc>>,
}

impl EffortsQuery {
    pub(crate) fn to_query(self) -> Query {
        let mut query = Query::new().push_opt("athlete_id", self.athlete_id);
        if let Some(start) = self.start_date_local {
            query = query.iso8601("start_date_local", start);
        }
        if let Some(end) = self.end_date_local {
            query = query.iso8601("end_date_local", end);
        }
        query
    }
}

impl EffortsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// One page of efforts on a segment.
    pub async fn list(
        &self,
        segment_id: SegmentId,
        query: &EffortsQuery,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<SegmentEffort>> {
        let query = query.to_query().page(page, per_page)?;
        self.inner
            .get_list(&format!("/segments/{segment_id}/all_efforts"), &query)
            .await
    }

    /// Every effort on a segment matching `query`.
    pub async fn list_all(
        &self,
        segment_id: SegmentId,
        query: &EffortsQuery,
    ) -> Result<Vec<SegmentEffort>> {
        collect_pages(
            &self.inner,
            &format!("/segments/{segment_id}/all_efforts"),
            &query.to_query(),
            DEFAULT_PAGE_SIZE,
            None,
            |_| {},
        )
        .await
    }

    /// Stream every effort on a segment matching `query`.
    pub fn list_stream(
        &self,
        segment_id: SegmentId,
        query: &EffortsQuery,
    ) -> PaginatedStream<SegmentEffort> {
        PaginatedStreamBuilder::new(
            self.inner.clone(),
            format!("/segments/{segment_id}/all_efforts"),
        )
        .query(query.to_query())
        .build()
    }
}
