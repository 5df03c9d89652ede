//! Clubs service.

use std::sync::Arc;

use crate::client::paginated::{collect_pages, DEFAULT_PAGE_SIZE};
use crate::client::{ClientInner, Query};
use crate::models::{ActivitySummary, AthleteSummary, Club, ClubId, ClubSummary};
use crate::Result;

/// Service for club operations.
pub struct ClubsService {
    inner: Arc<ClientInner>,
}

impl ClubsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get one club.
    pub async fn get(&self, id: ClubId) -> Result<Club> {
        self.inner
            .get_object(&format!("/clubs/{id}"), &Query::new(), &format!("club {id}"))
            .await
    }

    /// Clubs the authenticated athlete belongs to.
    pub async fn list(&self) -> Result<Vec<ClubSummary>> {
        self.inner.get_list("/athlete/clubs", &Query::new()).await
    }

    /// Members of a club.
    pub async fn members(&self, id: ClubId) -> Result<Vec<AthleteSummary>> {
        self.inner
            .get_list(&format!("/clubs/{id}/members"), &Query::new())
            .await
    }

    /// The most recent page of a club's activities, using the server's
    /// default page size.
    pub async fn latest_activities(&self, id: ClubId) -> Result<Vec<ActivitySummary>> {
        self.inner
            .get_list(&format!("/clubs/{id}/activities"), &Query::new())
            .await
    }

    /// One page of a club's activities.
    pub async fn activities(
        &self,
        id: ClubId,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<ActivitySummary>> {
        let query = Query::new().page(page, per_page)?;
        self.inner
            .get_list(&format!("/clubs/{id}/activities"), &query)
            .await
    }

    /// Every activity the API exposes for a club.
    pub async fn all_activities(&self, id: ClubId) -> Result<Vec<ActivitySummary>> {
        collect_pages(
            &self.inner,
            &format!("/clubs/{id}/activities"),
            &Query::new(),
            DEFAULT_PAGE_SIZE,
            None,
            |_| {},
        )
        .await
    }
}
