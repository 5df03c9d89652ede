//! Athlete statistics service.

use std::sync::Arc;

use crate::client::{ClientInner, Query};
use crate::models::{Athlete, AthleteId, Stats};
use crate::Result;

/// Service for rolled-up athlete totals.
pub struct StatsService {
    inner: Arc<ClientInner>,
}

impl StatsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Totals for an athlete.
    pub async fn for_athlete(&self, id: AthleteId) -> Result<Stats> {
        self.inner
            .get_object(
                &format!("/athletes/{id}/stats"),
                &Query::new(),
                &format!("stats of athlete {id}"),
            )
            .await
    }

    /// Totals for the authenticated athlete.
    ///
    /// Costs two requests: the athlete id is looked up first.
    pub async fn current(&self) -> Result<Stats> {
        let athlete: Athlete = self
            .inner
            .get_object("/athlete", &Query::new(), "current athlete")
            .await?;
        self.for_athlete(athlete.summary.meta.id).await
    }
}
