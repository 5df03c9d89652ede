//! Athletes service.

use std::sync::Arc;

use crate::client::{ClientInner, Query};
use crate::models::{Athlete, AthleteId, AthleteParameter, AthleteSummary, Gender, SegmentEffort};
use crate::{Error, Result};

/// Service for athlete profile and social graph operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: strava_rs::StravaClient) -> strava_rs::Result<()> {
/// let me = client.athletes().current().await?;
/// let followers = client.athletes().followers().await?;
/// println!("{} has {} followers", me.summary.full_name(), followers.len());
/// # Ok(())
/// # }
/// ```
pub struct AthletesService {
    inner: Arc<ClientInner>,
}

impl AthletesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// The authenticated athlete.
    pub async fn current(&self) -> Result<Athlete> {
        self.inner.get_object("/athlete", &Query::new(), "current athlete").await
    }

    /// Another athlete's public profile.
    pub async fn get(&self, id: AthleteId) -> Result<AthleteSummary> {
        self.inner
            .get_object(&format!("/athletes/{id}"), &Query::new(), &format!("athlete {id}"))
            .await
    }

    /// Athletes the authenticated athlete follows.
    pub async fn friends(&self) -> Result<Vec<AthleteSummary>> {
        self.inner.get_list("/athlete/friends", &Query::new()).await
    }

    /// Athletes following the authenticated athlete.
    pub async fn followers(&self) -> Result<Vec<AthleteSummary>> {
        self.inner.get_list("/athlete/followers", &Query::new()).await
    }

    /// Athletes following another athlete.
    pub async fn followers_of(&self, id: AthleteId) -> Result<Vec<AthleteSummary>> {
        self.inner
            .get_list(&format!("/athletes/{id}/followers"), &Query::new())
            .await
    }

    /// Athletes followed by both the authenticated athlete and `id`.
    pub async fn both_following(&self, id: AthleteId) -> Result<Vec<AthleteSummary>> {
        self.inner
            .get_list(&format!("/athletes/{id}/both-following"), &Query::new())
            .await
    }

    /// Efforts holding a segment record (KOM/QOM) for an athlete.
    pub async fn records(&self, id: AthleteId) -> Result<Vec<SegmentEffort>> {
        self.inner
            .get_list(&format!("/athletes/{id}/koms"), &Query::new())
            .await
    }

    /// Change one field of the authenticated athlete's profile.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] when `parameter` is
    /// [`Weight`](AthleteParameter::Weight) and `value` is not a number.
    pub async fn update(&self, parameter: AthleteParameter, value: impl ToString) -> Result<Athlete> {
        let value = value.to_string();
        if parameter == AthleteParameter::Weight && value.parse::<f64>().is_err() {
            return Err(Error::InvalidInput(format!(
                "weight must be a number of kilograms, got {value:?}"
            )));
        }
        let query = Query::new().push(parameter.as_str(), value);
        self.inner.put_object("/athlete", &query, "updated athlete").await
    }

    /// Change the authenticated athlete's sex.
    pub async fn update_sex(&self, gender: Gender) -> Result<Athlete> {
        let query = Query::new().push("sex", gender.as_str());
        self.inner.put_object("/athlete", &query, "updated athlete").await
    }
}
