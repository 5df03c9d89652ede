//! Routes service.

use std::sync::Arc;

use crate::client::{ClientInner, Query};
use crate::models::{AthleteId, Route, RouteId};
use crate::Result;

/// Service for planned routes.
pub struct RoutesService {
    inner: Arc<ClientInner>,
}

impl RoutesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Routes created by an athlete.
    pub async fn list(&self, athlete_id: AthleteId) -> Result<Vec<Route>> {
        self.inner
            .get_list(&format!("/athletes/{athlete_id}/routes"), &Query::new())
            .await
    }

    /// Get one route.
    pub async fn get(&self, route_id: RouteId) -> Result<Route> {
        self.inner
            .get_object(&format!("/routes/{route_id}"), &Query::new(), &format!("route {route_id}"))
            .await
    }
}
