//! Gear service.

use std::sync::Arc;

use crate::client::{ClientInner, Query};
use crate::models::{Gear, GearId};
use crate::{Error, Result};

/// Service for bike and shoe details.
pub struct GearService {
    inner: Arc<ClientInner>,
}

impl GearService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get one piece of gear.
    pub async fn get(&self, id: &GearId) -> Result<Gear> {
        if id.as_str().is_empty() {
            return Err(Error::InvalidInput("gear id must not be empty".to_string()));
        }
        self.inner
            .get_object(&format!("/gear/{id}"), &Query::new(), &format!("gear {id}"))
            .await
    }
}
