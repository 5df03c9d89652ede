//! Uploads service.
//!
//! Files are sent as multipart form content. Unlike every other endpoint,
//! the upload authenticates with an `Authorization: Bearer` header.

use std::path::Path;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::auth::bearer;
use crate::client::decode_object;
use crate::client::{ClientInner, Query};
use crate::models::{UploadId, UploadRequest, UploadStatus};
use crate::{Error, Result};

/// Service for uploading activity files and polling their processing.
///
/// # Example
///
/// ```no_run
/// use strava_rs::models::{DataFormat, UploadRequest, UploadState};
///
/// # async fn example(client: strava_rs::StravaClient) -> strava_rs::Result<()> {
/// let request = UploadRequest::new(DataFormat::Gpx).with_name("Evening loop");
/// let mut status = client.uploads().upload_file("ride.gpx", &request).await?;
///
/// while status.state() == UploadState::Processing {
///     tokio::time::sleep(std::time::Duration::from_secs(2)).await;
///     status = client.uploads().check_status(status.id).await?;
/// }
/// println!("activity: {:?}", status.activity_id);
/// # Ok(())
/// # }
/// ```
pub struct UploadsService {
    inner: Arc<ClientInner>,
}

impl UploadsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Upload an activity file from disk.
    pub async fn upload_file(
        &self,
        path: impl AsRef<Path>,
        request: &UploadRequest,
    ) -> Result<UploadStatus> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::InvalidInput(format!("{} has no usable file name", path.display()))
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await?;
        self.upload_bytes(&file_name, bytes, request).await
    }

    /// Upload an activity file held in memory.
    pub async fn upload_bytes(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        request: &UploadRequest,
    ) -> Result<UploadStatus> {
        if bytes.is_empty() {
            return Err(Error::InvalidInput(format!("{file_name} is empty")));
        }
        if let Some(activity_type) = request.activity_type {
            if !activity_type.is_known() {
                return Err(Error::InvalidInput(
                    "activity type must be a known sport".to_string(),
                ));
            }
        }

        let form = upload_form(request)
            .part("file", Part::bytes(bytes).file_name(file_name.to_string()));

        tracing::info!(file = file_name, data_type = request.data_format.as_str(), "uploading activity file");

        let token = self.inner.auth.access_token();
        let body = self
            .inner
            .transport
            .post_multipart(&self.inner.endpoint_url("/uploads"), &bearer(&token), form)
            .await?;
        decode_object(&body, "upload status")
    }

    /// Current processing status of an upload.
    pub async fn check_status(&self, id: UploadId) -> Result<UploadStatus> {
        self.inner
            .get_object(&format!("/uploads/{id}"), &Query::new(), &format!("upload {id}"))
            .await
    }
}

fn upload_form(request: &UploadRequest) -> Form {
    let mut form = Form::new()
        .text("data_type", request.data_format.as_str())
        .text("commute", u8::from(request.commute).to_string())
        .text("trainer", u8::from(request.trainer).to_string());

    if let Some(activity_type) = request.activity_type {
        form = form.text("activity_type", activity_type.as_str());
    }
    if let Some(name) = &request.name {
        form = form.text("name", name.clone());
    }
    if let Some(description) = &request.description {
        form = form.text("description", description.clone());
    }
    if let Some(external_id) = &request.external_id {
        form = form.text("external_id", external_id.clone());
    }
    form
}
