//! Upload request and status models.

use serde::{Deserialize, Serialize};

use super::enums::ActivityType;
use super::primitives::{ActivityId, UploadId, null_as_default};

/// File format of an uploaded activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// Garmin FIT
    Fit,
    /// Gzipped FIT
    FitGz,
    /// Training Center XML
    Tcx,
    /// Gzipped TCX
    TcxGz,
    /// GPS Exchange Format
    Gpx,
    /// Gzipped GPX
    GpxGz,
}

impl DataFormat {
    /// Wire token sent as `data_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Fit => "fit",
            DataFormat::FitGz => "fit.gz",
            DataFormat::Tcx => "tcx",
            DataFormat::TcxGz => "tcx.gz",
            DataFormat::Gpx => "gpx",
            DataFormat::GpxGz => "gpx.gz",
        }
    }

    /// Guess the format from a file name's extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        [
            DataFormat::FitGz,
            DataFormat::TcxGz,
            DataFormat::GpxGz,
            DataFormat::Fit,
            DataFormat::Tcx,
            DataFormat::Gpx,
        ]
        .into_iter()
        .find(|format| lower.ends_with(&format!(".{}", format.as_str())))
    }
}

/// Metadata sent alongside an uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    /// File format
    pub data_format: DataFormat,
    /// Sport; the server detects it from the file when unset
    pub activity_type: Option<ActivityType>,
    /// Title
    pub name: Option<String>,
    /// Free text description
    pub description: Option<String>,
    /// Flag as a commute
    pub commute: bool,
    /// Flag as recorded on a trainer
    pub trainer: bool,
    /// Caller-chosen identifier echoed back in the status
    pub external_id: Option<String>,
}

impl UploadRequest {
    /// Metadata with only the file format set.
    pub fn new(data_format: DataFormat) -> Self {
        Self {
            data_format,
            activity_type: None,
            name: None,
            description: None,
            commute: false,
            trainer: false,
            external_id: None,
        }
    }

    /// Set the sport.
    pub fn with_activity_type(mut self, activity_type: ActivityType) -> Self {
        self.activity_type = Some(activity_type);
        self
    }

    /// Set the title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Flag as a commute.
    pub fn with_commute(mut self, commute: bool) -> Self {
        self.commute = commute;
        self
    }

    /// Flag as recorded on a trainer.
    pub fn with_trainer(mut self, trainer: bool) -> Self {
        self.trainer = trainer;
        self
    }

    /// Set the external id.
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }
}

/// Processing state of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadState {
    /// Still being processed
    Processing,
    /// The created activity was deleted
    Deleted,
    /// Processing failed
    Error,
    /// The activity is ready
    Ready,
}

const STATUS_PROCESSING: &str = "Your activity is still being processed.";
const STATUS_DELETED: &str = "The created activity has been deleted.";
const STATUS_ERROR: &str = "There was an error processing your activity.";

/// Status of an upload as returned by `POST /uploads` and `GET /uploads/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadStatus {
    /// Upload id
    #[serde(deserialize_with = "null_as_default")]
    pub id: UploadId,
    /// External id of the upload
    pub external_id: Option<String>,
    /// Error description when processing failed
    pub error: Option<String>,
    /// Human-readable status
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Created activity, once ready
    pub activity_id: Option<ActivityId>,
}

impl UploadStatus {
    /// Map the status text to a state.
    ///
    /// Unrecognized text means the upload is ready unless an error is set.
    pub fn state(&self) -> UploadState {
        match self.status.as_str() {
            STATUS_PROCESSING => UploadState::Processing,
            STATUS_DELETED => UploadState::Deleted,
            STATUS_ERROR => UploadState::Error,
            _ if self.error.is_some() => UploadState::Error,
            _ => UploadState::Ready,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(text: &str) -> UploadStatus {
        UploadStatus {
            status: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_upload_state_literals() {
        assert_eq!(
            status("Your activity is still being processed.").state(),
            UploadState::Processing
        );
        assert_eq!(
            status("The created activity has been deleted.").state(),
            UploadState::Deleted
        );
        assert_eq!(
            status("There was an error processing your activity.").state(),
            UploadState::Error
        );
        assert_eq!(status("Your activity is ready.").state(), UploadState::Ready);
    }

    #[test]
    fn test_unknown_status_with_error_field() {
        let upload = UploadStatus {
            status: "Something else".to_string(),
            error: Some("duplicate of activity 1".to_string()),
            ..Default::default()
        };
        assert_eq!(upload.state(), UploadState::Error);
    }

    #[test]
    fn test_data_format_from_file_name() {
        assert_eq!(DataFormat::from_file_name("ride.FIT"), Some(DataFormat::Fit));
        assert_eq!(
            DataFormat::from_file_name("run.gpx.gz"),
            Some(DataFormat::GpxGz)
        );
        assert_eq!(DataFormat::from_file_name("notes.txt"), None);
        assert_eq!(DataFormat::TcxGz.as_str(), "tcx.gz");
    }
}
