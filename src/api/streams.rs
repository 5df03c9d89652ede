//! Streams service.

use std::sync::Arc;

use crate::client::{ClientInner, Query};
use crate::models::{ActivityId, ActivityStream, EffortId, SegmentId, StreamResolution, StreamTypes};
use crate::Result;

/// Service for raw sensor streams.
///
/// # Example
///
/// ```no_run
/// use strava_rs::models::{ActivityId, StreamResolution, StreamType, StreamTypes};
///
/// # async fn example(client: strava_rs::StravaClient) -> strava_rs::Result<()> {
/// let types = StreamTypes::new()
///     .with(StreamType::Time)
///     .with(StreamType::Heartrate);
///
/// let streams = client
///     .streams()
///     .activity(ActivityId::new(1234567890), &types, StreamResolution::Medium)
///     .await?;
/// for stream in streams {
///     println!("{}: {} points", stream.stream_type, stream.data.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct StreamsService {
    inner: Arc<ClientInner>,
}

impl StreamsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Streams of an activity.
    pub async fn activity(
        &self,
        id: ActivityId,
        types: &StreamTypes,
        resolution: StreamResolution,
    ) -> Result<Vec<ActivityStream>> {
        let path = format!("/activities/{id}/streams/{}", types.activity_path_segment()?);
        self.inner.get_list(&path, &resolution_query(resolution)).await
    }

    /// Streams of a segment; only `latlng`, `distance`, `altitude` and
    /// `time` are available.
    pub async fn segment(
        &self,
        id: SegmentId,
        types: &StreamTypes,
        resolution: StreamResolution,
    ) -> Result<Vec<ActivityStream>> {
        let path = format!("/segments/{id}/streams/{}", types.segment_path_segment()?);
        self.inner.get_list(&path, &resolution_query(resolution)).await
    }

    /// Streams of a segment effort; only `latlng`, `distance`, `altitude`
    /// and `time` are available.
    pub async fn effort(
        &self,
        id: EffortId,
        types: &StreamTypes,
        resolution: StreamResolution,
    ) -> Result<Vec<ActivityStream>> {
        let path = format!(
            "/segment_efforts/{id}/streams/{}",
            types.segment_path_segment()?
        );
        self.inner.get_list(&path, &resolution_query(resolution)).await
    }
}

fn resolution_query(resolution: StreamResolution) -> Query {
    Query::new().push_opt("resolution", resolution.as_str())
}
