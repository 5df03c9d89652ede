//! Page-number pagination.
//!
//! Strava list endpoints take a 1-based `page` and a `per_page` size and
//! signal the end of a collection with an empty page. Two consumers are
//! offered: [`collect_pages`] gathers everything into a `Vec`, and
//! [`PaginatedStream`] yields items lazily as pages arrive.

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;

use super::query::{validate_page, Query, MAX_PER_PAGE};
use super::ClientInner;
use crate::Result;

/// Default number of items per page for auto-paginating operations.
pub const DEFAULT_PAGE_SIZE: u32 = MAX_PER_PAGE;

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// Fetch page 1, 2, ... of `path` until an empty page comes back.
///
/// `on_item` sees every item as it is appended. With a `limit`, no page is
/// requested once that many items are held and the result is cut to the
/// limit. Any failed page fails the whole call.
pub(crate) async fn collect_pages<T: DeserializeOwned>(
    inner: &ClientInner,
    path: &str,
    query: &Query,
    per_page: u32,
    limit: Option<usize>,
    mut on_item: impl FnMut(&T),
) -> Result<Vec<T>> {
    validate_page(1, per_page)?;

    let mut items = Vec::new();
    let mut page = 1;

    loop {
        if limit.is_some_and(|max| items.len() >= max) {
            break;
        }

        let batch: Vec<T> = inner
            .get_list(path, &query.clone().page(page, per_page)?)
            .await?;
        tracing::trace!(path, page, count = batch.len(), "fetched page");

        if batch.is_empty() {
            break;
        }

        for item in batch {
            on_item(&item);
            items.push(item);
        }
        page += 1;
    }

    if let Some(max) = limit {
        items.truncate(max);
    }
    Ok(items)
}

/// A stream that lazily fetches pages from a paginated API endpoint.
///
/// This stream yields individual items from each page, automatically
/// fetching the next page when the current one is exhausted. The first
/// empty page ends the stream; an error is yielded once and ends it too.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use strava_rs::api::ActivitiesQuery;
///
/// # async fn example(client: strava_rs::StravaClient) -> strava_rs::Result<()> {
/// let mut stream = client.activities().list_stream(&ActivitiesQuery::default());
///
/// while let Some(result) = stream.next().await {
///     let activity = result?;
///     println!("{}", activity.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page by number.
    fetch_page: Box<dyn Fn(u32) -> BoxFuture<'static, Result<Vec<T>>> + Send + Sync>,
    /// Current page of items being yielded.
    current_items: VecDeque<T>,
    /// Next page to fetch, None if exhausted.
    next_page: Option<u32>,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<Vec<T>>>>,
}

impl<T> PaginatedStream<T>
where
    T: Send + 'static,
{
    /// Create a new paginated stream starting at page 1.
    pub fn new<F>(fetch_page: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Vec<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            next_page: Some(1),
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(items)) => {
                        this.pending_fetch = None;

                        if items.is_empty() {
                            this.next_page = None;
                            return Poll::Ready(None);
                        }

                        this.current_items = items.into();
                        this.next_page = this.next_page.map(|page| page + 1);
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None; // Stop on error
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => {
                        return Poll::Pending;
                    }
                }
            }

            if let Some(page) = this.next_page {
                this.pending_fetch = Some((this.fetch_page)(page));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Builder for creating paginated streams over a list endpoint.
pub(crate) struct PaginatedStreamBuilder<T> {
    inner: Arc<ClientInner>,
    path: String,
    query: Query,
    per_page: u32,
    _marker: std::marker::PhantomData<T>,
}

impl<T: DeserializeOwned + Send + 'static> PaginatedStreamBuilder<T> {
    /// Create a new builder.
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>) -> Self {
        Self {
            inner,
            path: path.into(),
            query: Query::new(),
            per_page: DEFAULT_PAGE_SIZE,
            _marker: std::marker::PhantomData,
        }
    }

    /// Set the number of items per page.
    pub(crate) fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the parameters sent with every page.
    pub(crate) fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Build the stream.
    pub(crate) fn build(self) -> PaginatedStream<T> {
        let inner = self.inner;
        let path = self.path;
        let query = self.query;
        let per_page = self.per_page;

        PaginatedStream::new(move |page: u32| {
            let inner = inner.clone();
            let path = path.clone();
            let query = query.clone();

            Box::pin(async move {
                let query = query.page(page, per_page)?;
                tracing::trace!(path = %path, page, "streaming page");
                inner.get_list::<T>(&path, &query).await
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_stream_stops_at_first_empty_page() {
        let calls = Arc::new(AtomicU32::new(0));
        let seen = calls.clone();

        let stream = PaginatedStream::new(move |page: u32| {
            seen.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                Ok(match page {
                    1 => vec![1, 2, 3],
                    2 => vec![4],
                    _ => Vec::new(),
                })
            })
        });

        let items: Vec<i32> = stream.map(|r| r.unwrap()).collect().await;
        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_stream_ends_after_error() {
        let mut stream = PaginatedStream::<i32>::new(|_page: u32| {
            Box::pin(async { Err(crate::Error::InvalidInput("boom".into())) })
        });

        assert!(stream.next().await.unwrap().is_err());
        assert!(stream.next().await.is_none());
    }
}
