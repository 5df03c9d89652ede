//! Rate-limit tracking from Strava response headers.
//!
//! Strava reports consumption on every response through two headers, each a
//! `short,long` pair of integers:
//!
//! - `X-RateLimit-Usage`: requests used in the current 15 minute window and day
//! - `X-RateLimit-Limit`: the allowance for those same windows
//!
//! The [`RateLimitTracker`] keeps the most recently observed values. Writes
//! are last-writer-wins: with concurrent requests the published usage may be
//! taken from a request that started earlier but finished later.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use reqwest::header::HeaderMap;
use tokio::sync::watch;

use crate::Error;

/// Response header carrying the current usage (`X-RateLimit-Usage`).
pub const USAGE_HEADER: &str = "x-ratelimit-usage";
/// Response header carrying the current limits (`X-RateLimit-Limit`).
pub const LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Requests consumed in the short-term (15 minute) and long-term (daily) windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Usage {
    /// Requests used in the current 15 minute window
    pub short_term: u32,
    /// Requests used today
    pub long_term: u32,
}

/// Allowed requests in the short-term (15 minute) and long-term (daily) windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Limit {
    /// Requests allowed per 15 minutes
    pub short_term: u32,
    /// Requests allowed per day
    pub long_term: u32,
}

impl Usage {
    /// Create a usage record.
    pub fn new(short_term: u32, long_term: u32) -> Self {
        Self {
            short_term,
            long_term,
        }
    }
}

impl Limit {
    /// Create a limit record.
    pub fn new(short_term: u32, long_term: u32) -> Self {
        Self {
            short_term,
            long_term,
        }
    }
}

fn parse_pair(value: &str) -> Result<(u32, u32), Error> {
    let invalid = || Error::InvalidInput(format!("expected 'short,long' pair, got {value:?}"));

    let (short, long) = value.split_once(',').ok_or_else(invalid)?;
    let short = short.trim().parse::<u32>().map_err(|_| invalid())?;
    let long = long.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok((short, long))
}

impl FromStr for Usage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pair(s).map(|(short, long)| Usage::new(short, long))
    }
}

impl FromStr for Limit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pair(s).map(|(short, long)| Limit::new(short, long))
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.short_term, self.long_term)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.short_term, self.long_term)
    }
}

/// A snapshot of the last observed usage together with the limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitStatus {
    /// Last observed usage
    pub usage: Usage,
    /// Last observed limits
    pub limit: Limit,
}

impl RateLimitStatus {
    /// Requests left in the 15 minute window, or `None` before any limit was seen.
    pub fn short_term_remaining(&self) -> Option<u32> {
        (self.limit.short_term > 0).then(|| self.limit.short_term.saturating_sub(self.usage.short_term))
    }

    /// Requests left today, or `None` before any limit was seen.
    pub fn long_term_remaining(&self) -> Option<u32> {
        (self.limit.long_term > 0).then(|| self.limit.long_term.saturating_sub(self.usage.long_term))
    }

    /// Returns `true` when either window has been used up.
    pub fn is_exhausted(&self) -> bool {
        self.short_term_remaining() == Some(0) || self.long_term_remaining() == Some(0)
    }
}

/// Holds the most recently observed usage and limits for one client.
///
/// Cloning a tracker yields a handle to the same state, so several clients
/// may share one tracker. Subscribers receive every newly published status.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: strava_rs::StravaClient) -> strava_rs::Result<()> {
/// let mut changes = client.rate_limits().subscribe();
///
/// tokio::spawn(async move {
///     while changes.changed().await.is_ok() {
///         let status = *changes.borrow_and_update();
///         println!("15 minute usage: {}", status.usage.short_term);
///     }
/// });
///
/// client.athletes().current().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RateLimitTracker {
    state: Arc<watch::Sender<RateLimitStatus>>,
}

impl Default for RateLimitTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimitTracker {
    /// Create a tracker with zeroed usage and limits.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(RateLimitStatus::default());
        Self { state: Arc::new(tx) }
    }

    /// The latest status.
    pub fn status(&self) -> RateLimitStatus {
        *self.state.borrow()
    }

    /// The latest observed usage.
    pub fn usage(&self) -> Usage {
        self.status().usage
    }

    /// The latest observed limits.
    pub fn limit(&self) -> Limit {
        self.status().limit
    }

    /// Subscribe to status changes.
    pub fn subscribe(&self) -> watch::Receiver<RateLimitStatus> {
        self.state.subscribe()
    }

    /// Replace the published status.
    pub fn publish(&self, status: RateLimitStatus) {
        self.state.send_replace(status);
    }

    /// Update the status from response headers.
    ///
    /// Each header is applied only if present and well formed; otherwise the
    /// previous value is kept. Returns the new status when anything changed.
    pub fn record(&self, headers: &HeaderMap) -> Option<RateLimitStatus> {
        let usage = header_value::<Usage>(headers, USAGE_HEADER);
        let limit = header_value::<Limit>(headers, LIMIT_HEADER);

        if usage.is_none() && limit.is_none() {
            return None;
        }

        let previous = self.status();
        let status = RateLimitStatus {
            usage: usage.unwrap_or(previous.usage),
            limit: limit.unwrap_or(previous.limit),
        };
        self.publish(status);

        tracing::trace!(usage = %status.usage, limit = %status.limit, "rate limit status updated");
        Some(status)
    }
}

fn header_value<T>(headers: &HeaderMap, name: &str) -> Option<T>
where
    T: FromStr<Err = Error>,
{
    let raw = headers.get(name)?;
    let text = match raw.to_str() {
        Ok(text) => text,
        Err(_) => {
            tracing::warn!(header = name, "rate limit header is not valid ASCII");
            return None;
        }
    };

    match text.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(header = name, error = %e, "ignoring malformed rate limit header");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(usage: Option<&'static str>, limit: Option<&'static str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(u) = usage {
            map.insert(USAGE_HEADER, HeaderValue::from_static(u));
        }
        if let Some(l) = limit {
            map.insert(LIMIT_HEADER, HeaderValue::from_static(l));
        }
        map
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!("10,20".parse::<Usage>().unwrap(), Usage::new(10, 20));
        assert_eq!(" 600, 30000 ".parse::<Limit>().unwrap(), Limit::new(600, 30000));
        assert!("10".parse::<Usage>().is_err());
        assert!("a,b".parse::<Usage>().is_err());
        assert!("-1,2".parse::<Usage>().is_err());
    }

    #[test]
    fn test_record_both_headers() {
        let tracker = RateLimitTracker::new();
        let status = tracker.record(&headers(Some("10,20"), Some("600,30000"))).unwrap();

        assert_eq!(status.usage, Usage::new(10, 20));
        assert_eq!(tracker.limit(), Limit::new(600, 30000));
        assert_eq!(tracker.status().short_term_remaining(), Some(590));
    }

    #[test]
    fn test_missing_headers_keep_previous_state() {
        let tracker = RateLimitTracker::new();
        tracker.record(&headers(Some("10,20"), Some("600,30000")));

        assert!(tracker.record(&HeaderMap::new()).is_none());
        assert_eq!(tracker.usage(), Usage::new(10, 20));

        tracker.record(&headers(Some("11,21"), None));
        assert_eq!(tracker.usage(), Usage::new(11, 21));
        assert_eq!(tracker.limit(), Limit::new(600, 30000));
    }

    #[test]
    fn test_malformed_header_is_ignored() {
        let tracker = RateLimitTracker::new();
        tracker.record(&headers(Some("10,20"), None));
        tracker.record(&headers(Some("garbage"), None));
        assert_eq!(tracker.usage(), Usage::new(10, 20));
    }

    #[test]
    fn test_subscribers_see_new_status() {
        let tracker = RateLimitTracker::new();
        let mut rx = tracker.subscribe();
        assert!(!rx.has_changed().unwrap());

        tracker.record(&headers(Some("5,6"), Some("600,30000")));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().usage, Usage::new(5, 6));
    }

    #[test]
    fn test_clones_share_state() {
        let tracker = RateLimitTracker::new();
        let other = tracker.clone();
        other.record(&headers(Some("1,2"), None));
        assert_eq!(tracker.usage(), Usage::new(1, 2));
    }

    #[test]
    fn test_exhausted() {
        let status = RateLimitStatus {
            usage: Usage::new(600, 900),
            limit: Limit::new(600, 30000),
        };
        assert!(status.is_exhausted());
        assert!(!RateLimitStatus::default().is_exhausted());
    }
}
