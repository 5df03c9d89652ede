//! Query-string composition.
//!
//! Parameters keep their insertion order and are form-encoded, so the same
//! inputs always render to the same bytes. Dates are rendered as Unix epoch
//! seconds or ISO-8601 depending on what the endpoint expects.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Error, Result};

/// Largest page size the API honours.
pub const MAX_PER_PAGE: u32 = 200;

/// Ordered query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// An empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value`.
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append `key=value` only when a value is present.
    pub fn push_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Append a timestamp as Unix epoch seconds.
    pub fn epoch(self, key: &str, at: DateTime<Utc>) -> Self {
        self.push(key, at.timestamp())
    }

    /// Append a timestamp as ISO-8601.
    pub fn iso8601(self, key: &str, at: DateTime<Utc>) -> Self {
        self.push(key, at.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// Append validated `page` and `per_page` parameters.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `page` is zero or `per_page` is outside
    /// `1..=200`.
    pub fn page(self, page: u32, per_page: u32) -> Result<Self> {
        validate_page(page, per_page)?;
        Ok(self.push("page", page).push("per_page", per_page))
    }

    /// The parameters in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns `true` if no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as a form-encoded query string without the leading `?`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// Check pagination arguments before any request is made.
pub fn validate_page(page: u32, per_page: u32) -> Result<()> {
    if page == 0 {
        return Err(Error::InvalidInput("page numbers start at 1".to_string()));
    }
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(Error::InvalidInput(format!(
            "per_page must be between 1 and {MAX_PER_PAGE}, got {per_page}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_encode_keeps_order_and_escapes() {
        let query = Query::new()
            .push("name", "Morning Ride & Coffee")
            .push("type", "ride")
            .push("distance", 1500.5);

        assert_eq!(
            query.encode(),
            "name=Morning+Ride+%26+Coffee&type=ride&distance=1500.5"
        );
    }

    #[test]
    fn test_encode_is_deterministic() {
        let build = || {
            Query::new()
                .epoch("after", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
                .page(2, 200)
                .unwrap()
                .encode()
        };
        assert_eq!(build(), build());
        assert_eq!(build(), "after=1704067200&page=2&per_page=200");
    }

    #[test]
    fn test_dates() {
        let at = Utc.with_ymd_and_hms(2015, 3, 14, 9, 26, 53).unwrap();
        let query = Query::new().epoch("before", at).iso8601("start_date_local", at);
        assert_eq!(
            query.pairs(),
            &[
                ("before".to_string(), "1426325213".to_string()),
                ("start_date_local".to_string(), "2015-03-14T09:26:53Z".to_string()),
            ]
        );
    }

    #[test]
    fn test_push_opt() {
        let query = Query::new().push_opt("gender", Some("F")).push_opt::<&str>("age_group", None);
        assert_eq!(query.encode(), "gender=F");
    }

    #[test]
    fn test_page_bounds() {
        assert!(Query::new().page(1, 1).is_ok());
        assert!(Query::new().page(1, 200).is_ok());
        assert!(matches!(Query::new().page(0, 30), Err(Error::InvalidInput(_))));
        assert!(matches!(Query::new().page(1, 0), Err(Error::InvalidInput(_))));
        assert!(matches!(Query::new().page(1, 201), Err(Error::InvalidInput(_))));
    }
}
