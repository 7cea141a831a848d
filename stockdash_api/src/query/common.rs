//! Shared query infrastructure: the [`Query`] trait and date helpers.

use chrono::NaiveDate;
use url::Url;

/// Trait implemented by all query builders. Provides the request path and
/// URL parameter serialization.
pub trait Query {
    /// The ticker symbol this query targets.
    fn symbol(&self) -> &str;

    /// Path segments appended to the API base URL, e.g.
    /// `["v8", "finance", "chart", "AAPL"]`.
    fn path_segments(&self) -> Vec<String>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Unix timestamp of midnight UTC on `date`.
pub(crate) fn midnight_utc_timestamp(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|datetime| datetime.and_utc().timestamp())
        .unwrap_or_default()
}
