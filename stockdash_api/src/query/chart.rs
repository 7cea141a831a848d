//! Query builder for the `/v8/finance/chart/{symbol}` endpoint.

use chrono::{Days, NaiveDate};
use url::Url;

use super::common::{midnight_utc_timestamp, Query};

/// Bar size requested from the chart endpoint: one bar per trading day.
pub const DAILY_INTERVAL: &str = "1d";

/// Price history request for one symbol.
///
/// With no date range the provider's trailing one-year window is requested.
/// Both bounds are inclusive: `period2` is sent as midnight UTC of the day
/// after `end`.
#[derive(Clone, Debug)]
pub struct ChartQuery {
    symbol: String,
    range: Option<(NaiveDate, NaiveDate)>,
}

impl ChartQuery {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            range: None,
        }
    }

    /// Restricts the history to `start..=end`.
    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.range = Some((start, end));
        self
    }

    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.range
    }
}

impl Query for ChartQuery {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn path_segments(&self) -> Vec<String> {
        vec![
            "v8".to_string(),
            "finance".to_string(),
            "chart".to_string(),
            self.symbol.clone(),
        ]
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        match self.range {
            Some((start, end)) => {
                let period2 = end.checked_add_days(Days::new(1)).unwrap_or(end);
                url.query_pairs_mut()
                    .append_pair("period1", &midnight_utc_timestamp(start).to_string())
                    .append_pair("period2", &midnight_utc_timestamp(period2).to_string());
            }
            None => {
                url.query_pairs_mut().append_pair("range", "1y");
            }
        }
        url.query_pairs_mut()
            .append_pair("interval", DAILY_INTERVAL)
            .append_pair("events", "history");
        url
    }
}
