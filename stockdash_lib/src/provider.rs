//! The data-provider seam: everything the transformer needs from the outside world.

use chrono::NaiveDate;
use stockdash_api::{ChartQuery, Client, SummaryQuery};

use crate::dashboard::{PricePoint, PriceSeries};
use crate::error::DashboardError;
use crate::snapshot::Snapshot;

/// Source of price history and snapshots.
///
/// Implementations may return an empty history, omit any snapshot field, or
/// fail outright for unknown symbols; the transformer tolerates all three.
#[allow(async_fn_in_trait)]
pub trait QuoteProvider {
    /// Daily closes for `symbol` over `start..=end`, chronological.
    async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DashboardError>;

    /// Descriptive and financial fields for `symbol`.
    async fn fetch_snapshot(&self, symbol: &str) -> Result<Snapshot, DashboardError>;
}

impl QuoteProvider for Client {
    async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DashboardError> {
        let query = ChartQuery::new(symbol).with_range(start, end);
        let chart = self.get_chart(&query).await?;
        let points = chart
            .bars()
            .into_iter()
            .map(|bar| PricePoint {
                date: bar.date,
                close: bar.close,
            })
            .collect::<Vec<_>>();
        tracing::debug!("{}: {} bars between {} and {}", symbol, points.len(), start, end);
        Ok(PriceSeries::new(points))
    }

    async fn fetch_snapshot(&self, symbol: &str) -> Result<Snapshot, DashboardError> {
        let summary = self.get_quote_summary(&SummaryQuery::new(symbol)).await?;
        Ok(Snapshot::from(summary))
    }
}
