//! The quote transformer: ticker + date range in, render-ready dashboard out.

use chrono::{NaiveDate, Utc};

use crate::dashboard::{Dashboard, DashboardQuery, FailureResult};
use crate::error::DashboardError;
use crate::provider::QuoteProvider;
use crate::validation;

/// Resolves a [`DashboardQuery`] against a [`QuoteProvider`].
///
/// Holds no state beyond the provider; every call fetches afresh. The history
/// is fetched first and the snapshot second, one after the other. Any error,
/// whether from validation or from either fetch, ends the request with a
/// single [`FailureResult`] and nothing else.
pub struct QuoteTransformer<P> {
    provider: P,
}

impl<P: QuoteProvider> QuoteTransformer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs the request, validating the range against today's UTC date.
    pub async fn transform(&self, query: &DashboardQuery) -> Result<Dashboard, FailureResult> {
        self.transform_on(query, Utc::now().date_naive()).await
    }

    /// Runs the request, validating the range against `today`.
    pub async fn transform_on(
        &self,
        query: &DashboardQuery,
        today: NaiveDate,
    ) -> Result<Dashboard, FailureResult> {
        let display_symbol = query.symbol.trim().to_uppercase();
        self.resolve(query, today).await.map_err(|err| {
            tracing::warn!("Request for {} failed: {}", display_symbol, err);
            FailureResult {
                symbol: display_symbol,
                error: err.to_string(),
            }
        })
    }

    async fn resolve(
        &self,
        query: &DashboardQuery,
        today: NaiveDate,
    ) -> Result<Dashboard, DashboardError> {
        let query = validation::validate_query(query, today)?;
        tracing::info!(
            "Fetching {} from {} to {}",
            query.symbol,
            query.start,
            query.end
        );

        let series = self
            .provider
            .fetch_history(&query.symbol, query.start, query.end)
            .await?;
        let snapshot = self.provider.fetch_snapshot(&query.symbol).await?;

        tracing::info!("{}: {} closing prices", query.symbol, series.len());
        Ok(Dashboard::build(&query, series, &snapshot))
    }
}
