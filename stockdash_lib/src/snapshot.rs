//! Typed point-in-time snapshot of a security's descriptive and financial fields.

use serde::{Deserialize, Serialize};
use stockdash_api::types::QuoteSummaryResult;

/// The fields the dashboard displays. Each one may be absent; absence is an
/// expected state, not an error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub current_price: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    /// Fraction, e.g. `0.0123`.
    pub dividend_yield: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub total_revenue: Option<f64>,
    /// Fraction, e.g. `0.2531`.
    pub profit_margins: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub beta: Option<f64>,
}

impl Snapshot {
    /// Drops non-finite numbers and blank strings so every remaining `Some`
    /// is displayable.
    pub fn normalized(self) -> Self {
        fn num(v: Option<f64>) -> Option<f64> {
            v.filter(|v| v.is_finite())
        }
        fn text(v: Option<String>) -> Option<String> {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        }
        Self {
            current_price: num(self.current_price),
            fifty_two_week_high: num(self.fifty_two_week_high),
            fifty_two_week_low: num(self.fifty_two_week_low),
            market_cap: num(self.market_cap),
            trailing_pe: num(self.trailing_pe),
            dividend_yield: num(self.dividend_yield),
            sector: text(self.sector),
            industry: text(self.industry),
            total_revenue: num(self.total_revenue),
            profit_margins: num(self.profit_margins),
            debt_to_equity: num(self.debt_to_equity),
            beta: num(self.beta),
        }
    }
}

impl From<QuoteSummaryResult> for Snapshot {
    fn from(summary: QuoteSummaryResult) -> Self {
        let price = summary.price.unwrap_or_default();
        let detail = summary.summary_detail.unwrap_or_default();
        let financial = summary.financial_data.unwrap_or_default();
        let profile = summary.asset_profile.unwrap_or_default();

        Snapshot {
            current_price: financial.current_price.or(price.regular_market_price),
            fifty_two_week_high: detail.fifty_two_week_high,
            fifty_two_week_low: detail.fifty_two_week_low,
            market_cap: detail.market_cap.or(price.market_cap),
            trailing_pe: detail.trailing_pe,
            dividend_yield: detail.dividend_yield,
            sector: profile.sector,
            industry: profile.industry,
            total_revenue: financial.total_revenue,
            profit_margins: financial.profit_margins,
            debt_to_equity: financial.debt_to_equity,
            beta: detail.beta,
        }
        .normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdash_api::types::{AssetProfile, FinancialData, PriceModule, SummaryDetail};

    #[test]
    fn from_empty_summary_is_all_absent() {
        let snapshot = Snapshot::from(QuoteSummaryResult::default());
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn current_price_falls_back_to_market_price() {
        let summary = QuoteSummaryResult {
            price: Some(PriceModule {
                regular_market_price: Some(475.31),
                market_cap: Some(1.0e9),
                ..Default::default()
            }),
            ..Default::default()
        };
        let snapshot = Snapshot::from(summary);
        assert_eq!(snapshot.current_price, Some(475.31));
        assert_eq!(snapshot.market_cap, Some(1.0e9));
    }

    #[test]
    fn financial_data_wins_over_price_module() {
        let summary = QuoteSummaryResult {
            price: Some(PriceModule {
                regular_market_price: Some(100.0),
                market_cap: Some(1.0),
                ..Default::default()
            }),
            summary_detail: Some(SummaryDetail {
                market_cap: Some(2.0),
                ..Default::default()
            }),
            financial_data: Some(FinancialData {
                current_price: Some(101.0),
                ..Default::default()
            }),
            asset_profile: None,
        };
        let snapshot = Snapshot::from(summary);
        assert_eq!(snapshot.current_price, Some(101.0));
        assert_eq!(snapshot.market_cap, Some(2.0));
    }

    #[test]
    fn blank_profile_strings_are_absent() {
        let summary = QuoteSummaryResult {
            asset_profile: Some(AssetProfile {
                sector: Some("  ".to_string()),
                industry: Some(" Consumer Electronics ".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let snapshot = Snapshot::from(summary);
        assert_eq!(snapshot.sector, None);
        assert_eq!(snapshot.industry.as_deref(), Some("Consumer Electronics"));
    }

    #[test]
    fn normalized_drops_non_finite() {
        let snapshot = Snapshot {
            trailing_pe: Some(f64::INFINITY),
            beta: Some(f64::NAN),
            debt_to_equity: Some(12.0),
            ..Default::default()
        }
        .normalized();
        assert_eq!(snapshot.trailing_pe, None);
        assert_eq!(snapshot.beta, None);
        assert_eq!(snapshot.debt_to_equity, Some(12.0));
    }
}
