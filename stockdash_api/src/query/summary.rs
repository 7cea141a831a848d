//! Query builder for the `/v10/finance/quoteSummary/{symbol}` endpoint.

use url::Url;

use super::common::Query;

/// A quote-summary module: a named group of fields the provider returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryModule {
    Price,
    SummaryDetail,
    FinancialData,
    AssetProfile,
}

impl SummaryModule {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryModule::Price => "price",
            SummaryModule::SummaryDetail => "summaryDetail",
            SummaryModule::FinancialData => "financialData",
            SummaryModule::AssetProfile => "assetProfile",
        }
    }
}

/// Snapshot request for one symbol.
///
/// Defaults to the modules the dashboard reads: price, summary detail,
/// financial data and asset profile.
#[derive(Clone, Debug)]
pub struct SummaryQuery {
    symbol: String,
    modules: Vec<SummaryModule>,
}

impl SummaryQuery {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            modules: vec![
                SummaryModule::Price,
                SummaryModule::SummaryDetail,
                SummaryModule::FinancialData,
                SummaryModule::AssetProfile,
            ],
        }
    }

    pub fn modules(&self) -> &[SummaryModule] {
        &self.modules
    }
}

impl Query for SummaryQuery {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn path_segments(&self) -> Vec<String> {
        vec![
            "v10".to_string(),
            "finance".to_string(),
            "quoteSummary".to_string(),
            self.symbol.clone(),
        ]
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let modules = self
            .modules
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("modules", &modules);
        url
    }
}
