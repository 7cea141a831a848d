//! Types for the `/v10/finance/quoteSummary` endpoint: descriptive and
//! financial fields grouped into modules.
//!
//! Every field is optional. The provider omits fields freely and sends `{}`
//! for numbers it has no value for.

use serde::{Deserialize, Serialize};

use super::envelope::raw_number;
use super::ApiError;

/// Top-level document: `{"quoteSummary": {"result": [...], "error": null}}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummary,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QuoteSummary {
    pub result: Option<Vec<QuoteSummaryResult>>,
    pub error: Option<ApiError>,
}

/// The requested modules for one symbol. Modules not requested, or not
/// available for the security, are `None`.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    pub price: Option<PriceModule>,
    pub summary_detail: Option<SummaryDetail>,
    pub financial_data: Option<FinancialData>,
    pub asset_profile: Option<AssetProfile>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PriceModule {
    pub symbol: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "raw_number")]
    pub regular_market_price: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub market_cap: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetail {
    #[serde(default, deserialize_with = "raw_number")]
    pub previous_close: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub fifty_two_week_high: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub fifty_two_week_low: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub market_cap: Option<f64>,
    #[serde(rename = "trailingPE", default, deserialize_with = "raw_number")]
    pub trailing_pe: Option<f64>,
    /// Fraction, e.g. `0.0123` for 1.23%.
    #[serde(default, deserialize_with = "raw_number")]
    pub dividend_yield: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub beta: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    #[serde(default, deserialize_with = "raw_number")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "raw_number")]
    pub total_revenue: Option<f64>,
    /// Fraction, e.g. `0.253` for 25.30%.
    #[serde(default, deserialize_with = "raw_number")]
    pub profit_margins: Option<f64>,
    /// Reported as a percentage figure (e.g. `181.3`), shown as-is.
    #[serde(default, deserialize_with = "raw_number")]
    pub debt_to_equity: Option<f64>,
    pub financial_currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfile {
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
}
