//! Request and render-ready output types.
//!
//! Everything here is built fresh for one request and never mutated after
//! construction.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::format::{format_number, format_text, FieldFormat};
use crate::snapshot::Snapshot;

/// Symbol shown when the user has not typed one.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Days of history shown when the user has not picked a range.
pub const DEFAULT_LOOKBACK_DAYS: u64 = 365;

/// A ticker symbol and an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardQuery {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DashboardQuery {
    pub fn new(symbol: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.to_string(),
            start,
            end,
        }
    }

    /// `symbol` over the year ending on `today`.
    pub fn trailing_year(symbol: &str, today: NaiveDate) -> Self {
        let start = today
            .checked_sub_days(Days::new(DEFAULT_LOOKBACK_DAYS))
            .unwrap_or(today);
        Self::new(symbol, start, today)
    }
}

/// One closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Chronological closing prices, exactly as the provider returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Lowest and highest close, or `None` for an empty series.
    pub fn close_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.close, p.close)),
            Some((lo, hi)) => Some((lo.min(p.close), hi.max(p.close))),
        })
    }
}

/// A labelled, already-formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

impl MetricCard {
    pub fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    fn number(label: &str, value: Option<f64>, format: FieldFormat) -> Self {
        Self::new(label, format_number(value, format))
    }

    fn text(label: &str, value: Option<&str>) -> Self {
        Self::new(label, format_text(value))
    }
}

/// A titled list of cards, rendered as a markdown section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatBlock {
    pub title: String,
    pub items: Vec<MetricCard>,
}

impl StatBlock {
    /// ```text
    /// ### Key Statistics
    /// - **Sector:** Technology
    /// ```
    pub fn to_markdown(&self) -> String {
        let mut out = format!("### {}\n", self.title);
        for item in &self.items {
            out.push_str(&format!("- **{}:** {}\n", item.label, item.value));
        }
        out
    }
}

/// Line chart description: x = date, y = close.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_name: String,
    pub series: PriceSeries,
}

impl ChartSpec {
    pub fn close_price(symbol: &str, series: PriceSeries) -> Self {
        Self {
            title: format!("{} Stock Price", symbol),
            x_label: "Date".to_string(),
            y_label: "Price (USD)".to_string(),
            series_name: "Close Price".to_string(),
            series,
        }
    }
}

/// Everything the UI shell renders for a successful request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Current price, 52-week high, 52-week low, market cap, in that order.
    pub metrics: Vec<MetricCard>,
    pub chart: ChartSpec,
    pub key_statistics: StatBlock,
    pub financial_metrics: StatBlock,
}

impl Dashboard {
    pub fn build(query: &DashboardQuery, series: PriceSeries, snapshot: &Snapshot) -> Self {
        Self {
            symbol: query.symbol.clone(),
            start: query.start,
            end: query.end,
            metrics: metric_row(snapshot),
            chart: ChartSpec::close_price(&query.symbol, series),
            key_statistics: key_statistics(snapshot),
            financial_metrics: financial_metrics(snapshot),
        }
    }

    pub fn series(&self) -> &PriceSeries {
        &self.chart.series
    }
}

fn metric_row(s: &Snapshot) -> Vec<MetricCard> {
    vec![
        MetricCard::number("Current Price", s.current_price, FieldFormat::Currency),
        MetricCard::number("52 Week High", s.fifty_two_week_high, FieldFormat::Currency),
        MetricCard::number("52 Week Low", s.fifty_two_week_low, FieldFormat::Currency),
        MetricCard::number("Market Cap", s.market_cap, FieldFormat::CurrencyWhole),
    ]
}

fn key_statistics(s: &Snapshot) -> StatBlock {
    StatBlock {
        title: "Key Statistics".to_string(),
        items: vec![
            MetricCard::text("Sector", s.sector.as_deref()),
            MetricCard::text("Industry", s.industry.as_deref()),
            MetricCard::number("P/E Ratio", s.trailing_pe, FieldFormat::Ratio),
            MetricCard::number("Dividend Yield", s.dividend_yield, FieldFormat::Percent),
        ],
    }
}

fn financial_metrics(s: &Snapshot) -> StatBlock {
    StatBlock {
        title: "Financial Metrics".to_string(),
        items: vec![
            MetricCard::number("Revenue", s.total_revenue, FieldFormat::CurrencyWhole),
            MetricCard::number("Profit Margin", s.profit_margins, FieldFormat::Percent),
            MetricCard::number("Debt to Equity", s.debt_to_equity, FieldFormat::Ratio),
            MetricCard::number("Beta", s.beta, FieldFormat::Ratio),
        ],
    }
}

/// Terminal outcome of a failed request. Replaces every other output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Error fetching data for {symbol}. Please check the stock symbol and try again.")]
pub struct FailureResult {
    pub symbol: String,
    /// Raw text of the underlying error.
    pub error: String,
}
