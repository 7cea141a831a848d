//! Library layer for stockdash: turns a ticker and date range into
//! render-ready dashboard output.
//!
//! Wraps the `stockdash_api` provider client behind the [`QuoteProvider`]
//! trait, normalizes the provider snapshot into typed optional fields, and
//! formats metric cards, statistic blocks and the closing-price series.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod provider;
pub mod snapshot;
pub mod transform;
pub mod validation;

pub use stockdash_api;

pub use config::ProviderConfig;
pub use dashboard::{
    ChartSpec, Dashboard, DashboardQuery, FailureResult, MetricCard, PricePoint, PriceSeries,
    StatBlock,
};
pub use error::DashboardError;
pub use provider::QuoteProvider;
pub use snapshot::Snapshot;
pub use transform::QuoteTransformer;
