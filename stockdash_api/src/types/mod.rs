mod envelope;
pub use self::envelope::ApiError;

mod chart;
pub use self::chart::{
    AdjCloseIndicator, Chart, ChartMeta, ChartResponse, ChartResult, DailyBar, Indicators,
    QuoteIndicator,
};

mod summary;
pub use self::summary::{
    AssetProfile, FinancialData, PriceModule, QuoteSummary, QuoteSummaryResponse,
    QuoteSummaryResult, SummaryDetail,
};
