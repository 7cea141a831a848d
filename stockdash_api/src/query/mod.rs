mod common;
pub use self::common::Query;

mod chart;
pub use self::chart::{ChartQuery, DAILY_INTERVAL};

mod summary;
pub use self::summary::{SummaryModule, SummaryQuery};
