//! Types for the `/v8/finance/chart` endpoint: price history in parallel arrays.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ApiError;

/// Top-level chart document: `{"chart": {"result": [...], "error": null}}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Chart {
    /// One entry per requested symbol. `None` when the provider reports an error.
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ApiError>,
}

/// History for one symbol. `timestamp[i]` lines up with every indicator array's `[i]`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ChartResult {
    pub meta: ChartMeta,

    /// Bar open times, Unix seconds. Missing when the range holds no trading days.
    #[serde(default)]
    pub timestamp: Vec<i64>,

    pub indicators: Indicators,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: String,

    pub currency: Option<String>,

    pub exchange_name: Option<String>,

    pub exchange_timezone_name: Option<String>,

    /// Exchange offset from UTC in seconds, used to place bars on local dates.
    #[serde(default)]
    pub gmtoffset: i64,

    pub regular_market_price: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteIndicator>,

    #[serde(default)]
    pub adjclose: Vec<AdjCloseIndicator>,
}

/// OHLCV arrays. Entries are `null` on days the provider has no print.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct QuoteIndicator {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AdjCloseIndicator {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

/// One trading day, flattened out of the parallel arrays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: Option<u64>,
}

impl ChartResult {
    /// Zips the parallel arrays into bars, in provider order.
    ///
    /// Rows without a finite close are skipped, never filled. Dates are the
    /// exchange-local calendar day of each bar's open time.
    pub fn bars(&self) -> Vec<DailyBar> {
        let Some(quote) = self.indicators.quote.first() else {
            return Vec::new();
        };
        let offset = self.meta.gmtoffset;

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let close = quote.close.get(i).copied().flatten().filter(|c| c.is_finite())?;
                let date = DateTime::from_timestamp(ts + offset, 0)?.date_naive();
                Some(DailyBar {
                    date,
                    open: quote.open.get(i).copied().flatten(),
                    high: quote.high.get(i).copied().flatten(),
                    low: quote.low.get(i).copied().flatten(),
                    close,
                    volume: quote.volume.get(i).copied().flatten(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(timestamps: Vec<i64>, closes: Vec<Option<f64>>, gmtoffset: i64) -> ChartResult {
        ChartResult {
            meta: ChartMeta {
                symbol: "AAPL".to_string(),
                currency: Some("USD".to_string()),
                exchange_name: None,
                exchange_timezone_name: None,
                gmtoffset,
                regular_market_price: None,
            },
            timestamp: timestamps,
            indicators: Indicators {
                quote: vec![QuoteIndicator {
                    close: closes,
                    ..Default::default()
                }],
                adjclose: Vec::new(),
            },
        }
    }

    #[test]
    fn bars_keep_provider_order() {
        // 2024-01-02 and 2024-01-03 at 14:30 UTC (09:30 New York)
        let result = result_with(
            vec![1704205800, 1704292200],
            vec![Some(185.64), Some(184.25)],
            -18000,
        );
        let bars = result.bars();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(bars[0].close, 185.64);
        assert_eq!(bars[1].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(bars[1].close, 184.25);
    }

    #[test]
    fn bars_skip_null_close() {
        let result = result_with(
            vec![1704205800, 1704292200, 1704378600],
            vec![Some(185.64), None, Some(181.91)],
            -18000,
        );
        let bars = result.bars();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].close, 181.91);
    }

    #[test]
    fn bars_empty_when_no_timestamps() {
        let result = result_with(Vec::new(), Vec::new(), 0);
        assert!(result.bars().is_empty());
    }

    #[test]
    fn bars_use_exchange_offset_for_date() {
        // 2024-01-02 03:00 UTC is still 2024-01-01 in New York.
        let result = result_with(vec![1704164400], vec![Some(1.0)], -18000);
        assert_eq!(
            result.bars()[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn bars_short_close_array() {
        let result = result_with(vec![1704205800, 1704292200], vec![Some(185.64)], -18000);
        assert_eq!(result.bars().len(), 1);
    }
}
