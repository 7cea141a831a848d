use anyhow::Result;
use serde::Serialize;
use stockdash_lib::{Dashboard, FailureResult, MetricCard, PriceSeries};
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::Table;

use crate::sparkline;

const PAGE_TITLE: &str = "📈 Stock Market Dashboard";

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Markdown,
    Json,
    Csv,
}

#[derive(Serialize)]
struct SeriesRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Close")]
    close: String,
}

// -- Builders --

/// One header row of labels, one row of values.
fn build_metric_table(metrics: &[MetricCard]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(metrics.iter().map(|m| m.label.clone()));
    builder.push_record(metrics.iter().map(|m| m.value.clone()));
    builder.build()
}

fn build_series_rows(series: &PriceSeries) -> Vec<SeriesRow> {
    series
        .points()
        .iter()
        .map(|p| SeriesRow {
            date: p.date.to_string(),
            close: format!("{:.2}", p.close),
        })
        .collect()
}

/// Chart summary line under the sparkline.
fn chart_caption(dashboard: &Dashboard) -> String {
    let chart = &dashboard.chart;
    match (chart.series.first(), chart.series.last(), chart.series.close_range()) {
        (Some(first), Some(last), Some((low, high))) => format!(
            "{} ({}): {} points, {} ${:.2} -> {} ${:.2}, low ${:.2}, high ${:.2}",
            chart.series_name,
            chart.y_label,
            chart.series.len(),
            first.date,
            first.close,
            last.date,
            last.close,
            low,
            high
        ),
        _ => format!(
            "{}: no price data between {} and {}",
            chart.series_name, dashboard.start, dashboard.end
        ),
    }
}

fn render_chart(dashboard: &Dashboard) -> String {
    let line = sparkline::render(&dashboard.chart.series, sparkline::DEFAULT_WIDTH);
    if line.is_empty() {
        chart_caption(dashboard)
    } else {
        format!("{}\n{}", line, chart_caption(dashboard))
    }
}

fn render_table(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    out.push_str(PAGE_TITLE);
    out.push('\n');
    out.push_str(&format!(
        "{}  {} to {}\n\n",
        dashboard.symbol, dashboard.start, dashboard.end
    ));
    out.push_str(&build_metric_table(&dashboard.metrics).to_string());
    out.push_str("\n\n");
    out.push_str(&dashboard.chart.title);
    out.push('\n');
    out.push_str(&render_chart(dashboard));
    out.push_str("\n\nCompany Information\n\n");
    out.push_str(&dashboard.key_statistics.to_markdown());
    out.push('\n');
    out.push_str(&dashboard.financial_metrics.to_markdown());
    out
}

fn render_markdown(dashboard: &Dashboard) -> String {
    let mut table = build_metric_table(&dashboard.metrics);
    table.with(Style::markdown());

    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", PAGE_TITLE));
    out.push_str(&format!(
        "**{}** from {} to {}\n\n",
        dashboard.symbol, dashboard.start, dashboard.end
    ));
    out.push_str(&table.to_string());
    out.push_str(&format!("\n\n## {}\n\n", dashboard.chart.title));
    out.push_str(&format!("```text\n{}\n```\n\n", render_chart(dashboard)));
    out.push_str("## Company Information\n\n");
    out.push_str(&dashboard.key_statistics.to_markdown());
    out.push('\n');
    out.push_str(&dashboard.financial_metrics.to_markdown());
    out
}

// -- Printers --

pub fn print_dashboard(dashboard: &Dashboard, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(dashboard)),
        OutputFormat::Markdown => print!("{}", render_markdown(dashboard)),
        OutputFormat::Json => print_json(dashboard),
        OutputFormat::Csv => print_series_csv(dashboard.series())?,
    }
    Ok(())
}

pub fn print_series_csv(series: &PriceSeries) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_series_rows(series) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Error banner: the generic message, then the raw underlying error.
pub fn print_failure(failure: &FailureResult) {
    eprintln!("{}", failure);
    eprintln!("{}", failure.error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockdash_lib::{DashboardQuery, PricePoint, Snapshot};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_dashboard(points: Vec<PricePoint>) -> Dashboard {
        let query = DashboardQuery::new("AAPL", date(2024, 1, 1), date(2024, 1, 31));
        let snapshot = Snapshot {
            current_price: Some(189.5),
            fifty_two_week_high: Some(199.62),
            fifty_two_week_low: Some(164.08),
            market_cap: Some(2_500_000_000.0),
            sector: Some("Technology".to_string()),
            ..Default::default()
        };
        Dashboard::build(&query, PriceSeries::new(points), &snapshot)
    }

    fn sample_points() -> Vec<PricePoint> {
        vec![
            PricePoint { date: date(2024, 1, 2), close: 185.64 },
            PricePoint { date: date(2024, 1, 3), close: 184.25 },
            PricePoint { date: date(2024, 1, 4), close: 181.91 },
        ]
    }

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_metric_table_has_labels_and_values() {
        let dashboard = sample_dashboard(sample_points());
        let rendered = build_metric_table(&dashboard.metrics).to_string();
        for label in ["Current Price", "52 Week High", "52 Week Low", "Market Cap"] {
            assert!(rendered.contains(label), "missing {}", label);
        }
        assert!(rendered.contains("$189.50"));
        assert!(rendered.contains("$2,500,000,000"));
    }

    #[test]
    fn test_metric_table_markdown_structure() {
        let dashboard = sample_dashboard(sample_points());
        let mut table = build_metric_table(&dashboard.metrics);
        table.with(Style::markdown());
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        // header, separator, one row of values
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('|'));
        assert!(lines[1].contains("---"));
        assert!(lines[2].contains("$164.08"));
    }

    #[test]
    fn test_csv_series_rows() {
        let dashboard = sample_dashboard(sample_points());
        let csv = csv_from_rows(&build_series_rows(dashboard.series()));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Close");
        assert_eq!(lines[1], "2024-01-02,185.64");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_csv_empty_series_has_no_rows() {
        let rows = build_series_rows(&PriceSeries::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_chart_caption_with_data() {
        let dashboard = sample_dashboard(sample_points());
        let caption = chart_caption(&dashboard);
        assert!(caption.starts_with("Close Price (Price (USD)): 3 points"));
        assert!(caption.contains("2024-01-02 $185.64 -> 2024-01-04 $181.91"));
        assert!(caption.contains("low $181.91, high $185.64"));
    }

    #[test]
    fn test_chart_caption_empty() {
        let dashboard = sample_dashboard(Vec::new());
        assert_eq!(
            chart_caption(&dashboard),
            "Close Price: no price data between 2024-01-01 and 2024-01-31"
        );
    }

    #[test]
    fn test_table_layout_sections_in_order() {
        let dashboard = sample_dashboard(sample_points());
        let out = render_table(&dashboard);
        let title = out.find(PAGE_TITLE).unwrap();
        let chart = out.find("AAPL Stock Price").unwrap();
        let company = out.find("Company Information").unwrap();
        let key = out.find("### Key Statistics").unwrap();
        let fin = out.find("### Financial Metrics").unwrap();
        assert!(title < chart && chart < company && company < key && key < fin);
        assert!(out.contains("- **Sector:** Technology"));
        assert!(out.contains("- **Dividend Yield:** N/A"));
    }

    #[test]
    fn test_markdown_has_fenced_chart() {
        let dashboard = sample_dashboard(sample_points());
        let out = render_markdown(&dashboard);
        assert!(out.starts_with("# 📈 Stock Market Dashboard"));
        assert!(out.contains("## AAPL Stock Price\n\n```text\n"));
        assert!(out.contains("## Company Information"));
    }

    #[test]
    fn test_json_dashboard_serializable() {
        let dashboard = sample_dashboard(sample_points());
        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["symbol"], "AAPL");
        assert_eq!(json["metrics"][0]["label"], "Current Price");
        assert_eq!(json["metrics"][0]["value"], "$189.50");
        assert_eq!(json["chart"]["series"][0]["date"], "2024-01-02");
        assert_eq!(json["chart"]["series"].as_array().unwrap().len(), 3);
        assert_eq!(json["key_statistics"]["title"], "Key Statistics");
    }
}
