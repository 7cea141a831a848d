mod output;
mod sparkline;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use stockdash_lib::dashboard::DEFAULT_SYMBOL;
use stockdash_lib::validation;
use stockdash_lib::{DashboardError, DashboardQuery, FailureResult, ProviderConfig, QuoteTransformer};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "stockdash")]
#[command(about = "View price history and key financial metrics for a stock symbol")]
struct Cli {
    /// Stock symbol (e.g. AAPL, GOOGL, MSFT)
    #[arg(long, short, default_value = DEFAULT_SYMBOL)]
    symbol: String,

    /// Start date, YYYY-MM-DD (default: 365 days before the end date)
    #[arg(long)]
    start: Option<String>,

    /// End date, YYYY-MM-DD (default: today)
    #[arg(long)]
    end: Option<String>,

    /// Output format: table, markdown, json or csv
    #[arg(long, default_value = "table")]
    output: String,

    /// Data provider base URL (overrides STOCKDASH_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockdash=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let today = Utc::now().date_naive();
    let query = match build_query(&cli, today) {
        Ok(query) => query,
        Err(err) => {
            output::print_failure(&FailureResult {
                symbol: cli.symbol.trim().to_uppercase(),
                error: err.to_string(),
            });
            std::process::exit(1);
        }
    };

    let config = ProviderConfig::from_env().with_base_url(cli.base_url);
    let transformer = QuoteTransformer::new(config.build_client());

    match transformer.transform_on(&query, today).await {
        Ok(dashboard) => output::print_dashboard(&dashboard, &format)?,
        Err(failure) => {
            output::print_failure(&failure);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Parses the optional date flags; a missing start means one year before the end.
fn build_query(cli: &Cli, today: chrono::NaiveDate) -> Result<DashboardQuery, DashboardError> {
    let end = match &cli.end {
        Some(end) => validation::validate_date(end)?,
        None => today,
    };
    let start = match &cli.start {
        Some(start) => validation::validate_date(start)?,
        None => DashboardQuery::trailing_year(&cli.symbol, end).start,
    };
    Ok(DashboardQuery::new(&cli.symbol, start, end))
}
