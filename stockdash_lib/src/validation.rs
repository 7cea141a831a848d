use chrono::NaiveDate;

use crate::dashboard::DashboardQuery;
use crate::error::DashboardError;

pub const MAX_SYMBOL_LENGTH: usize = 20;

/// Validate a ticker symbol: trim, uppercase, and allow only letters, digits
/// and the `. - ^ =` punctuation used by index, share-class and FX tickers.
pub fn validate_symbol(input: &str) -> Result<String, DashboardError> {
    let symbol = input.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(DashboardError::InvalidInput(
            "symbol is empty".to_string(),
        ));
    }
    if symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(DashboardError::InvalidInput(format!(
            "symbol exceeds maximum length of {} characters",
            MAX_SYMBOL_LENGTH
        )));
    }
    if let Some(bad) = symbol
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
    {
        return Err(DashboardError::InvalidInput(format!(
            "symbol '{}' contains invalid character '{}'",
            symbol, bad
        )));
    }
    Ok(symbol)
}

/// Validate a YYYY-MM-DD date string.
pub fn validate_date(input: &str) -> Result<NaiveDate, DashboardError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        DashboardError::InvalidInput(format!(
            "invalid date '{}'. Expected format: YYYY-MM-DD (e.g., 2024-06-01)",
            trimmed
        ))
    })
}

/// Validate `start <= end <= today`.
pub fn validate_date_range(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<(), DashboardError> {
    if start > end {
        return Err(DashboardError::InvalidInput(format!(
            "start date {} is after end date {}",
            start, end
        )));
    }
    if end > today {
        return Err(DashboardError::InvalidInput(format!(
            "end date {} is in the future (today is {})",
            end, today
        )));
    }
    Ok(())
}

/// Validate a whole query, returning it with the symbol normalized.
pub fn validate_query(
    query: &DashboardQuery,
    today: NaiveDate,
) -> Result<DashboardQuery, DashboardError> {
    let symbol = validate_symbol(&query.symbol)?;
    validate_date_range(query.start, query.end, today)?;
    Ok(DashboardQuery::new(&symbol, query.start, query.end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- Symbol validation --

    #[test]
    fn symbol_uppercased_and_trimmed() {
        assert_eq!(validate_symbol("  aapl ").unwrap(), "AAPL");
    }

    #[test]
    fn symbol_with_punctuation() {
        assert_eq!(validate_symbol("brk-b").unwrap(), "BRK-B");
        assert_eq!(validate_symbol("^gspc").unwrap(), "^GSPC");
        assert_eq!(validate_symbol("eurusd=x").unwrap(), "EURUSD=X");
        assert_eq!(validate_symbol("shop.to").unwrap(), "SHOP.TO");
    }

    #[test]
    fn symbol_empty() {
        assert!(validate_symbol("").is_err());
        assert!(validate_symbol("   ").is_err());
    }

    #[test]
    fn symbol_too_long() {
        assert!(validate_symbol(&"A".repeat(21)).is_err());
        assert!(validate_symbol(&"A".repeat(20)).is_ok());
    }

    #[test]
    fn symbol_bad_characters() {
        assert!(validate_symbol("AA PL").is_err());
        assert!(validate_symbol("AAPL/../x").is_err());
        assert!(validate_symbol("AAPL?x=1").is_err());
    }

    // -- Date validation --

    #[test]
    fn date_valid() {
        assert_eq!(validate_date("2024-06-01").unwrap(), date(2024, 6, 1));
    }

    #[test]
    fn date_invalid() {
        assert!(validate_date("2024-13-01").is_err());
        assert!(validate_date("06/01/2024").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn range_ok_including_single_day() {
        let today = date(2024, 6, 15);
        assert!(validate_date_range(date(2024, 1, 1), date(2024, 6, 15), today).is_ok());
        assert!(validate_date_range(today, today, today).is_ok());
    }

    #[test]
    fn range_inverted() {
        let err = validate_date_range(date(2024, 6, 2), date(2024, 6, 1), date(2024, 6, 15))
            .unwrap_err();
        assert!(err.to_string().contains("after end date"));
    }

    #[test]
    fn range_future_end() {
        let err = validate_date_range(date(2024, 6, 1), date(2024, 6, 16), date(2024, 6, 15))
            .unwrap_err();
        assert!(err.to_string().contains("future"));
    }

    #[test]
    fn query_normalized() {
        let query = DashboardQuery::new("msft", date(2024, 1, 1), date(2024, 2, 1));
        let validated = validate_query(&query, date(2024, 6, 15)).unwrap();
        assert_eq!(validated.symbol, "MSFT");
        assert_eq!(validated.start, query.start);
    }
}
