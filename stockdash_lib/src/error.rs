//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream provider errors
/// and adding input validation failures.
#[derive(Debug)]
pub enum DashboardError {
    /// An error from the underlying provider client.
    Api(stockdash_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<stockdash_api::Error> for DashboardError {
    fn from(e: stockdash_api::Error) -> Self {
        Self::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn api_error_passes_message_through() {
        let err = DashboardError::from(stockdash_api::Error::SymbolNotFound {
            symbol: "ZZZZ".to_string(),
            description: "No data found".to_string(),
        });
        assert_eq!(err.to_string(), "symbol not found: ZZZZ (No data found)");
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_input_display() {
        let err = DashboardError::InvalidInput("symbol is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: symbol is empty");
        assert!(err.source().is_none());
    }
}
