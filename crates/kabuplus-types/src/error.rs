//! Error types for kabuplus.

use thiserror::Error;

/// Result type alias for kabuplus operations.
pub type Result<T> = std::result::Result<T, KabuPlusError>;

/// Errors that can occur while fetching and converting price data.
///
/// Every failure is terminal: nothing is retried and no partial output is
/// returned alongside an error.
#[derive(Error, Debug)]
pub enum KabuPlusError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with something other than `200 OK`.
    #[error("Unexpected status: {0}")]
    Status(String),

    /// Response body was not valid Shift-JIS.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Decoded CSV could not be converted to the KDB schema.
    #[error("Transform error: {0}")]
    Transform(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A source row was narrower than the price feed layout.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("row has {found} fields, expected at least {min}", min = crate::PriceRow::MIN_FIELDS)]
pub struct RowWidthError {
    /// Number of fields actually present.
    pub found: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_width_message() {
        let err = RowWidthError { found: 3 };
        assert_eq!(err.to_string(), "row has 3 fields, expected at least 14");
    }

    #[test]
    fn test_status_message() {
        let err = KabuPlusError::Status("401 Unauthorized".to_string());
        assert_eq!(err.to_string(), "Unexpected status: 401 Unauthorized");
    }
}
