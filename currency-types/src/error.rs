//! Error type for feed operations.

use crate::domain::CurrencyCode;

/// Failure to fetch or read a feed document.
///
/// Every operation of the client surfaces this one type; the variants only
/// carry detail for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Rate table has no entry for base currency {0}")]
    MissingBaseCurrency(CurrencyCode),
}
