//! # Currency Types
//!
//! Domain types and port traits for the currency feed client.
//! This crate has ZERO external IO dependencies - only data structures,
//! lookup rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Feed data (currency codes, country records, rate tables)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - The single feed error type

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ALLOWED_CURRENCIES, CountryDirectory, CountryRecord, CurrencyCode, CurrencyDirectory,
    ExchangeRate, ExchangeRateTable, RateMap, country_key_from_language,
};
pub use error::FeedError;
pub use ports::{CurrencyFeed, DiagnosticSink};
