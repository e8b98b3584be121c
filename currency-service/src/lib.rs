//! # Currency Service
//!
//! The lookups callers use: the allowed currency list, the country
//! directory, locale to currency resolution, rate tables and single rates.
//!
//! ## Architecture
//!
//! - `service/` - Application service (filtering and derivation over the feed)
//! - `diagnostics/` - Default [`DiagnosticSink`](currency_types::DiagnosticSink) backed by `tracing`
//!
//! The service is generic over `F: CurrencyFeed`, allowing different feed
//! implementations to be injected.

pub mod diagnostics;
pub mod service;


pub use diagnostics::TracingSink;
pub use service::CurrencyExchangeApi;
