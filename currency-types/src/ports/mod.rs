//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The service layer depends on these traits, not concrete implementations.

mod diagnostics;
mod feed;

pub use diagnostics::DiagnosticSink;
pub use feed::CurrencyFeed;
