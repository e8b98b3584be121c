//! Diagnostic sink that writes to the `tracing` error stream.

use currency_types::{DiagnosticSink, FeedError};

/// Emits every failure as a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn failure(&self, operation: &str, error: &FeedError) {
        tracing::error!(error = %error, "{}", operation);
    }
}
