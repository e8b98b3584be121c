//! Diagnostic sink port.

use crate::FeedError;

/// Receives a message naming the failed operation, together with the error,
/// before that error is handed back to the caller.
pub trait DiagnosticSink: Send + Sync {
    fn failure(&self, operation: &str, error: &FeedError);
}
