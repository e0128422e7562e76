//! Diagnostic Sink
//!
//! Where caller-facing warnings (deprecations) are sent.

/// Fire-and-forget warning channel
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// Sink that emits warnings as `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "zns::diagnostics", "{}", message);
    }
}
