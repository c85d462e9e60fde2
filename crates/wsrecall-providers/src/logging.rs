//! Logging capability handed to the aggregator by its host.
//!
//! The aggregator never reaches for a global logger; whoever calls it decides
//! where diagnostics go (a launcher's log sink, `tracing`, a test recorder).

/// Fire-and-forget diagnostics sink
pub trait Logger {
    fn log_exception(&self, source: &str, message: &str, error: &dyn std::error::Error);

    fn log_info(&self, source: &str, message: &str);
}

/// Forwards to the `tracing` macros; `source` becomes a structured field
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log_exception(&self, source: &str, message: &str, error: &dyn std::error::Error) {
        tracing::error!(source, error = %error, "{}", message);
    }

    fn log_info(&self, source: &str, message: &str) {
        tracing::info!(source, "{}", message);
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log_exception(&self, _source: &str, _message: &str, _error: &dyn std::error::Error) {}

    fn log_info(&self, _source: &str, _message: &str) {}
}
