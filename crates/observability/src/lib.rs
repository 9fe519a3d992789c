//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// The log format comes from `STOCKROUTE_LOG_FORMAT` (`json` or `text`,
/// default `json`). This is safe to call multiple times; subsequent calls
/// become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use crate::tracing::LogFormat;
