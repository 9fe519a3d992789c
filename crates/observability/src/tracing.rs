//! Tracing/logging initialization.
//!
//! Filtering is configurable via `RUST_LOG` and defaults to `info`. Logs go to
//! stderr so that stdout stays free for command output.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "STOCKROUTE_LOG_FORMAT";

/// Output format for process logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, with timestamps.
    #[default]
    Json,
    /// Human-readable compact text.
    Text,
}

impl LogFormat {
    /// Read the format from `STOCKROUTE_LOG_FORMAT`, falling back to JSON.
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    /// Resolve a configured value; unset or unknown names mean JSON.
    pub fn from_setting(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// Parse a format name (case-insensitive). Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "text" | "pretty" | "compact" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Initialize tracing/logging for the process, format from `STOCKROUTE_LOG_FORMAT`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(LogFormat::from_env());
}

/// Initialize tracing/logging with an explicit format.
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };
}
