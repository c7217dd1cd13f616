//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Settings for the `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter used when `RUST_LOG` is not set
    /// (`trace`/`debug`/`info`/`warn`/`error`).
    #[serde(default = "defaults::level")]
    pub level: String,
    /// Output format: `"pretty"` for development, `"json"` for
    /// log-aggregation pipelines.
    #[serde(default = "defaults::format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::level(),
            format: defaults::format(),
        }
    }
}

mod defaults {
    pub fn level() -> String {
        "info".into()
    }

    pub fn format() -> String {
        "pretty".into()
    }
}
