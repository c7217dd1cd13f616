//! Database configuration.

use serde::{Deserialize, Serialize};

/// PostgreSQL pool settings, read from the `[database]` section.
///
/// Only `url` is mandatory; pool sizing and timeouts fall back to the
/// values in `defaults`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "defaults::max_connections")]
    pub max_connections: u32,
    /// Connections kept open even when idle.
    #[serde(default = "defaults::min_connections")]
    pub min_connections: u32,
    /// How long to wait for a connection before giving up, in seconds.
    #[serde(default = "defaults::connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// How long an idle connection may linger before being closed, in seconds.
    #[serde(default = "defaults::idle_timeout")]
    pub idle_timeout_seconds: u64,
}

mod defaults {
    pub fn max_connections() -> u32 {
        20
    }

    pub fn min_connections() -> u32 {
        5
    }

    pub fn connect_timeout() -> u64 {
        10
    }

    pub fn idle_timeout() -> u64 {
        300
    }
}
