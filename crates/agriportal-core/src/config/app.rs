//! HTTP server and CORS configuration.

use serde::{Deserialize, Serialize};

/// Settings for the `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "defaults::host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "defaults::port")]
    pub port: u16,
    /// Cross-origin settings for the browser frontend.
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Settings for the `[server.cors]` section.
///
/// `"*"` in origins or headers means allow-any and is only meant for
/// development setups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API.
    #[serde(default = "defaults::origins")]
    pub allowed_origins: Vec<String>,
    /// Methods allowed in cross-origin requests.
    #[serde(default = "defaults::methods")]
    pub allowed_methods: Vec<String>,
    /// Headers allowed in cross-origin requests.
    #[serde(default = "defaults::headers")]
    pub allowed_headers: Vec<String>,
    /// Seconds a preflight response may be cached.
    #[serde(default = "defaults::max_age")]
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::origins(),
            allowed_methods: defaults::methods(),
            allowed_headers: defaults::headers(),
            max_age_seconds: defaults::max_age(),
        }
    }
}

mod defaults {
    pub fn host() -> String {
        "0.0.0.0".into()
    }

    pub fn port() -> u16 {
        8080
    }

    pub fn origins() -> Vec<String> {
        vec!["*".into()]
    }

    pub fn methods() -> Vec<String> {
        ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn headers() -> Vec<String> {
        vec!["*".into()]
    }

    pub fn max_age() -> u64 {
        3600
    }
}
