//! Administrative-region lookup configuration.

use serde::{Deserialize, Serialize};

/// Settings for the upstream Indonesian administrative-regions API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeographyConfig {
    /// Base URL of the regions API (no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Province whose regencies/cities populate the first selector.
    #[serde(default = "default_province")]
    pub province_id: String,
    /// Upstream request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    /// How long a fetched region list stays cached, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
    /// Maximum number of cached region lists.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

impl Default for GeographyConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            province_id: default_province(),
            request_timeout_seconds: default_timeout(),
            cache_ttl_seconds: default_cache_ttl(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.emsifa.com/api-wilayah-indonesia/api".to_string()
}

fn default_province() -> String {
    "13".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_cache_ttl() -> u64 {
    24 * 60 * 60
}

fn default_cache_capacity() -> u64 {
    1_000
}
