//! Server configuration.

use std::env;

/// Default bind address for the query endpoint.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Default absolute site URL when `SITE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://docs.example.com";

/// Base-path prefix under which content counts as deprecated.
pub const DEPRECATED_PREFIX: &str = "/deprecated/";

/// Environment variable overriding the absolute site URL.
const SITE_URL_VAR: &str = "SITE_URL";

/// Configuration for the HTTP query endpoint.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Absolute site URL prefixed onto result paths.
    pub base_url: String,
    /// Base-path prefix marking deprecated content.
    pub deprecated_prefix: String,
    /// Address to bind the server to.
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            deprecated_prefix: DEPRECATED_PREFIX.to_string(),
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

impl ServerConfig {
    /// Builds a configuration, taking the site URL from `SITE_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(SITE_URL_VAR) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    /// Sets the bind address.
    pub fn with_addr(mut self, addr: &str) -> Self {
        self.addr = addr.to_string();
        self
    }

    /// Sets the absolute site URL.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}
