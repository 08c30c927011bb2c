use std::env;
use std::time::Duration;

use crate::error::{DblpError, Result};

/// Default DBLP endpoint
pub const DEFAULT_BASE_URL: &str = "https://dblp.uni-trier.de";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "DBLP_BASE_URL";

/// Environment variable overriding the request timeout, in whole seconds
pub const TIMEOUT_ENV: &str = "DBLP_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the DBLP client
///
/// # Example
///
/// ```
/// use dblp_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_base_url("https://dblp.org")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.effective_base_url(), "https://dblp.org");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the DBLP web interface
    pub base_url: Option<String>,
    /// Per-request timeout enforced by the HTTP transport
    pub timeout: Duration,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Load configuration from `DBLP_BASE_URL` and `DBLP_TIMEOUT_SECS`
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = Some(base_url);
            }
        }

        if let Ok(timeout) = env::var(TIMEOUT_ENV) {
            let secs: u64 = timeout.trim().parse().map_err(|_| {
                DblpError::InvalidConfig(format!("{TIMEOUT_ENV} must be whole seconds, got {timeout:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Base URL without a trailing slash
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("dblp-client/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
