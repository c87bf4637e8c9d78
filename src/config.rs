//! Client configuration
//!
//! The API key is an explicit configuration value sourced from the CLI or
//! the `OTX_API_KEY` environment variable, never a compiled-in constant.

use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Default base URL of the OTX API
pub const DEFAULT_BASE_URL: &str = "https://otx.alienvault.com";

/// Default number of entries requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Environment variable consulted when no API key is passed explicitly
pub const API_KEY_ENV_VAR: &str = "OTX_API_KEY";

/// Configuration for the OTX client
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// API key sent with every request
    pub api_key: String,
    /// Entries requested per page
    pub page_size: u32,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a config with the given API key and defaults for everything else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(30),
            user_agent: format!("otx-spider/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Read the API key from the `OTX_API_KEY` environment variable
    pub fn api_key_from_env() -> Result<String> {
        std::env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::config(format!(
                    "no API key given and {API_KEY_ENV_VAR} is not set"
                ))
            })
    }
}

// The API key is a credential; keep it out of Debug output.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("page_size", &self.page_size)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for client config
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    page_size: Option<u32>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the config; the API key is required
    pub fn build(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::missing_field("api_key"))?;

        let mut config = ClientConfig::new(api_key);
        if let Some(base_url) = self.base_url {
            url::Url::parse(&base_url)?;
            config.base_url = base_url;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        Ok(config)
    }
}
