//! API-key request authentication
//!
//! OTX authenticates with a single static header; there is no token
//! refresh or challenge flow.

use reqwest::RequestBuilder;
use std::fmt;

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-OTX-API-KEY";

/// Applies the OTX API key to outgoing requests
#[derive(Clone)]
pub struct ApiKeyAuth {
    value: String,
}

impl ApiKeyAuth {
    /// Create a new authenticator with the given key
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Apply the key header to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(API_KEY_HEADER, &self.value)
    }
}

impl fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("value", &"<redacted>")
            .finish()
    }
}
