//! Client configuration.

use std::time::Duration;

/// Base URL of the public RRDA instance.
pub const DEFAULT_BASE_URL: &str = "http://api.statdns.com/";

/// Configuration for an RRDA client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RrdaConfig {
    /// Base URL of the RRDA service. A trailing `/` is optional.
    pub base_url: String,
    /// Total request timeout. `None` leaves the HTTP library default.
    pub timeout: Option<Duration>,
    /// Connect timeout. `None` leaves the HTTP library default.
    pub connect_timeout: Option<Duration>,
    /// User agent sent with every request.
    pub user_agent: Option<String>,
    /// Proxy URL for all requests.
    pub proxy: Option<String>,
}

impl Default for RrdaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: Some(format!("rrda-client/{}", env!("CARGO_PKG_VERSION"))),
            proxy: None,
        }
    }
}

impl RrdaConfig {
    /// Create a configuration for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Clear the request timeout.
    pub fn no_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send no user agent header.
    pub fn no_user_agent(mut self) -> Self {
        self.user_agent = None;
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy = Some(proxy_url.into());
        self
    }

    /// The base URL without trailing slashes.
    pub(crate) fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
