//! HTTP transport.
//!
//! Performs a single GET and hands back the complete body. Nothing here
//! looks at the body or the status code; RRDA reports lookup failures such
//! as NXDOMAIN as ordinary JSON answers.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::config::RrdaConfig;
use crate::error::TransportError;
use crate::logging::targets;

/// Internal state for the transport.
struct HttpTransportInner {
    client: reqwest::Client,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    proxy: Option<String>,
}

/// A reusable HTTP transport.
///
/// The transport is cheaply cloneable and thread-safe. Clones share the same
/// underlying connection pool, so one transport can serve any number of
/// concurrent lookups and any number of clients.
#[derive(Clone)]
pub struct HttpTransport {
    inner: Arc<HttpTransportInner>,
}

impl HttpTransport {
    /// Create a transport with default settings.
    pub fn new() -> Result<Self, TransportError> {
        Self::from_config(&RrdaConfig::default())
    }

    /// Create a transport using the HTTP settings of `config`.
    ///
    /// The base URL is not used by the transport.
    pub fn from_config(config: &RrdaConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(ref ua) = config.user_agent {
            builder = builder.user_agent(ua);
        }
        if let Some(ref proxy_url) = config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(TransportError::Build)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(TransportError::Build)?;

        Ok(Self {
            inner: Arc::new(HttpTransportInner {
                client,
                timeout: config.timeout,
                connect_timeout: config.connect_timeout,
                user_agent: config.user_agent.clone(),
                proxy: config.proxy.clone(),
            }),
        })
    }

    /// Fetch `url` with a GET request and return the full response body.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, TransportError> {
        self.fetch_with_timeout(url, None).await
    }

    /// Fetch `url`, overriding the configured timeout for this request.
    pub async fn fetch_with_timeout(
        &self,
        url: &str,
        timeout: Option<Duration>,
    ) -> Result<Bytes, TransportError> {
        let parsed = url::Url::parse(url).map_err(|source| TransportError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let mut request = self.inner.client.get(parsed);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!(target: targets::TRANSPORT, url, "sending GET");
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::request(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::body(url, e))?;

        tracing::debug!(
            target: targets::TRANSPORT,
            url,
            status,
            bytes = body.len(),
            "response received"
        );
        Ok(body)
    }

    /// Overwrite the HTTP settings of `config` with the ones this transport
    /// was built from.
    pub(crate) fn copy_settings_into(&self, config: &mut RrdaConfig) {
        config.timeout = self.inner.timeout;
        config.connect_timeout = self.inner.connect_timeout;
        config.user_agent = self.inner.user_agent.clone();
        config.proxy = self.inner.proxy.clone();
    }

    /// Check if both transports share one connection pool.
    pub fn ptr_eq(&self, other: &HttpTransport) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("timeout", &self.inner.timeout)
            .field("connect_timeout", &self.inner.connect_timeout)
            .field("user_agent", &self.inner.user_agent)
            .field("proxy", &self.inner.proxy)
            .finish()
    }
}
