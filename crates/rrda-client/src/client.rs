//! The RRDA lookup client.
//!
//! Every lookup is the same pipeline: build `{base}/{target}/{suffix}` (or
//! `{base}/x/{ip}` for reverse lookups), fetch it, decode the body.
//!
//! # Example
//!
//! ```ignore
//! use rrda_client::{RecordType, RrdaClient};
//!
//! let client = RrdaClient::new()?;
//!
//! // Generic form
//! let answer = client.lookup(RecordType::MX, "statdns.net").await?;
//!
//! // Named wrapper
//! let answer = client.mx_lookup("statdns.net").await?;
//! for rdata in answer.answer_rdata() {
//!     println!("{rdata}");
//! }
//! ```

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use std::time::Duration;

use crate::config::RrdaConfig;
use crate::decode::decode;
use crate::error::{Error, Result};
use crate::logging::targets;
use crate::model::Answer;
use crate::record_type::RecordType;
use crate::transport::HttpTransport;

/// What a lookup asks the service for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Records of one type for a name: `/{target}/{suffix}`.
    Record(RecordType),
    /// Reverse (PTR) lookup of an address: `/x/{target}`.
    Reverse,
}

impl Endpoint {
    /// The request path for `target`, relative to the base URL.
    pub fn path(&self, target: &str) -> String {
        match self {
            Self::Record(record_type) => format!("/{}/{}", target, record_type.suffix()),
            Self::Reverse => format!("/x/{}", target),
        }
    }
}

impl From<RecordType> for Endpoint {
    fn from(record_type: RecordType) -> Self {
        Self::Record(record_type)
    }
}

/// Builder for creating an RRDA client.
pub struct RrdaClientBuilder {
    config: RrdaConfig,
    transport: Option<HttpTransport>,
}

impl Default for RrdaClientBuilder {
    fn default() -> Self {
        Self::from_config(RrdaConfig::default())
    }
}

impl RrdaClientBuilder {
    /// Create a builder for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(RrdaConfig::new(base_url))
    }

    /// Create a builder from a complete configuration.
    pub fn from_config(config: RrdaConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    /// Set the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy_url.into());
        self
    }

    /// Use an existing transport instead of creating a new one.
    ///
    /// The HTTP settings of the builder's configuration are then replaced
    /// by the ones the transport was created with; only the base URL is kept.
    pub fn transport(mut self, transport: HttpTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(mut self) -> Result<RrdaClient> {
        let transport = match self.transport {
            Some(transport) => {
                transport.copy_settings_into(&mut self.config);
                transport
            }
            None => HttpTransport::from_config(&self.config)?,
        };
        let base_url = self.config.normalized_base_url().to_string();

        Ok(RrdaClient {
            inner: Arc::new(RrdaClientInner {
                transport,
                base_url,
                config: self.config,
            }),
        })
    }
}

/// Internal state for the client.
struct RrdaClientInner {
    transport: HttpTransport,
    base_url: String,
    config: RrdaConfig,
}

/// Client for the RRDA REST API.
///
/// Cheap to clone; clones share the configuration and the connection pool.
/// The base URL is fixed at construction, so clients pointing at different
/// services can be used side by side.
#[derive(Clone)]
pub struct RrdaClient {
    inner: Arc<RrdaClientInner>,
}

impl RrdaClient {
    /// Create a client for the public service with default settings.
    pub fn new() -> Result<Self> {
        RrdaClientBuilder::default().build()
    }

    /// Create a client for `base_url` with default settings.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        RrdaClientBuilder::new(base_url).build()
    }

    /// Create a builder for configuring a client.
    pub fn builder(base_url: impl Into<String>) -> RrdaClientBuilder {
        RrdaClientBuilder::new(base_url)
    }

    /// The base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The configuration in effect.
    ///
    /// For a client built on a shared transport, the HTTP settings are the
    /// transport's, not the builder's.
    pub fn config(&self) -> &RrdaConfig {
        &self.inner.config
    }

    /// The transport used for requests.
    pub fn transport(&self) -> &HttpTransport {
        &self.inner.transport
    }

    /// The full URL requested for `target` at `endpoint`.
    pub fn url_for(&self, target: &str, endpoint: impl Into<Endpoint>) -> String {
        format!("{}{}", self.inner.base_url, endpoint.into().path(target))
    }

    /// Create a lookup request that can be adjusted before it is sent.
    pub fn request(&self, target: &str, endpoint: impl Into<Endpoint>) -> LookupRequest {
        let endpoint = endpoint.into();
        LookupRequest {
            client: self.clone(),
            url: self.url_for(target, endpoint),
            endpoint,
            timeout: None,
        }
    }

    /// Look up records of `record_type` for `target`.
    ///
    /// `target` is sent as is: label prefixes such as `_443._tcp.` for TLSA
    /// are the caller's responsibility.
    pub async fn lookup(&self, record_type: RecordType, target: &str) -> Result<Answer> {
        self.request(target, record_type).send().await
    }

    /// Reverse lookup of an IPv4 or IPv6 address.
    pub async fn reverse_lookup(&self, ip: IpAddr) -> Result<Answer> {
        self.request(&ip.to_string(), Endpoint::Reverse).send().await
    }

    /// Reverse lookup of an IPv4 address.
    pub async fn reverse_lookup_v4(&self, ip: Ipv4Addr) -> Result<Answer> {
        self.reverse_lookup(IpAddr::V4(ip)).await
    }

    /// Reverse lookup of an IPv6 address.
    pub async fn reverse_lookup_v6(&self, ip: Ipv6Addr) -> Result<Answer> {
        self.reverse_lookup(IpAddr::V6(ip)).await
    }
}

macro_rules! async_lookups {
    ($( $(#[$meta:meta])* $name:ident => $rt:ident; )*) => {
        $(
            $(#[$meta])*
            pub async fn $name(&self, target: &str) -> Result<Answer> {
                self.lookup(RecordType::$rt, target).await
            }
        )*
    };
}

impl RrdaClient {
    record_lookups!(async_lookups);
}

impl std::fmt::Debug for RrdaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RrdaClient")
            .field("base_url", &self.inner.base_url)
            .field("transport", &self.inner.transport)
            .finish()
    }
}

/// A single lookup, ready to send.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    client: RrdaClient,
    url: String,
    endpoint: Endpoint,
    timeout: Option<Duration>,
}

impl LookupRequest {
    /// Set a deadline for this lookup only.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The URL that will be requested.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// What the lookup asks for.
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Fetch and decode the answer.
    ///
    /// Decoding is only attempted once the full body has been received.
    pub async fn send(self) -> Result<Answer> {
        let body = self
            .client
            .inner
            .transport
            .fetch_with_timeout(&self.url, self.timeout)
            .await
            .map_err(Error::from)
            .inspect_err(|err| {
                tracing::debug!(
                    target: targets::CLIENT,
                    url = %self.url,
                    error = %err,
                    "lookup failed"
                )
            })?;

        let answer = decode(&body).map_err(Error::from).inspect_err(|err| {
            tracing::debug!(
                target: targets::CLIENT,
                url = %self.url,
                error = %err,
                "undecodable response"
            )
        })?;

        tracing::debug!(
            target: targets::CLIENT,
            url = %self.url,
            records = answer.answer.len(),
            "lookup complete"
        );
        Ok(answer)
    }
}
