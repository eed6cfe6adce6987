//! Blocking lookup API.
//!
//! Wraps the async [`crate::RrdaClient`] and drives it on a shared runtime,
//! so lookups can be made from plain synchronous code.
//!
//! # Warning
//!
//! Do not call these methods from within an async context; blocking on the
//! shared runtime from inside another runtime panics.
//!
//! ```ignore
//! use rrda_client::blocking::RrdaClient;
//!
//! let client = RrdaClient::new()?;
//! let answer = client.txt_lookup("statdns.net")?;
//! println!("{answer}");
//! ```

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use crate::client::{self, Endpoint, RrdaClientBuilder};
use crate::config::RrdaConfig;
use crate::error::Result;
use crate::model::Answer;
use crate::record_type::RecordType;

/// Runtime management for the blocking API.
pub mod runtime {
    use std::future::Future;
    use std::sync::OnceLock;

    use tokio::runtime::Runtime;

    use crate::error::TransportError;

    static RUNTIME: OnceLock<Runtime> = OnceLock::new();

    /// Get the shared runtime, starting it on first use.
    pub fn get() -> Result<&'static Runtime, TransportError> {
        if let Some(runtime) = RUNTIME.get() {
            return Ok(runtime);
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("rrda-client")
            .enable_all()
            .build()
            .map_err(TransportError::Runtime)?;

        // A concurrent first call may have won; its runtime is kept and ours
        // is dropped here.
        Ok(RUNTIME.get_or_init(|| runtime))
    }

    /// Block on a future using the shared runtime.
    pub fn block_on<F: Future>(future: F) -> Result<F::Output, TransportError> {
        Ok(get()?.block_on(future))
    }
}

/// Blocking client for the RRDA REST API.
///
/// Same surface as the async client, with every lookup returning once the
/// answer has been decoded.
#[derive(Clone, Debug)]
pub struct RrdaClient {
    inner: client::RrdaClient,
}

impl RrdaClient {
    /// Create a client for the public service with default settings.
    pub fn new() -> Result<Self> {
        Self::from_builder(RrdaClientBuilder::default())
    }

    /// Create a client for `base_url` with default settings.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::from_builder(RrdaClientBuilder::new(base_url))
    }

    /// Create a client from a complete configuration.
    pub fn from_config(config: RrdaConfig) -> Result<Self> {
        Self::from_builder(RrdaClientBuilder::from_config(config))
    }

    /// Build a client from an async client builder.
    pub fn from_builder(builder: RrdaClientBuilder) -> Result<Self> {
        let _guard = runtime::get()?.enter();
        Ok(Self {
            inner: builder.build()?,
        })
    }

    /// Wrap an existing async client.
    pub fn from_async(inner: client::RrdaClient) -> Self {
        Self { inner }
    }

    /// The wrapped async client.
    pub fn as_async(&self) -> &client::RrdaClient {
        &self.inner
    }

    /// The base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// The full URL requested for `target` at `endpoint`.
    pub fn url_for(&self, target: &str, endpoint: impl Into<Endpoint>) -> String {
        self.inner.url_for(target, endpoint)
    }

    /// Create a lookup request that can be adjusted before it is sent.
    pub fn request(&self, target: &str, endpoint: impl Into<Endpoint>) -> LookupRequest {
        LookupRequest {
            inner: self.inner.request(target, endpoint),
        }
    }

    /// Look up records of `record_type` for `target`.
    pub fn lookup(&self, record_type: RecordType, target: &str) -> Result<Answer> {
        runtime::block_on(self.inner.lookup(record_type, target))?
    }

    /// Reverse lookup of an IPv4 or IPv6 address.
    pub fn reverse_lookup(&self, ip: IpAddr) -> Result<Answer> {
        runtime::block_on(self.inner.reverse_lookup(ip))?
    }

    /// Reverse lookup of an IPv4 address.
    pub fn reverse_lookup_v4(&self, ip: Ipv4Addr) -> Result<Answer> {
        self.reverse_lookup(IpAddr::V4(ip))
    }

    /// Reverse lookup of an IPv6 address.
    pub fn reverse_lookup_v6(&self, ip: Ipv6Addr) -> Result<Answer> {
        self.reverse_lookup(IpAddr::V6(ip))
    }
}

macro_rules! blocking_lookups {
    ($( $(#[$meta:meta])* $name:ident => $rt:ident; )*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, target: &str) -> Result<Answer> {
                self.lookup(RecordType::$rt, target)
            }
        )*
    };
}

impl RrdaClient {
    record_lookups!(blocking_lookups);
}

/// A single blocking lookup, ready to send.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    inner: client::LookupRequest,
}

impl LookupRequest {
    /// Set a deadline for this lookup only.
    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            inner: self.inner.timeout(timeout),
        }
    }

    /// The URL that will be requested.
    pub fn url(&self) -> &str {
        self.inner.url()
    }

    /// Fetch and decode the answer, blocking until done.
    pub fn send(self) -> Result<Answer> {
        runtime::block_on(self.inner.send())?
    }
}
