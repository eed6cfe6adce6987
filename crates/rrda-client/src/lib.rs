//! Client for RRDA, a REST API for DNS lookups.
//!
//! RRDA answers `GET {base}/{name}/{type}` with the DNS response rendered as
//! JSON. This crate builds those URLs, fetches them and decodes the body into
//! an [`Answer`]. The public instance lives at [`DEFAULT_BASE_URL`].
//!
//! # Lookups
//!
//! ```ignore
//! use rrda_client::{RecordType, RrdaClient};
//!
//! let client = RrdaClient::new()?;
//!
//! let answer = client.a_lookup("statdns.net").await?;
//! println!("{answer}");
//!
//! // Any record type, picked at runtime
//! let rt: RecordType = "nsec3param".parse()?;
//! let answer = client.lookup(rt, "statdns.net").await?;
//! ```
//!
//! One named method exists per supported type (`a_lookup`, `aaaa_lookup`,
//! ... `txt_lookup`); each is `lookup` with the type fixed.
//!
//! # Reverse lookups
//!
//! ```ignore
//! let answer = client.reverse_lookup_v4("193.0.6.139".parse()?).await?;
//! let answer = client.reverse_lookup_v6("2001:67c:2e8:22::c100:68b".parse()?).await?;
//! ```
//!
//! # Errors
//!
//! A lookup fails with [`Error::Transport`] when no complete HTTP response
//! was received, or [`Error::Decode`] when the body is not a JSON answer. A
//! non-2xx status is not an error by itself: RRDA reports NXDOMAIN and
//! similar results as ordinary answers, which are decoded and returned.
//!
//! # Configuration
//!
//! ```ignore
//! let client = RrdaClient::builder("http://localhost:8080")
//!     .timeout(Duration::from_secs(5))
//!     .user_agent("my-tool/1.0")
//!     .build()?;
//! ```
//!
//! # Blocking
//!
//! [`blocking::RrdaClient`] offers the same methods for synchronous code.

#[macro_use]
mod macros;

mod client;
mod config;
mod decode;
mod error;
mod model;
mod record_type;
mod transport;

pub mod blocking;
pub mod logging;

pub use client::{Endpoint, LookupRequest, RrdaClient, RrdaClientBuilder};
pub use config::{DEFAULT_BASE_URL, RrdaConfig};
pub use decode::decode;
pub use error::{DecodeError, Error, Result, TransportError};
pub use model::{Answer, Question, ResourceRecord, Section};
pub use record_type::{ParseRecordTypeError, RecordType};
pub use transport::HttpTransport;
