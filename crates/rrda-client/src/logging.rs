//! Tracing targets used by this crate.
//!
//! The crate emits `debug` and `trace` events through the `tracing` facade
//! and never installs a subscriber. To see them, install one in your
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("rrda_client=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by component.
pub mod targets {
    /// Lookup dispatch (URL building, outcome of each lookup).
    pub const CLIENT: &str = "rrda_client::client";
    /// HTTP requests and body reads.
    pub const TRANSPORT: &str = "rrda_client::transport";
    /// Response decoding.
    pub const DECODE: &str = "rrda_client::decode";
}
