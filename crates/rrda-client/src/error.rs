//! Error types for RRDA lookups.
//!
//! A lookup fails in exactly one of two ways: the service could not be
//! reached ([`TransportError`]) or it answered with something that is not a
//! DNS answer object ([`DecodeError`]).

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by lookup operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body could not be decoded into an answer.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Check if this is a transport failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a decode failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Get the transport error, if any.
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Decode(_) => None,
        }
    }

    /// Get the decode error, if any.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Transport(_) => None,
        }
    }
}

/// Failure to reach the service or to read its response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request URL could not be parsed.
    #[error("invalid request URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Sending the request failed (DNS, connect, timeout, ...).
    #[error("request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Reading the response body failed part way.
    #[error("failed to read response body from '{url}': {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The runtime backing the blocking API could not be started.
    #[error("failed to start blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl TransportError {
    pub(crate) fn request(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            url: url.into(),
            source,
        }
    }

    pub(crate) fn body(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Body {
            url: url.into(),
            source,
        }
    }

    /// The URL the failed request was sent to, if one was formed.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::InvalidUrl { url, .. } | Self::Request { url, .. } | Self::Body { url, .. } => {
                Some(url)
            }
            Self::Build(_) | Self::Runtime(_) => None,
        }
    }

    /// Check if the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request { source, .. } | Self::Body { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// Check if the connection to the service could not be established.
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Request { source, .. } => source.is_connect(),
            _ => false,
        }
    }
}

/// The response body is not a decodable answer.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Malformed JSON, or a field with the wrong type.
    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON whose top-level value is not an object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl DecodeError {
    /// Line of the parse failure, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Json(err) => Some(err.line()).filter(|&line| line > 0),
            Self::NotAnObject { .. } => None,
        }
    }

    /// Column of the parse failure, when known.
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::Json(err) => Some(err.column()).filter(|&column| column > 0),
            Self::NotAnObject { .. } => None,
        }
    }
}
