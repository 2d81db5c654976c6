//! Error types for TAXII client operations.
//!
//! Every request made through a [`TaxiiConnection`](crate::client::TaxiiConnection)
//! resolves to exactly one value or one [`TaxiiError`].
//!
//! # Error Categories
//!
//! | Category | Variants | Origin |
//! |----------|----------|--------|
//! | Status | `Api` | 401, 403, 404, 405-499, 500-599 responses |
//! | Transport | `Network` | timeout, DNS, connection reset |
//! | Decoding | `Parser`, `Json` | strict decoding, body serialization |
//! | Construction | `InvalidUrl`, `Config` | bad paths, bad connection parameters |
//! | Other | `Unknown` | no valid HTTP response, unclassified failures |
//!
//! # Examples
//!
//! ```
//! use taxii2_client::TaxiiError;
//!
//! let err = TaxiiError::api(401, "Unauthorized");
//! assert!(err.is_access_denied());
//! assert_eq!(err.to_string(), "Unauthorized");
//! ```

use crate::types::ErrorMessage;
use thiserror::Error;

/// Boxed transport failure carried by [`TaxiiError::Network`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for TAXII client operations.
pub type Result<T> = std::result::Result<T, TaxiiError>;

/// Errors that can occur while talking to a TAXII server.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TaxiiError {
    /// No valid HTTP response was received, or the failure could not be classified.
    #[error("Unknown error")]
    Unknown,

    /// The server answered with an error status.
    ///
    /// `reason` is the fixed human-readable label for the status class
    /// (`"Unauthorized"`, `"Resource forbidden"`, `"Resource not found"`,
    /// `"client error"` or `"server error"`). When the response body is a TAXII
    /// error message it is attached as `message`.
    #[error("{reason}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Status class label.
        reason: String,
        /// Error message resource sent by the server, if any.
        message: Option<Box<ErrorMessage>>,
    },

    /// The response body could not be decoded into the requested resource.
    ///
    /// Only produced under [`DecodePolicy::Strict`](crate::DecodePolicy::Strict);
    /// lenient decoding turns the same failure into an absent value.
    #[error("{0}")]
    Parser(String),

    /// Transport-level failure (timeout, DNS resolution, connection reset).
    #[error("network error: {0}")]
    Network(#[source] BoxError),

    /// A request path could not be turned into a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A request body could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid connection parameters.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TaxiiError {
    /// Build an [`TaxiiError::Api`] error without an attached error message.
    pub fn api(status: u16, reason: impl Into<String>) -> Self {
        TaxiiError::Api {
            status,
            reason: reason.into(),
            message: None,
        }
    }

    /// Wrap a transport failure.
    pub fn network<E>(cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        TaxiiError::Network(cause.into())
    }

    /// The human-readable reason of an API or parser error.
    pub fn reason(&self) -> Option<&str> {
        match self {
            TaxiiError::Api { reason, .. } => Some(reason),
            TaxiiError::Parser(reason) => Some(reason),
            _ => None,
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            TaxiiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is an access denied error (HTTP 401 or 403).
    #[inline]
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self, TaxiiError::Api { status: 401 | 403, .. })
    }

    /// Check if this error came from the transport layer.
    #[inline]
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, TaxiiError::Network(_))
    }
}

impl From<url::ParseError> for TaxiiError {
    fn from(err: url::ParseError) -> Self {
        TaxiiError::InvalidUrl(err.to_string())
    }
}
