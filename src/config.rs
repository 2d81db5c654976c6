//! Connection parameters for a TAXII server.
//!
//! [`ConnectParams`] holds everything a session needs to address and
//! authenticate against one server. It is immutable once built and shared by
//! every request made through a [`TaxiiConnection`](crate::client::TaxiiConnection).
//!
//! # Configuration Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `scheme` | `https` | URL scheme |
//! | `port` | unset | explicit port, omitted from the base URL when unset |
//! | `version` | `2.0` | TAXII protocol version |
//! | `timeout` | 60 s | bound on each HTTP call |
//! | `decode_policy` | `Lenient` | what an undecodable success body becomes |
//!
//! # Examples
//!
//! ```
//! use taxii2_client::{ConnectParams, TaxiiVersion};
//! use std::time::Duration;
//!
//! let params = ConnectParams::new("example.com/", "user", "pass")
//!     .with_port(8080)
//!     .with_version(TaxiiVersion::V21)
//!     .with_timeout(Duration::from_secs(10));
//!
//! assert_eq!(params.host(), "example.com");
//! assert_eq!(params.base_url(), "https://example.com:8080");
//! ```

use crate::error::{Result, TaxiiError};
use crate::protocol::{self, constants::paths, MediaKind};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Default timeout for each HTTP call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// TAXII protocol version spoken by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaxiiVersion {
    /// TAXII 2.0 (legacy `vnd.oasis` media types).
    #[default]
    V20,
    /// TAXII 2.1.
    V21,
}

impl TaxiiVersion {
    /// Version string sent in the `version` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxiiVersion::V20 => "2.0",
            TaxiiVersion::V21 => "2.1",
        }
    }

    /// Path of the discovery endpoint for this version.
    pub fn discovery_path(&self) -> &'static str {
        match self {
            TaxiiVersion::V20 => paths::DISCOVERY_20,
            TaxiiVersion::V21 => paths::DISCOVERY_21,
        }
    }

    /// Media type for the given resource kind.
    pub fn media_type(&self, kind: MediaKind) -> &'static str {
        protocol::media_type(*self, kind)
    }
}

impl fmt::Display for TaxiiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxiiVersion {
    type Err = TaxiiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "2.0" => Ok(TaxiiVersion::V20),
            "2.1" => Ok(TaxiiVersion::V21),
            other => Err(TaxiiError::Config(format!(
                "unsupported TAXII version '{}'",
                other
            ))),
        }
    }
}

/// What a successful response whose body does not decode turns into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// The caller receives an absent value (`Ok(None)`).
    #[default]
    Lenient,
    /// The caller receives [`TaxiiError::Parser`].
    Strict,
}

/// Connection parameters for a TAXII 2.x server.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectParams {
    host: String,
    port: Option<u16>,
    scheme: String,
    user: String,
    password: String,
    version: TaxiiVersion,
    timeout: Duration,
    decode_policy: DecodePolicy,
}

impl ConnectParams {
    /// Parameters for `host` with Basic credentials and default settings.
    ///
    /// A trailing slash on `host` is dropped.
    pub fn new(host: impl AsRef<str>, user: impl Into<String>, password: impl Into<String>) -> Self {
        ConnectParams {
            host: protocol::without_trailing_slash(host.as_ref()),
            port: None,
            scheme: "https".to_string(),
            user: user.into(),
            password: password.into(),
            version: TaxiiVersion::default(),
            timeout: DEFAULT_TIMEOUT,
            decode_policy: DecodePolicy::default(),
        }
    }

    /// Parameters derived from a server URL such as `https://example.com:8443`.
    ///
    /// Host, port and scheme come from the URL; any path is ignored.
    pub fn from_url(url: &str, user: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let parsed = Url::parse(url.trim())?;
        let host = parsed
            .host_str()
            .ok_or_else(|| TaxiiError::InvalidUrl(format!("no host in '{}'", url)))?;

        let mut params = ConnectParams::new(host, user, password).with_scheme(parsed.scheme());
        params.port = parsed.port();
        Ok(params)
    }

    /// Set an explicit port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the URL scheme (`http` or `https`); a trailing `:` is accepted.
    pub fn with_scheme(mut self, scheme: impl AsRef<str>) -> Self {
        let scheme = scheme.as_ref().trim();
        self.scheme = scheme.strip_suffix(':').unwrap_or(scheme).to_lowercase();
        self
    }

    /// Set the TAXII version.
    pub fn with_version(mut self, version: TaxiiVersion) -> Self {
        self.version = version;
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the decode policy.
    pub fn with_decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    /// Host without trailing slash.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, if any.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Lowercased scheme.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Login name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// TAXII version.
    pub fn version(&self) -> TaxiiVersion {
        self.version
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Decode policy.
    pub fn decode_policy(&self) -> DecodePolicy {
        self.decode_policy
    }

    /// `scheme://host[:port]`.
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.host, port),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }

    /// Base64 of `user:password`.
    pub fn basic_auth_token(&self) -> String {
        protocol::headers::basic_auth_token(&self.user, &self.password)
    }

    /// `Authorization` header value.
    pub fn authorization(&self) -> String {
        protocol::basic_auth_value(&self.user, &self.password)
    }

    /// Turn an absolute URL or a server-relative path into a full URL.
    ///
    /// Paths containing `.` or `..` segments are rejected rather than
    /// collapsed onto another resource.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        let path = path.trim();
        if protocol::has_dot_segment(path) {
            return Err(TaxiiError::InvalidUrl(format!("dot segment in '{}'", path)));
        }
        match Url::parse(path) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = Url::parse(&self.base_url())?;
                Ok(base.join(path)?)
            }
            Err(e) => Err(TaxiiError::InvalidUrl(format!("{}: {}", path, e))),
        }
    }
}

impl fmt::Debug for ConnectParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectParams")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("scheme", &self.scheme)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("version", &self.version)
            .field("timeout", &self.timeout)
            .field("decode_policy", &self.decode_policy)
            .finish()
    }
}
