//! Header value selection for TAXII requests.
//!
//! | Header | Value |
//! |--------|-------|
//! | `version` | configured TAXII version, `2.0` or `2.1` |
//! | `Authorization` | `Basic <base64(user:password)>` |
//! | `Accept` / `Content-Type` | media type picked by [`media_type`] |

use super::constants::media;
use crate::config::TaxiiVersion;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Which family of media type a request negotiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// TAXII resources (discovery, api roots, collections, status, manifests).
    Taxii,
    /// STIX content (objects, bundles, envelopes).
    Stix,
}

/// Select the media type for a TAXII version and resource kind.
///
/// # Examples
///
/// ```
/// use taxii2_client::protocol::{media_type, MediaKind};
/// use taxii2_client::TaxiiVersion;
///
/// assert_eq!(
///     media_type(TaxiiVersion::V20, MediaKind::Stix),
///     "application/vnd.oasis.stix+json"
/// );
/// ```
pub fn media_type(version: TaxiiVersion, kind: MediaKind) -> &'static str {
    match (version, kind) {
        (TaxiiVersion::V21, MediaKind::Taxii) => media::TAXII_21,
        (TaxiiVersion::V21, MediaKind::Stix) => media::STIX_21,
        (TaxiiVersion::V20, MediaKind::Taxii) => media::TAXII_20,
        (TaxiiVersion::V20, MediaKind::Stix) => media::STIX_20,
    }
}

/// Base64 encoding of `user:password`.
pub fn basic_auth_token(user: &str, password: &str) -> String {
    STANDARD.encode(format!("{}:{}", user, password))
}

/// Full `Authorization` header value for Basic authentication.
///
/// # Examples
///
/// ```
/// use taxii2_client::protocol::basic_auth_value;
///
/// assert_eq!(basic_auth_value("user", "pass"), "Basic dXNlcjpwYXNz");
/// ```
#[inline]
pub fn basic_auth_value(user: &str, password: &str) -> String {
    format!("Basic {}", basic_auth_token(user, password))
}
