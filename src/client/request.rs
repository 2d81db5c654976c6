//! Request construction for TAXII operations.
//!
//! [`RequestBuilder`] turns a logical operation (fetch, filtered fetch, post,
//! delete) into a fully formed [`TaxiiRequest`]. Every request carries:
//!
//! - `version`: the configured TAXII version
//! - `Authorization`: `Basic <base64(user:password)>`
//! - `Accept` and `Content-Type`: selected from the request's [`MediaKind`]s
//!
//! | Operation | Accept | Content-Type | Body |
//! |-----------|--------|--------------|------|
//! | GET (resources) | TAXII | TAXII | none |
//! | GET (objects, raw) | STIX | STIX | none |
//! | POST | TAXII | STIX | JSON |
//! | DELETE | per media kind | per media kind | none |

use crate::config::ConnectParams;
use crate::error::{Result, TaxiiError};
use crate::protocol::{constants, encode_query, MediaKind, TaxiiFilters};
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, Method};
use url::Url;

/// A fully formed HTTP request, ready for a [`Transport`](crate::client::Transport).
#[derive(Debug, Clone)]
pub struct TaxiiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Serialized JSON body, for POST.
    pub body: Option<Bytes>,
}

impl TaxiiRequest {
    /// Header value as a string, if present and visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Builder for [`TaxiiRequest`].
///
/// # Examples
///
/// ```
/// use taxii2_client::client::RequestBuilder;
/// use taxii2_client::protocol::{MediaKind, TaxiiFilters};
/// use taxii2_client::{ConnectParams, TaxiiVersion};
///
/// let params = ConnectParams::new("example.com", "user", "pass").with_version(TaxiiVersion::V21);
/// let request = RequestBuilder::get(&params, "/api1/collections/abc/objects/")
///     .media(MediaKind::Stix)
///     .filters(&TaxiiFilters::new().with_limit(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.url.as_str(), "https://example.com/api1/collections/abc/objects/?limit=10");
/// assert_eq!(request.header("accept"), Some("application/stix+json;version=2.1"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder<'a> {
    params: &'a ConnectParams,
    method: Method,
    path: String,
    accept: MediaKind,
    content_type: MediaKind,
    body: Option<Bytes>,
    filters: Option<TaxiiFilters>,
}

impl<'a> RequestBuilder<'a> {
    fn new(params: &'a ConnectParams, method: Method, path: &str) -> Self {
        RequestBuilder {
            params,
            method,
            path: path.to_string(),
            accept: MediaKind::Taxii,
            content_type: MediaKind::Taxii,
            body: None,
            filters: None,
        }
    }

    /// GET with TAXII media types.
    pub fn get(params: &'a ConnectParams, path: &str) -> Self {
        Self::new(params, Method::GET, path)
    }

    /// POST of a pre-serialized JSON body: Accept TAXII, Content-Type STIX.
    pub fn post(params: &'a ConnectParams, path: &str, body: impl Into<Bytes>) -> Self {
        let mut builder = Self::new(params, Method::POST, path);
        builder.content_type = MediaKind::Stix;
        builder.body = Some(body.into());
        builder
    }

    /// DELETE with TAXII media types.
    pub fn delete(params: &'a ConnectParams, path: &str) -> Self {
        Self::new(params, Method::DELETE, path)
    }

    /// Use `kind` for both Accept and Content-Type.
    pub fn media(mut self, kind: MediaKind) -> Self {
        self.accept = kind;
        self.content_type = kind;
        self
    }

    /// Append the query parameters of `filters`.
    pub fn filters(mut self, filters: &TaxiiFilters) -> Self {
        self.filters = Some(filters.clone());
        self
    }

    /// Build the request.
    ///
    /// Fails with [`TaxiiError::InvalidUrl`] when the path does not resolve to
    /// an `http` or `https` URL.
    pub fn build(self) -> Result<TaxiiRequest> {
        let mut url = self.params.resolve(&self.path)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TaxiiError::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                url.scheme(),
                url
            )));
        }

        if let Some(filters) = &self.filters {
            let params = filters.as_parameters();
            if !params.is_empty() {
                url.set_query(Some(&encode_query(&params)));
            }
        }

        let version = self.params.version();
        let authorization = HeaderValue::from_str(&self.params.authorization())
            .map_err(|e| TaxiiError::Config(format!("invalid credentials: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(constants::headers::VERSION),
            HeaderValue::from_static(version.as_str()),
        );
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(version.media_type(self.accept)));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(version.media_type(self.content_type)),
        );

        Ok(TaxiiRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
        })
    }
}
