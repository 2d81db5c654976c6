//! The transport seam between the request pipeline and the network.
//!
//! [`Transport`] sends one [`TaxiiRequest`] and returns the raw status, headers
//! and body without judging them; status interpretation happens in
//! [`response`](crate::client::response). [`ReqwestTransport`] is the default
//! implementation. Tests and embedders can plug in their own.

use crate::client::request::TaxiiRequest;
use crate::config::ConnectParams;
use crate::error::{Result, TaxiiError};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::BTreeMap;

/// Raw HTTP response as seen by the transport.
#[derive(Clone, Debug, Default)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, lowercased names.
    pub headers: BTreeMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Response with `status` and `body` and no headers.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        RawResponse {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into().to_lowercase(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Body as UTF-8, if valid.
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Sends TAXII requests.
///
/// Implementations must be shareable across tasks; a connection holds one
/// behind an `Arc` and calls it concurrently.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Send `request` and collect the full response.
    ///
    /// Only failures to obtain a response are errors; error statuses are
    /// returned as ordinary responses.
    async fn send(&self, request: TaxiiRequest) -> Result<RawResponse>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Client whose per-request timeout comes from `params`.
    pub fn new(params: &ConnectParams) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(params.timeout())
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .build()
            .map_err(|e| TaxiiError::Config(format!("cannot build HTTP client: {}", e)))?;
        Ok(ReqwestTransport { client })
    }

    /// Wrap an existing `reqwest` client.
    pub fn with_client(client: reqwest::Client) -> Self {
        ReqwestTransport { client }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TaxiiError {
    if err.is_builder() || err.is_redirect() {
        tracing::warn!(error = %err, "unclassified HTTP client failure");
        return TaxiiError::Unknown;
    }
    TaxiiError::network(err)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TaxiiRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();

        let mut headers = BTreeMap::new();
        for (k, v) in response.headers() {
            if let Ok(val) = v.to_str() {
                headers.insert(k.as_str().to_string(), val.to_string());
            }
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
