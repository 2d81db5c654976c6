//! The shared connection to a TAXII server.
//!
//! [`TaxiiConnection`] pairs immutable [`ConnectParams`] with a [`Transport`]
//! and runs the whole pipeline for one request: build, send, check status,
//! decode. It is cheap to clone; clones share the same parameters and
//! transport, so endpoint façades each hold their own copy.
//!
//! # Examples
//!
//! ```ignore
//! use taxii2_client::{ConnectParams, TaxiiConnection, TaxiiVersion};
//! use taxii2_client::types::Discovery;
//! use taxii2_client::protocol::MediaKind;
//!
//! #[tokio::main]
//! async fn main() -> taxii2_client::Result<()> {
//!     let params = ConnectParams::new("limo.anomali.com", "guest", "guest")
//!         .with_version(TaxiiVersion::V21);
//!     let conn = TaxiiConnection::new(params)?;
//!
//!     let discovery: Option<Discovery> = conn.fetch("/taxii2/", MediaKind::Taxii).await?;
//!     println!("{:?}", discovery);
//!     Ok(())
//! }
//! ```

use crate::client::request::{RequestBuilder, TaxiiRequest};
use crate::client::response;
use crate::client::transport::{RawResponse, ReqwestTransport, Transport};
use crate::config::{ConnectParams, TaxiiVersion};
use crate::endpoints::{ApiRoot, Server};
use crate::error::Result;
use crate::protocol::{MediaKind, TaxiiFilters};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A session with one TAXII server.
#[derive(Clone)]
pub struct TaxiiConnection {
    params: Arc<ConnectParams>,
    transport: Arc<dyn Transport>,
}

impl TaxiiConnection {
    /// Connection using the default `reqwest` transport.
    pub fn new(params: ConnectParams) -> Result<Self> {
        let transport = ReqwestTransport::new(&params)?;
        Ok(Self::with_transport(params, Arc::new(transport)))
    }

    /// Connection using a caller-supplied transport.
    pub fn with_transport(params: ConnectParams, transport: Arc<dyn Transport>) -> Self {
        TaxiiConnection {
            params: Arc::new(params),
            transport,
        }
    }

    /// Connection parameters.
    pub fn params(&self) -> &ConnectParams {
        &self.params
    }

    /// TAXII version spoken on this connection.
    pub fn version(&self) -> TaxiiVersion {
        self.params.version()
    }

    /// `scheme://host[:port]` of the server.
    pub fn base_url(&self) -> String {
        self.params.base_url()
    }

    /// Discovery endpoint of this server.
    pub fn server(&self) -> Server {
        Server::new(self.clone())
    }

    /// API root endpoint at `api_root` (absolute URL or server-relative path).
    pub fn api_root(&self, api_root: &str) -> ApiRoot {
        ApiRoot::new(self.clone(), api_root)
    }

    /// Start building a GET request for `path`.
    pub fn get_request(&self, path: &str) -> RequestBuilder<'_> {
        RequestBuilder::get(&self.params, path)
    }

    /// Send an already built request and check its status.
    pub async fn execute(&self, request: TaxiiRequest) -> Result<RawResponse> {
        let method = request.method.clone();
        let url = request.url.clone();
        tracing::debug!(%method, %url, "sending TAXII request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%method, %url, error = %e, "TAXII request did not complete");
                return Err(e);
            }
        };

        tracing::debug!(
            %method,
            %url,
            status = response.status,
            bytes = response.body.len(),
            "TAXII response received"
        );
        response::check_status(&response)?;
        Ok(response)
    }

    async fn execute_decoded<T: DeserializeOwned>(&self, request: TaxiiRequest) -> Result<Option<T>> {
        let response = self.execute(request).await?;
        response::decode_body(&response.body, self.params.decode_policy())
    }

    /// GET `path` and decode the body as `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, media: MediaKind) -> Result<Option<T>> {
        let request = RequestBuilder::get(&self.params, path).media(media).build()?;
        self.execute_decoded(request).await
    }

    /// GET `path` with query `filters` and decode the body as `T`.
    pub async fn fetch_with_filters<T: DeserializeOwned>(
        &self,
        path: &str,
        filters: &TaxiiFilters,
        media: MediaKind,
    ) -> Result<Option<T>> {
        let request = RequestBuilder::get(&self.params, path)
            .media(media)
            .filters(filters)
            .build()?;
        self.execute_decoded(request).await
    }

    /// GET `path` and return the body bytes without decoding.
    pub async fn fetch_raw(&self, path: &str, media: MediaKind) -> Result<Bytes> {
        let request = RequestBuilder::get(&self.params, path).media(media).build()?;
        let response = self.execute(request).await?;
        Ok(response.body)
    }

    /// POST a pre-serialized JSON body to `path` and decode the reply as `T`.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, json: impl Into<Bytes>) -> Result<Option<T>> {
        let request = RequestBuilder::post(&self.params, path, json).build()?;
        self.execute_decoded(request).await
    }

    /// Serialize `payload` to JSON, POST it to `path` and decode the reply as `T`.
    pub async fn post_json<T, P>(&self, path: &str, payload: &P) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let json = serde_json::to_vec(payload)?;
        self.post(path, json).await
    }

    /// DELETE `path`, optionally with query `filters`, and decode any reply body as `T`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        filters: Option<&TaxiiFilters>,
        media: MediaKind,
    ) -> Result<Option<T>> {
        let mut builder = RequestBuilder::delete(&self.params, path).media(media);
        if let Some(filters) = filters {
            builder = builder.filters(filters);
        }
        let request = builder.build()?;
        let response = self.execute(request).await?;
        if response.body.is_empty() {
            return Ok(None);
        }
        response::decode_body(&response.body, self.params.decode_policy())
    }
}

impl fmt::Debug for TaxiiConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaxiiConnection")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
