//! API root endpoint.

use super::{CollectionEndpoint, CollectionsEndpoint, StatusEndpoint};
use crate::client::TaxiiConnection;
use crate::error::Result;
use crate::protocol::{with_trailing_slash, MediaKind};
use crate::types::{ApiRootInfo, Collection, Collections, Status};

/// General information about an API root and access to what it hosts.
///
/// `api_root` is either an absolute URL, as advertised by discovery, or a
/// path relative to the server's base URL.
#[derive(Clone, Debug)]
pub struct ApiRoot {
    conn: TaxiiConnection,
    api_root: String,
}

impl ApiRoot {
    /// API root at `api_root`.
    pub fn new(conn: TaxiiConnection, api_root: &str) -> Self {
        ApiRoot {
            conn,
            api_root: with_trailing_slash(api_root),
        }
    }

    /// API root path, with trailing slash.
    pub fn path(&self) -> &str {
        &self.api_root
    }

    /// Fetch the API root information.
    pub async fn get(&self) -> Result<Option<ApiRootInfo>> {
        self.conn.fetch(&self.api_root, MediaKind::Taxii).await
    }

    /// Collections endpoint under this root.
    pub fn collections_endpoint(&self) -> CollectionsEndpoint {
        CollectionsEndpoint::new(self.conn.clone(), &self.api_root)
    }

    /// Fetch the collections hosted under this root.
    pub async fn collections(&self) -> Result<Option<Collections>> {
        self.collections_endpoint().get().await
    }

    /// Fetch the collection at `index`; `None` when out of range.
    pub async fn collection(&self, index: usize) -> Result<Option<Collection>> {
        self.collections_endpoint().get_at(index).await
    }

    /// Endpoint for one collection under this root.
    pub fn collection_endpoint(&self, collection: &Collection) -> CollectionEndpoint {
        CollectionEndpoint::new(self.conn.clone(), &self.api_root, &collection.id)
    }

    /// Endpoint for one status resource under this root.
    pub fn status_endpoint(&self, status_id: &str) -> StatusEndpoint {
        StatusEndpoint::new(self.conn.clone(), &self.api_root, status_id)
    }

    /// Fetch the status of an earlier add-objects request.
    pub async fn status(&self, status_id: &str) -> Result<Option<Status>> {
        self.status_endpoint(status_id).get().await
    }
}
