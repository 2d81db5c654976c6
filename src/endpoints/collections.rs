//! Collections endpoint.

use crate::client::TaxiiConnection;
use crate::error::Result;
use crate::protocol::{constants::paths, with_trailing_slash, MediaKind};
use crate::types::{Collection, Collections};
use bytes::Bytes;

/// The collections hosted under an API root.
#[derive(Clone, Debug)]
pub struct CollectionsEndpoint {
    conn: TaxiiConnection,
    path: String,
}

impl CollectionsEndpoint {
    /// Collections endpoint under `api_root`.
    pub fn new(conn: TaxiiConnection, api_root: &str) -> Self {
        CollectionsEndpoint {
            conn,
            path: format!("{}{}", with_trailing_slash(api_root), paths::COLLECTIONS),
        }
    }

    /// Endpoint path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fetch all collections.
    pub async fn get(&self) -> Result<Option<Collections>> {
        self.conn.fetch(&self.path, MediaKind::Taxii).await
    }

    /// Fetch the collection at `index`; `None` when out of range.
    pub async fn get_at(&self, index: usize) -> Result<Option<Collection>> {
        Ok(self
            .get()
            .await?
            .and_then(|collections| collections.get(index).cloned()))
    }

    /// Fetch the collections resource as raw bytes.
    pub async fn get_raw(&self) -> Result<Bytes> {
        self.conn.fetch_raw(&self.path, MediaKind::Taxii).await
    }
}
