//! Discovery endpoint: server information and advertised API roots.

use crate::client::{Reply, TaxiiConnection};
use crate::error::Result;
use crate::protocol::{with_trailing_slash, MediaKind};
use crate::types::{ApiRootInfo, Discovery};
use futures::future::try_join_all;

/// General information about a TAXII server, including its API roots.
#[derive(Clone, Debug)]
pub struct Server {
    conn: TaxiiConnection,
    path: String,
}

impl Server {
    /// Discovery endpoint at the well-known path for the connection's version.
    pub fn new(conn: TaxiiConnection) -> Self {
        let path = conn.version().discovery_path();
        Self::with_path(conn, path)
    }

    /// Discovery endpoint at a non-standard path.
    pub fn with_path(conn: TaxiiConnection, path: &str) -> Self {
        Server {
            conn,
            path: with_trailing_slash(path),
        }
    }

    /// Discovery path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fetch the discovery resource.
    pub async fn discovery(&self) -> Result<Option<Discovery>> {
        self.conn.fetch(&self.path, MediaKind::Taxii).await
    }

    /// API roots advertised by the server, empty when none are listed.
    pub async fn api_root_strings(&self) -> Result<Vec<String>> {
        Ok(self
            .discovery()
            .await?
            .and_then(|disco| disco.api_roots)
            .unwrap_or_default())
    }

    /// Fetch every advertised API root.
    ///
    /// The roots are fetched concurrently. Results follow the advertised
    /// order; roots whose body does not decode are skipped. Any failed fetch
    /// fails the whole call.
    pub async fn api_roots(&self) -> Result<Vec<ApiRootInfo>> {
        let roots = self.api_root_strings().await?;
        tracing::debug!(count = roots.len(), "fetching advertised API roots");

        let replies = roots.iter().map(|root| {
            let api_root = self.conn.api_root(root);
            Reply::spawn(async move { api_root.get().await })
        });

        let infos = try_join_all(replies).await?;
        Ok(infos.into_iter().flatten().collect())
    }
}
