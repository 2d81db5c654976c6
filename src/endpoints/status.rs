//! Status endpoint.

use crate::client::TaxiiConnection;
use crate::error::Result;
use crate::protocol::{constants::paths, encode_segment, with_trailing_slash, MediaKind};
use crate::types::Status;

/// Status of an earlier add-objects request.
#[derive(Clone, Debug)]
pub struct StatusEndpoint {
    conn: TaxiiConnection,
    status_id: String,
    path: String,
}

impl StatusEndpoint {
    /// Status `status_id` under `api_root`.
    pub fn new(conn: TaxiiConnection, api_root: &str, status_id: &str) -> Self {
        let path = format!(
            "{}{}{}/",
            with_trailing_slash(api_root),
            paths::STATUS,
            encode_segment(status_id)
        );
        StatusEndpoint {
            conn,
            status_id: status_id.to_string(),
            path,
        }
    }

    /// Status id.
    pub fn status_id(&self) -> &str {
        &self.status_id
    }

    /// Endpoint path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fetch the status resource.
    pub async fn get(&self) -> Result<Option<Status>> {
        self.conn.fetch(&self.path, MediaKind::Taxii).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConnectParams;

    fn status(status_id: &str) -> StatusEndpoint {
        let conn = TaxiiConnection::new(ConnectParams::new("example.com", "u", "p")).unwrap();
        StatusEndpoint::new(conn, "/api1", status_id)
    }

    #[test]
    fn test_path() {
        assert_eq!(status("2d086da7").path(), "/api1/status/2d086da7/");
    }

    #[test]
    fn test_status_id_is_encoded() {
        let endpoint = status("../collections?x#y");
        assert_eq!(endpoint.status_id(), "../collections?x#y");
        assert_eq!(endpoint.path(), "/api1/status/..%2Fcollections%3Fx%23y/");
    }
}
