//! Collection endpoint: objects, versions, manifests and adding content.
//!
//! | Call | Method | Path (under `collections/{id}/`) | Media | Result |
//! |------|--------|-----------------------------------|-------|--------|
//! | `get` | GET | | TAXII | [`Collection`] |
//! | `get_bundle` | GET | `objects/` | STIX | [`Bundle`] (2.0) |
//! | `get_objects` | GET | `objects/` | STIX | [`Envelope`] |
//! | `get_object` | GET | `objects/{obj_id}/` | STIX | [`Envelope`] |
//! | `get_object_versions` | GET | `objects/{obj_id}/versions/` | TAXII | [`VersionResource`] |
//! | `delete_object` | DELETE | `objects/{obj_id}/` | TAXII | JSON, if any |
//! | `get_raw` | GET | `objects/` | STIX | bytes |
//! | `get_manifests` | GET | `manifest/` | TAXII | [`ManifestResource`] |
//! | `get_manifest_entries` | GET | `manifest/` | TAXII | [`ManifestResource<ManifestEntry>`] (2.0) |
//! | `add_bundle` / `add_envelope` | POST | `objects/` | TAXII / STIX | [`Status`] |

use crate::client::TaxiiConnection;
use crate::error::Result;
use crate::protocol::{constants::paths, encode_segment, with_trailing_slash, MediaKind, TaxiiFilters};
use crate::types::{Bundle, Collection, Envelope, ManifestEntry, ManifestResource, Status, VersionResource};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// One collection under an API root.
#[derive(Clone, Debug)]
pub struct CollectionEndpoint {
    conn: TaxiiConnection,
    id: String,
    base_path: String,
    objects_path: String,
}

impl CollectionEndpoint {
    /// Collection `collection_id` under `api_root`.
    ///
    /// The id is percent-encoded as a single path segment.
    pub fn new(conn: TaxiiConnection, api_root: &str, collection_id: &str) -> Self {
        let base_path = format!(
            "{}{}{}/",
            with_trailing_slash(api_root),
            paths::COLLECTIONS,
            encode_segment(collection_id)
        );
        let objects_path = format!("{}{}", base_path, paths::OBJECTS);
        CollectionEndpoint {
            conn,
            id: collection_id.to_string(),
            base_path,
            objects_path,
        }
    }

    /// Endpoint for a collection resource fetched earlier.
    pub fn from_collection(conn: TaxiiConnection, api_root: &str, collection: &Collection) -> Self {
        Self::new(conn, api_root, &collection.id)
    }

    /// Collection id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `{api_root}/collections/{id}/`.
    pub fn path(&self) -> &str {
        &self.base_path
    }

    fn object_path(&self, obj_id: &str) -> String {
        format!("{}{}/", self.objects_path, encode_segment(obj_id))
    }

    async fn fetch_filtered<T: DeserializeOwned>(
        &self,
        path: &str,
        filters: Option<&TaxiiFilters>,
        media: MediaKind,
    ) -> Result<Option<T>> {
        match filters {
            Some(filters) => self.conn.fetch_with_filters(path, filters, media).await,
            None => self.conn.fetch(path, media).await,
        }
    }

    /// Fetch the collection resource itself.
    pub async fn get(&self) -> Result<Option<Collection>> {
        self.conn.fetch(&self.base_path, MediaKind::Taxii).await
    }

    /// Fetch the collection content as a STIX 2.0 bundle.
    pub async fn get_bundle(&self) -> Result<Option<Bundle>> {
        self.conn.fetch(&self.objects_path, MediaKind::Stix).await
    }

    /// Fetch objects, optionally filtered.
    pub async fn get_objects(&self, filters: Option<&TaxiiFilters>) -> Result<Option<Envelope>> {
        self.fetch_filtered(&self.objects_path, filters, MediaKind::Stix)
            .await
    }

    /// Fetch one object, optionally filtered by version.
    pub async fn get_object(&self, obj_id: &str, filters: Option<&TaxiiFilters>) -> Result<Option<Envelope>> {
        self.fetch_filtered(&self.object_path(obj_id), filters, MediaKind::Stix)
            .await
    }

    /// Fetch the versions of one object.
    pub async fn get_object_versions(
        &self,
        obj_id: &str,
        filters: Option<&TaxiiFilters>,
    ) -> Result<Option<VersionResource>> {
        let path = format!("{}{}", self.object_path(obj_id), paths::VERSIONS);
        self.fetch_filtered(&path, filters, MediaKind::Taxii).await
    }

    /// Delete one object.
    ///
    /// Only the `version` and `spec_version` filters are sent.
    pub async fn delete_object(&self, obj_id: &str, filters: Option<&TaxiiFilters>) -> Result<Option<Value>> {
        let filters = filters.map(TaxiiFilters::for_delete);
        self.conn
            .delete(&self.object_path(obj_id), filters.as_ref(), MediaKind::Taxii)
            .await
    }

    /// Fetch the objects resource as raw bytes.
    pub async fn get_raw(&self) -> Result<Bytes> {
        self.conn.fetch_raw(&self.objects_path, MediaKind::Stix).await
    }

    /// Fetch manifest records, optionally filtered.
    pub async fn get_manifests(&self, filters: Option<&TaxiiFilters>) -> Result<Option<ManifestResource>> {
        self.fetch_filtered(&self.manifest_path(), filters, MediaKind::Taxii)
            .await
    }

    /// Fetch TAXII 2.0 manifest entries, optionally filtered.
    pub async fn get_manifest_entries(
        &self,
        filters: Option<&TaxiiFilters>,
    ) -> Result<Option<ManifestResource<ManifestEntry>>> {
        self.fetch_filtered(&self.manifest_path(), filters, MediaKind::Taxii)
            .await
    }

    fn manifest_path(&self) -> String {
        format!("{}{}", self.base_path, paths::MANIFEST)
    }

    async fn add_objects<P: Serialize>(&self, payload: &P) -> Result<Option<Status>> {
        self.conn.post_json(&self.objects_path, payload).await
    }

    /// Add the objects of a STIX 2.0 bundle.
    pub async fn add_bundle(&self, bundle: &Bundle) -> Result<Option<Status>> {
        self.add_objects(bundle).await
    }

    /// Add the objects of a TAXII 2.1 envelope.
    pub async fn add_envelope(&self, envelope: &Envelope) -> Result<Option<Status>> {
        self.add_objects(envelope).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConnectParams;

    fn endpoint(api_root: &str) -> CollectionEndpoint {
        let conn = TaxiiConnection::new(ConnectParams::new("example.com", "u", "p")).unwrap();
        CollectionEndpoint::new(conn, api_root, "91a7b528")
    }

    #[test]
    fn test_paths() {
        let collection = endpoint("/api1");
        assert_eq!(collection.path(), "/api1/collections/91a7b528/");
        assert_eq!(collection.objects_path, "/api1/collections/91a7b528/objects/");
        assert_eq!(
            collection.object_path("indicator--1"),
            "/api1/collections/91a7b528/objects/indicator--1/"
        );
    }

    #[test]
    fn test_ids_stay_one_segment() {
        let collection = endpoint("/api1/");
        assert_eq!(
            collection.object_path("../../../admin"),
            "/api1/collections/91a7b528/objects/..%2F..%2F..%2Fadmin/"
        );
        assert_eq!(
            collection.object_path("a?x=1"),
            "/api1/collections/91a7b528/objects/a%3Fx=1/"
        );
        assert_eq!(
            collection.object_path("indicator--1#frag"),
            "/api1/collections/91a7b528/objects/indicator--1%23frag/"
        );

        let conn = TaxiiConnection::new(ConnectParams::new("example.com", "u", "p")).unwrap();
        let odd = CollectionEndpoint::new(conn, "/api1/", "a/b");
        assert_eq!(odd.id(), "a/b");
        assert_eq!(odd.path(), "/api1/collections/a%2Fb/");
    }

    #[tokio::test]
    async fn test_dot_object_id_is_rejected() {
        let err = endpoint("/api1/").get_object("..", None).await.unwrap_err();
        assert!(matches!(err, crate::TaxiiError::InvalidUrl(_)));
    }

    #[test]
    fn test_absolute_api_root() {
        let collection = endpoint("https://example.com/api1/");
        assert_eq!(
            collection.path(),
            "https://example.com/api1/collections/91a7b528/"
        );
    }
}
