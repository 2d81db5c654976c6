//! Manifest resources: object metadata without object content.

use serde::{Deserialize, Serialize};

/// Metadata about a single object (TAXII 2.1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Object id.
    pub id: String,
    /// When each version was added.
    pub date_added: Vec<String>,
    /// Available versions.
    pub versions: Vec<String>,
    /// Media types the object is available in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_types: Option<Vec<String>>,
}

/// Metadata about a single object (TAXII 2.0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Object id.
    pub id: String,
    /// When each version was added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<Vec<String>>,
    /// Available versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<String>>,
    /// Media types the object is available in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_types: Option<Vec<String>>,
}

/// A page of manifest records.
///
/// `R` is [`ManifestRecord`] for TAXII 2.1 and [`ManifestEntry`] for TAXII
/// 2.0, whose servers may omit dates and versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub struct ManifestResource<R = ManifestRecord> {
    /// More records are available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more: Option<bool>,
    /// The records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<R>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manifest_resource() {
        let manifest: ManifestResource = serde_json::from_value(json!({
            "more": false,
            "objects": [{
                "id": "indicator--29aba82c-5393-42a8-9edb-6a2cb1df070b",
                "date_added": ["2016-11-01T03:04:05Z"],
                "versions": ["2016-11-03T12:30:59Z"],
                "media_types": ["application/stix+json;version=2.1"]
            }]
        }))
        .unwrap();
        assert_eq!(manifest.more, Some(false));
        assert_eq!(manifest.objects.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_manifest_record_requires_versions() {
        let result: serde_json::Result<ManifestRecord> =
            serde_json::from_value(json!({"id": "x", "date_added": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_taxii_20_manifest_page() {
        let manifest: ManifestResource<ManifestEntry> = serde_json::from_value(json!({
            "objects": [
                {"id": "indicator--1", "versions": ["2016-11-03T12:30:59Z"]},
                {"id": "malware--2"}
            ]
        }))
        .unwrap();
        let objects = manifest.objects.unwrap();
        assert_eq!(objects[1].id, "malware--2");
        assert!(objects[1].date_added.is_none());

        // the same page does not satisfy the 2.1 record shape
        let strict: serde_json::Result<ManifestResource> =
            serde_json::from_value(json!({"objects": [{"id": "malware--2"}]}));
        assert!(strict.is_err());
    }

    #[test]
    fn test_manifest_entry_all_optional() {
        let entry: ManifestEntry = serde_json::from_value(json!({"id": "x"})).unwrap();
        assert!(entry.versions.is_none());
    }
}
