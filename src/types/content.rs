//! Wrappers around STIX content: bundles, envelopes and version lists.
//!
//! STIX objects themselves are kept as opaque [`serde_json::Value`]s; parsing
//! them is left to a STIX library.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// STIX 2.0 bundle, the objects payload of TAXII 2.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Always `bundle`.
    #[serde(rename = "type")]
    pub r#type: String,
    /// Bundle id.
    pub id: String,
    /// STIX version of the content.
    pub spec_version: String,
    /// STIX objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<Value>>,
}

impl Bundle {
    /// Bundle with the given id holding `objects`.
    pub fn new(id: impl Into<String>, objects: Vec<Value>) -> Self {
        Bundle {
            r#type: "bundle".to_string(),
            id: id.into(),
            spec_version: "2.0".to_string(),
            objects: Some(objects),
        }
    }
}

/// TAXII 2.1 envelope around STIX objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// More objects are available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more: Option<bool>,
    /// Cursor for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// STIX objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<Value>>,
}

impl Envelope {
    /// Envelope holding `objects`.
    pub fn new(objects: Vec<Value>) -> Self {
        Envelope {
            objects: Some(objects),
            ..Default::default()
        }
    }

    /// Objects, empty when absent.
    pub fn objects(&self) -> &[Value] {
        self.objects.as_deref().unwrap_or_default()
    }
}

/// Versions available for one object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResource {
    /// More versions are available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more: Option<bool>,
    /// Version timestamps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_paging() {
        let envelope: Envelope = serde_json::from_value(json!({
            "more": true,
            "next": "d3dc9a59",
            "objects": [{"type": "indicator", "id": "indicator--1", "spec_version": "2.1"}]
        }))
        .unwrap();
        assert_eq!(envelope.more, Some(true));
        assert_eq!(envelope.next.as_deref(), Some("d3dc9a59"));
        assert_eq!(envelope.objects()[0]["type"], "indicator");
    }

    #[test]
    fn test_empty_envelope() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.objects().is_empty());
        assert_eq!(serde_json::to_string(&envelope).unwrap(), "{}");
    }

    #[test]
    fn test_bundle_type_key() {
        let bundle = Bundle::new("bundle--1", vec![json!({"type": "malware"})]);
        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value["type"], "bundle");
        assert_eq!(value["spec_version"], "2.0");
        let decoded: Bundle = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, bundle);
    }

    #[test]
    fn test_version_resource() {
        let versions: VersionResource = serde_json::from_value(json!({
            "versions": ["2016-01-01T01:01:01.000Z", "2018-01-01T01:01:01.000Z"]
        }))
        .unwrap();
        assert_eq!(versions.versions.map(|v| v.len()), Some(2));
        assert!(versions.more.is_none());
    }
}
