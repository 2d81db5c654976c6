//! Server discovery and API root information.

use super::TaxiiInt;
use serde::{Deserialize, Serialize};

/// Information about a TAXII server and the API roots it advertises.
///
/// `default_api` is carried on the wire as `default`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    /// Human-readable server title.
    pub title: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact information for the server operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// API root to use when no other choice is made.
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_api: Option<String>,
    /// Advertised API roots, as absolute URLs or server-relative paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_roots: Option<Vec<String>>,
}

impl Discovery {
    /// Advertised API roots, empty when the server lists none.
    pub fn api_roots(&self) -> &[String] {
        self.api_roots.as_deref().unwrap_or_default()
    }
}

/// General information about an API root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRootInfo {
    /// Human-readable title.
    pub title: String,
    /// TAXII versions supported, as media types.
    pub versions: Vec<String>,
    /// Largest request body accepted, in bytes.
    pub max_content_length: TaxiiInt,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discovery_default_key() {
        let disco: Discovery = serde_json::from_value(json!({
            "title": "Some TAXII Server",
            "contact": "admin@example.com",
            "default": "https://example.com/api2/",
            "api_roots": ["https://example.com/api1/", "https://example.com/api2/"]
        }))
        .unwrap();
        assert_eq!(disco.default_api.as_deref(), Some("https://example.com/api2/"));
        assert_eq!(disco.api_roots().len(), 2);
        assert!(disco.description.is_none());
    }

    #[test]
    fn test_discovery_without_roots() {
        let disco: Discovery = serde_json::from_value(json!({"title": "t"})).unwrap();
        assert!(disco.api_roots().is_empty());
    }

    #[test]
    fn test_discovery_structural_equality() {
        let raw = r#"{"title":"t","api_roots":["/a/"]}"#;
        let first: Discovery = serde_json::from_str(raw).unwrap();
        let second: Discovery = serde_json::from_str(raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_api_root_string_content_length() {
        let root: ApiRootInfo = serde_json::from_value(json!({
            "title": "Malware Research Group",
            "versions": ["application/taxii+json;version=2.1"],
            "max_content_length": "104857600"
        }))
        .unwrap();
        assert_eq!(root.max_content_length.value(), 104_857_600);
    }

    #[test]
    fn test_api_root_requires_versions() {
        let result: serde_json::Result<ApiRootInfo> =
            serde_json::from_value(json!({"title": "t", "max_content_length": 1}));
        assert!(result.is_err());
    }
}
