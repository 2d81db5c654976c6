//! Collection resources.

use serde::{Deserialize, Serialize};

/// General information about a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection identifier, used in object paths.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Whether the authenticated client may read objects.
    pub can_read: bool,
    /// Whether the authenticated client may add objects.
    pub can_write: bool,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Alternate identifier (TAXII 2.1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Media types of the objects held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_types: Option<Vec<String>>,
}

/// The collections hosted under an API root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collections {
    /// Collections, absent when the API root hosts none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<Collection>>,
}

impl Collections {
    /// Collection at `index`, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Collection> {
        self.collections.as_ref()?.get(index)
    }

    /// Number of collections.
    pub fn len(&self) -> usize {
        self.collections.as_ref().map_or(0, Vec::len)
    }

    /// True when there are no collections.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
