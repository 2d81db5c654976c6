//! URL filtering parameters.
//!
//! [`TaxiiFilters`] maps onto the query string of object, manifest and version
//! requests:
//!
//! | Field | Query key | Encoding |
//! |-------|-----------|----------|
//! | `added_after` | `added_after` | timestamp string |
//! | `limit` | `limit` | decimal integer |
//! | `next` | `next` | opaque cursor |
//! | `id` | `match[id]` | comma-joined list |
//! | `type` | `match[type]` | comma-joined list |
//! | `version` | `match[version]` | comma-joined list |
//! | `spec_version` | `match[spec_version]` | comma-joined list |
//!
//! Absent fields never produce a key. Timestamps such as
//! `2020-01-01T00:00:00+00:00` contain `+`, which servers read as a space
//! unless escaped, so every literal `+` goes out as `%2B`.
//!
//! # Examples
//!
//! ```
//! use taxii2_client::protocol::{encode_query, TaxiiFilters};
//!
//! let filters = TaxiiFilters::new()
//!     .with_added_after("2020-01-01T00:00:00+00:00")
//!     .with_type(["indicator", "malware"]);
//!
//! let query = encode_query(&filters.as_parameters());
//! assert_eq!(
//!     query,
//!     "added_after=2020-01-01T00:00:00%2B00:00&match%5Btype%5D=indicator,malware"
//! );
//! ```

use super::constants::query;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Characters left as-is in query keys and values: RFC 3986 unreserved
/// characters plus the sub-delimiters that carry no meaning inside a pair.
/// `+` is kept here and escaped separately.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b',')
    .remove(b';')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?')
    .remove(b'+');

/// The URL filtering parameters of a TAXII request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiiFilters {
    /// Only return objects added after this timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_after: Option<String>,
    /// Maximum number of objects to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Pagination cursor returned by a previous envelope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Object ids to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Vec<String>>,
    /// Object types to match.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Vec<String>>,
    /// Object versions to match (`last`, `first`, `all` or timestamps).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Vec<String>>,
    /// STIX specification versions to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<Vec<String>>,
}

fn to_list<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl TaxiiFilters {
    /// Empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `added_after`.
    pub fn with_added_after(mut self, timestamp: impl Into<String>) -> Self {
        self.added_after = Some(timestamp.into());
        self
    }

    /// Set `limit`.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the `next` cursor.
    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    /// Set `match[id]`.
    pub fn with_id<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.id = Some(to_list(ids));
        self
    }

    /// Set `match[type]`.
    pub fn with_type<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.r#type = Some(to_list(types));
        self
    }

    /// Set `match[version]`.
    pub fn with_version<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.version = Some(to_list(versions));
        self
    }

    /// Set `match[spec_version]`.
    pub fn with_spec_version<I, S>(mut self, spec_versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec_version = Some(to_list(spec_versions));
        self
    }

    /// Keep only the filters a delete request understands.
    pub fn for_delete(&self) -> Self {
        TaxiiFilters {
            version: self.version.clone(),
            spec_version: self.spec_version.clone(),
            ..Default::default()
        }
    }

    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.as_parameters().is_empty()
    }

    /// Query parameters for this filter set, keyed by query key.
    pub fn as_parameters(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();

        if let Some(added_after) = &self.added_after {
            params.insert(query::ADDED_AFTER.to_string(), added_after.clone());
        }
        if let Some(limit) = self.limit {
            params.insert(query::LIMIT.to_string(), limit.to_string());
        }
        if let Some(next) = &self.next {
            params.insert(query::NEXT.to_string(), next.clone());
        }

        let lists = [
            (query::MATCH_ID, &self.id),
            (query::MATCH_TYPE, &self.r#type),
            (query::MATCH_VERSION, &self.version),
            (query::MATCH_SPEC_VERSION, &self.spec_version),
        ];
        for (key, list) in lists {
            if let Some(values) = list {
                params.insert(key.to_string(), values.join(","));
            }
        }

        params
    }
}

/// Percent-encode a single query key or value, escaping `+` as `%2B`.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE)
        .to_string()
        .replace('+', "%2B")
}

/// Serialize query parameters into an encoded query string (without `?`).
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}
