//! TAXII protocol constants, header values, paths and query filters.
//!
//! Everything in this module is a pure function of its inputs; nothing here
//! touches the network.
//!
//! # Media Types
//!
//! | TAXII version | TAXII resources | STIX content |
//! |---------------|-----------------|--------------|
//! | 2.1 | `application/taxii+json;version=2.1` | `application/stix+json;version=2.1` |
//! | 2.0 | `application/vnd.oasis.taxii+json` | `application/vnd.oasis.stix+json` |
//!
//! # Examples
//!
//! ```
//! use taxii2_client::protocol::{media_type, MediaKind};
//! use taxii2_client::TaxiiVersion;
//!
//! assert_eq!(
//!     media_type(TaxiiVersion::V21, MediaKind::Stix),
//!     "application/stix+json;version=2.1"
//! );
//! assert_eq!(
//!     media_type(TaxiiVersion::V20, MediaKind::Taxii),
//!     "application/vnd.oasis.taxii+json"
//! );
//! ```

pub mod filters;
pub mod headers;
pub mod paths;

pub use filters::{encode_query, TaxiiFilters};
pub use headers::{basic_auth_value, media_type, MediaKind};
pub use paths::{encode_segment, has_dot_segment, with_trailing_slash, without_trailing_slash};

/// Protocol constants.
pub mod constants {
    /// Header names.
    pub mod headers {
        /// Request header carrying the TAXII version string.
        pub const VERSION: &str = "version";
    }

    /// Media types.
    pub mod media {
        /// TAXII 2.1 resource media type.
        pub const TAXII_21: &str = "application/taxii+json;version=2.1";
        /// STIX 2.1 content media type.
        pub const STIX_21: &str = "application/stix+json;version=2.1";
        /// TAXII 2.0 resource media type.
        pub const TAXII_20: &str = "application/vnd.oasis.taxii+json";
        /// STIX 2.0 content media type.
        pub const STIX_20: &str = "application/vnd.oasis.stix+json";
    }

    /// Well-known paths.
    pub mod paths {
        /// Discovery endpoint for TAXII 2.1 servers.
        pub const DISCOVERY_21: &str = "/taxii2/";
        /// Discovery endpoint for TAXII 2.0 servers.
        pub const DISCOVERY_20: &str = "/taxii/";
        /// Collections segment under an API root.
        pub const COLLECTIONS: &str = "collections/";
        /// Objects segment under a collection.
        pub const OBJECTS: &str = "objects/";
        /// Versions segment under an object.
        pub const VERSIONS: &str = "versions/";
        /// Manifest segment under a collection.
        pub const MANIFEST: &str = "manifest/";
        /// Status segment under an API root.
        pub const STATUS: &str = "status/";
    }

    /// Query parameter keys.
    pub mod query {
        /// `added_after` filter.
        pub const ADDED_AFTER: &str = "added_after";
        /// `limit` filter.
        pub const LIMIT: &str = "limit";
        /// `next` pagination cursor.
        pub const NEXT: &str = "next";
        /// `match[id]` filter.
        pub const MATCH_ID: &str = "match[id]";
        /// `match[type]` filter.
        pub const MATCH_TYPE: &str = "match[type]";
        /// `match[version]` filter.
        pub const MATCH_VERSION: &str = "match[version]";
        /// `match[spec_version]` filter.
        pub const MATCH_SPEC_VERSION: &str = "match[spec_version]";
    }
}
