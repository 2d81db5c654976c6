//! TAXII resource types.
//!
//! Every resource is an immutable value decoded from a server response with
//! `serde`. Optional members are `Option`s and are skipped when encoding.
//! Equality is structural: decoding the same payload twice yields equal values.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`Discovery`] | `/taxii2/` or `/taxii/` |
//! | [`ApiRootInfo`] | `{api_root}/` |
//! | [`Collections`] / [`Collection`] | `{api_root}/collections/` |
//! | [`Envelope`] / [`Bundle`] | `.../objects/` |
//! | [`VersionResource`] | `.../objects/{id}/versions/` |
//! | [`ManifestResource`] | `.../manifest/` |
//! | [`Status`] | `{api_root}/status/{id}/`, add-objects responses |
//! | [`ErrorMessage`] | bodies of error responses |

mod collection;
mod content;
mod discovery;
mod error_message;
mod manifest;
mod status;
mod taxii_int;

pub use collection::{Collection, Collections};
pub use content::{Bundle, Envelope, VersionResource};
pub use discovery::{ApiRootInfo, Discovery};
pub use error_message::ErrorMessage;
pub use manifest::{ManifestEntry, ManifestRecord, ManifestResource};
pub use status::{Status, StatusDetail, StatusFailure};
pub use taxii_int::TaxiiInt;
