//! Endpoint façades over a [`TaxiiConnection`](crate::client::TaxiiConnection).
//!
//! Each façade knows its path and which pipeline operation and resource type
//! serve each call. Façades own a clone of the connection, so they can be
//! moved into spawned tasks.
//!
//! | Façade | Path |
//! |--------|------|
//! | [`Server`] | `/taxii2/` (2.1) or `/taxii/` (2.0) |
//! | [`ApiRoot`] | `{api_root}/` |
//! | [`CollectionsEndpoint`] | `{api_root}/collections/` |
//! | [`CollectionEndpoint`] | `{api_root}/collections/{id}/...` |
//! | [`StatusEndpoint`] | `{api_root}/status/{status_id}/` |

mod api_root;
mod collection;
mod collections;
mod server;
mod status;

pub use api_root::ApiRoot;
pub use collection::CollectionEndpoint;
pub use collections::CollectionsEndpoint;
pub use server::Server;
pub use status::StatusEndpoint;
