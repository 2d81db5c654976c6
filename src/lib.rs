#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # TAXII 2.x client
//!
//! An async client for TAXII (Trusted Automated Exchange of Intelligence
//! Information), the REST protocol used to share STIX threat intelligence.
//! Both TAXII 2.0 and TAXII 2.1 servers are supported.
//!
//! ## Overview
//!
//! Every call flows through the same pipeline:
//!
//! 1. **Build** - an endpoint façade picks a path, a method and a media kind;
//!    [`client::RequestBuilder`] adds `version`, Basic `Authorization`,
//!    `Accept`/`Content-Type` and query filters
//! 2. **Send** - a [`client::Transport`] (reqwest by default) performs the exchange
//! 3. **Interpret** - error statuses become [`TaxiiError::Api`]; success bodies
//!    are decoded into typed resources from [`types`]
//!
//! ## Usage
//!
//! ```ignore
//! use taxii2_client::{ConnectParams, TaxiiConnection, TaxiiVersion};
//! use taxii2_client::protocol::TaxiiFilters;
//!
//! #[tokio::main]
//! async fn main() -> taxii2_client::Result<()> {
//!     let params = ConnectParams::new("example.com", "user", "password")
//!         .with_version(TaxiiVersion::V21);
//!     let conn = TaxiiConnection::new(params)?;
//!
//!     for root in conn.server().api_root_strings().await? {
//!         let api_root = conn.api_root(&root);
//!         if let Some(collection) = api_root.collection(0).await? {
//!             let filters = TaxiiFilters::new().with_type(["indicator"]).with_limit(50);
//!             let envelope = api_root
//!                 .collection_endpoint(&collection)
//!                 .get_objects(Some(&filters))
//!                 .await?;
//!             println!("{:?}", envelope);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[config]** - Connection parameters and TAXII version
//! - **[error]** - Error types and result handling
//! - **[protocol]** - Media types, header values, paths and query filters
//! - **[client]** - Request pipeline, transport and response interpretation
//! - **[types]** - TAXII resource types
//! - **[endpoints]** - Server, API root, collection and status façades

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod protocol;
pub mod types;

pub use client::{Reply, TaxiiConnection};
pub use config::{ConnectParams, DecodePolicy, TaxiiVersion};
pub use endpoints::{ApiRoot, CollectionEndpoint, CollectionsEndpoint, Server, StatusEndpoint};
pub use error::{Result, TaxiiError};
pub use protocol::TaxiiFilters;
