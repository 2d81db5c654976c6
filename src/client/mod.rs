//! TAXII request/response pipeline.
//!
//! This module turns logical TAXII operations into HTTP exchanges:
//!
//! - **Build** the request: URL, `version`/`Authorization`/`Accept`/`Content-Type`
//!   headers, query filters, JSON body
//! - **Send** it through a [`Transport`]
//! - **Interpret** the response: map error statuses, decode the body
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── connection - TaxiiConnection, the shared session and its operations
//! ├── request    - TaxiiRequest and RequestBuilder
//! ├── transport  - Transport trait, reqwest implementation, RawResponse
//! ├── response   - status mapping and decoding
//! └── reply      - single-shot delivery of spawned requests
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TaxiiConnection`] | Shared session; fetch, post, raw and delete operations |
//! | [`RequestBuilder`] | Builds a [`TaxiiRequest`] for one operation |
//! | [`Transport`] | Sends requests; [`ReqwestTransport`] by default |
//! | [`Reply`] | Spawned request resolving to exactly one result |
//!
//! # Examples
//!
//! ## Status Mapping
//!
//! ```
//! use taxii2_client::client::{check_status, RawResponse};
//!
//! let err = check_status(&RawResponse::new(401, "")).unwrap_err();
//! assert_eq!(err.to_string(), "Unauthorized");
//! assert!(check_status(&RawResponse::new(200, "{}")).is_ok());
//! ```

mod connection;
mod reply;
mod request;
pub mod response;
mod transport;

pub use connection::TaxiiConnection;
pub use reply::Reply;
pub use request::{RequestBuilder, TaxiiRequest};
pub use response::{check_status, classify_status, decode_body, interpret, interpret_raw, StatusClass};
pub use transport::{RawResponse, ReqwestTransport, Transport};
