//! Status of an add-objects request.

use super::TaxiiInt;
use serde::{Deserialize, Serialize};

/// Outcome for one object of an add-objects request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDetail {
    /// Object id.
    pub id: String,
    /// Object version.
    pub version: String,
    /// Server messages about the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Vec<String>>,
}

/// An object that was not added to a collection (TAXII 2.0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusFailure {
    /// Object id.
    pub id: String,
    /// Server messages about the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Vec<String>>,
}

/// Information about a request to add objects to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Status identifier.
    pub id: String,
    /// `pending` or `complete`.
    pub status: String,
    /// Objects in the request.
    pub total_count: TaxiiInt,
    /// Objects added.
    pub success_count: TaxiiInt,
    /// Objects rejected.
    pub failure_count: TaxiiInt,
    /// Objects not yet processed.
    pub pending_count: TaxiiInt,
    /// When the request was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timestamp: Option<String>,
    /// Rejected objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<StatusDetail>>,
    /// Objects still pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pendings: Option<Vec<StatusDetail>>,
    /// Objects added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successes: Option<Vec<StatusDetail>>,
}

impl Status {
    /// True once the server has processed every object.
    pub fn is_complete(&self) -> bool {
        self.status == "complete"
    }
}
