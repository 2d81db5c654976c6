//! Response interpretation: status mapping and body decoding.
//!
//! Statuses are checked in this order, first match wins:
//!
//! | Status | Outcome |
//! |--------|---------|
//! | outside 100-599 | [`TaxiiError::Unknown`] |
//! | 401 | `Api("Unauthorized")` |
//! | 403 | `Api("Resource forbidden")` |
//! | 404 | `Api("Resource not found")` |
//! | 405-499 | `Api("client error")` |
//! | 500-599 | `Api("server error")` |
//! | anything else | success, body is decoded |
//!
//! A success body that does not decode becomes `Ok(None)` under
//! [`DecodePolicy::Lenient`] and [`TaxiiError::Parser`] under
//! [`DecodePolicy::Strict`].

use crate::client::transport::RawResponse;
use crate::config::DecodePolicy;
use crate::error::{Result, TaxiiError};
use crate::types::ErrorMessage;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Classification of an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Not a valid HTTP status.
    Invalid,
    /// Error status with its reason label.
    Error(&'static str),
    /// Proceed to decoding.
    Success,
}

/// Classify a status code.
///
/// # Examples
///
/// ```
/// use taxii2_client::client::{classify_status, StatusClass};
///
/// assert_eq!(classify_status(401), StatusClass::Error("Unauthorized"));
/// assert_eq!(classify_status(404), StatusClass::Error("Resource not found"));
/// assert_eq!(classify_status(500), StatusClass::Error("server error"));
/// assert_eq!(classify_status(200), StatusClass::Success);
/// ```
pub fn classify_status(status: u16) -> StatusClass {
    match status {
        s if !(100..600).contains(&s) => StatusClass::Invalid,
        401 => StatusClass::Error("Unauthorized"),
        403 => StatusClass::Error("Resource forbidden"),
        404 => StatusClass::Error("Resource not found"),
        405..=499 => StatusClass::Error("client error"),
        500..=599 => StatusClass::Error("server error"),
        _ => StatusClass::Success,
    }
}

/// Turn error statuses into errors, attaching the server's error message.
pub fn check_status(response: &RawResponse) -> Result<()> {
    match classify_status(response.status) {
        StatusClass::Success => Ok(()),
        StatusClass::Invalid => {
            tracing::warn!(status = response.status, "no valid HTTP response");
            Err(TaxiiError::Unknown)
        }
        StatusClass::Error(reason) => {
            let message = serde_json::from_slice::<ErrorMessage>(&response.body)
                .ok()
                .map(Box::new);
            tracing::warn!(
                status = response.status,
                reason,
                title = message.as_ref().map(|m| m.title.as_str()),
                "TAXII request failed"
            );
            Err(TaxiiError::Api {
                status: response.status,
                reason: reason.to_string(),
                message,
            })
        }
    }
}

/// Decode a success body according to `policy`.
pub fn decode_body<T: DeserializeOwned>(body: &[u8], policy: DecodePolicy) -> Result<Option<T>> {
    match serde_json::from_slice::<T>(body) {
        Ok(value) => Ok(Some(value)),
        Err(e) => match policy {
            DecodePolicy::Lenient => {
                tracing::warn!(
                    target_type = std::any::type_name::<T>(),
                    error = %e,
                    "response body did not decode, returning no data"
                );
                Ok(None)
            }
            DecodePolicy::Strict => Err(TaxiiError::Parser(format!(
                "cannot decode {}: {}",
                std::any::type_name::<T>(),
                e
            ))),
        },
    }
}

/// Check the status, then decode the body.
pub fn interpret<T: DeserializeOwned>(response: RawResponse, policy: DecodePolicy) -> Result<Option<T>> {
    check_status(&response)?;
    decode_body(&response.body, policy)
}

/// Check the status, then hand back the body untouched.
pub fn interpret_raw(response: RawResponse) -> Result<Bytes> {
    check_status(&response)?;
    Ok(response.body)
}
