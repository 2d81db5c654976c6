//! Lenient unsigned integer for counters that servers send in several shapes.
//!
//! Some servers report `max_content_length` or status counters as strings
//! (`"104857600"`) or floats (`1.0e8`). [`TaxiiInt`] accepts, in order:
//!
//! 1. an unsigned integer
//! 2. a signed integer (negative values become 0)
//! 3. a float (truncated toward zero; negative and NaN become 0)
//! 4. a string, parsed as an unsigned integer (0 when it does not parse)
//!
//! Anything else (bool, null, array, object) is a decode error. It always
//! encodes as a plain JSON integer.
//!
//! ```
//! use taxii2_client::types::TaxiiInt;
//!
//! for raw in ["42", "\"42\"", "42.9"] {
//!     let value: TaxiiInt = serde_json::from_str(raw).unwrap();
//!     assert_eq!(value.value(), 42);
//! }
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unsigned integer decoded from a number or a numeric string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaxiiInt(pub u64);

impl TaxiiInt {
    /// Wrap a value.
    pub const fn new(value: u64) -> Self {
        TaxiiInt(value)
    }

    /// The wrapped value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for TaxiiInt {
    fn from(value: u64) -> Self {
        TaxiiInt(value)
    }
}

impl From<TaxiiInt> for u64 {
    fn from(value: TaxiiInt) -> Self {
        value.0
    }
}

impl fmt::Display for TaxiiInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TaxiiInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

struct TaxiiIntVisitor;

impl<'de> Visitor<'de> for TaxiiIntVisitor {
    type Value = TaxiiInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned integer, a number or a numeric string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TaxiiInt, E> {
        Ok(TaxiiInt(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TaxiiInt, E> {
        Ok(TaxiiInt(u64::try_from(v).unwrap_or(0)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<TaxiiInt, E> {
        // `as` saturates: negatives and NaN become 0, huge values u64::MAX.
        Ok(TaxiiInt(v as u64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TaxiiInt, E> {
        Ok(TaxiiInt(v.parse().unwrap_or(0)))
    }
}

impl<'de> Deserialize<'de> for TaxiiInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TaxiiIntVisitor)
    }
}
