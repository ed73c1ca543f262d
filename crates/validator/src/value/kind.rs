//! Value kinds.
//!
//! `ValueKind` is the lightweight classification of a [`FieldValue`]. Rules
//! dispatch on the value itself; the kind is what ends up in logs and error
//! messages.
//!
//! ```
//! use condval::value::{Inspect, ValueKind};
//!
//! assert_eq!("abc".field_value().kind(), ValueKind::String);
//! assert!(ValueKind::Unsigned.is_numeric());
//! assert_eq!(ValueKind::Timestamp.name(), "timestamp");
//! ```
//!
//! [`FieldValue`]: crate::value::FieldValue

use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

/// Represents the kind of a field value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// `u8` through `u64` and `usize`.
    Unsigned,
    /// `i8` through `i64` and `isize`.
    Signed,
    /// A span of time, measured in nanoseconds.
    Duration,
    /// `f32` and `f64`.
    Float,
    Bool,
    String,
    /// Growable ordered collections and sets.
    Sequence,
    /// Key/value collections.
    Map,
    /// Fixed-size arrays.
    Array,
    /// A calendar timestamp with an offset.
    Timestamp,
    /// A struct-like value with named fields.
    Record,
    /// An optional wrapper (`Option<T>`, JSON `null`).
    Nullable,
    /// A handle whose contents cannot be inspected, only tested for presence.
    Opaque,
}

impl ValueKind {
    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Unsigned | Self::Signed | Self::Duration | Self::Float
        )
    }

    /// Check if this kind is a collection with a length
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Sequence | Self::Map | Self::Array)
    }

    /// Check if this kind can be null
    pub const fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable | Self::Opaque)
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unsigned => "unsigned",
            Self::Signed => "signed",
            Self::Duration => "duration",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Array => "array",
            Self::Timestamp => "timestamp",
            Self::Record => "record",
            Self::Nullable => "nullable",
            Self::Opaque => "opaque",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
