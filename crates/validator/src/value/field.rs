//! Borrowed view of a runtime field value.

use super::{Inspect, Record, ValueKind};
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// A typed, borrowed view of a field value.
///
/// This is what the rules see instead of runtime reflection: any type that
/// implements [`Inspect`] can describe itself as one of these variants.
/// Scalars are copied out, collections only report their length, and
/// structured values stay behind a reference so paths are walked lazily.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    Unsigned(u64),
    Signed(i64),
    /// Nanoseconds. Wide enough for any `std::time::Duration`.
    Duration(i128),
    Float(f64),
    Bool(bool),
    String(&'a str),
    /// Element count of a growable collection.
    Sequence(usize),
    /// Entry count of a key/value collection.
    Map(usize),
    /// A fixed-size array; `zero` is true when every element is zero.
    Array { len: usize, zero: bool },
    Timestamp(DateTime<FixedOffset>),
    Record(&'a dyn Record),
    /// `None` for an absent value, otherwise the wrapped value.
    Nullable(Option<&'a dyn Inspect>),
    Opaque { present: bool },
}

impl<'a> FieldValue<'a> {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Unsigned(_) => ValueKind::Unsigned,
            Self::Signed(_) => ValueKind::Signed,
            Self::Duration(_) => ValueKind::Duration,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::String(_) => ValueKind::String,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Map(_) => ValueKind::Map,
            Self::Array { .. } => ValueKind::Array,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::Record(_) => ValueKind::Record,
            Self::Nullable(_) => ValueKind::Nullable,
            Self::Opaque { .. } => ValueKind::Opaque,
        }
    }

    /// Returns true if this is the zero value of its kind.
    ///
    /// Zero values follow `Default`: `0`, `false`, `""`, empty collections,
    /// the Unix epoch, `None`, and records whose every field is zero. A
    /// float is zero only when its bit pattern is, so `-0.0` is not.
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Unsigned(v) => v == 0,
            Self::Signed(v) => v == 0,
            Self::Duration(v) => v == 0,
            Self::Float(v) => v.to_bits() == 0,
            Self::Bool(v) => !v,
            Self::String(v) => v.is_empty(),
            Self::Sequence(len) | Self::Map(len) => len == 0,
            Self::Array { zero, .. } => zero,
            Self::Timestamp(t) => t.timestamp() == 0 && t.timestamp_subsec_nanos() == 0,
            Self::Record(record) => record.is_zero(),
            Self::Nullable(inner) => inner.is_none(),
            Self::Opaque { present } => !present,
        }
    }

    /// Returns true if this value counts as present at the end of a path.
    ///
    /// Collections need at least one element, nullable values and opaque
    /// handles need to be set, and everything else must be non-zero.
    pub fn is_present(&self) -> bool {
        match *self {
            Self::Sequence(len) | Self::Map(len) => len > 0,
            Self::Nullable(inner) => inner.is_some(),
            Self::Opaque { present } => present,
            _ => !self.is_zero(),
        }
    }

    /// Dereferences one level of optional wrapping.
    ///
    /// Returns `None` for an absent value; any non-nullable value is
    /// returned unchanged.
    pub fn unwrap_nullable(self) -> Option<FieldValue<'a>> {
        match self {
            Self::Nullable(Some(inner)) => Some(inner.field_value()),
            Self::Nullable(None) => None,
            other => Some(other),
        }
    }

    /// Returns the record behind this value, if it is one.
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match *self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => f.debug_tuple("Unsigned").field(v).finish(),
            Self::Signed(v) => f.debug_tuple("Signed").field(v).finish(),
            Self::Duration(v) => f.debug_tuple("Duration").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Sequence(len) => f.debug_tuple("Sequence").field(len).finish(),
            Self::Map(len) => f.debug_tuple("Map").field(len).finish(),
            Self::Array { len, zero } => f
                .debug_struct("Array")
                .field("len", len)
                .field("zero", zero)
                .finish(),
            Self::Timestamp(t) => f.debug_tuple("Timestamp").field(t).finish(),
            Self::Record(record) => f.debug_tuple("Record").field(&record.type_name()).finish(),
            Self::Nullable(inner) => f
                .debug_tuple("Nullable")
                .field(&inner.map(Inspect::field_value))
                .finish(),
            Self::Opaque { present } => f
                .debug_struct("Opaque")
                .field("present", present)
                .finish(),
        }
    }
}
