//! Resolving dot-separated field paths to decide whether a value is present.

use crate::value::{FieldValue, Inspect};
use smallvec::SmallVec;
use std::fmt;
use tracing::{debug, trace};

/// A dot-separated path such as `filters.name`, split into segments.
///
/// Segments are matched exactly and case-sensitively against field names.
/// An empty path refers to the root value itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyPath<'a> {
    segments: SmallVec<[&'a str; 4]>,
}

impl<'a> DependencyPath<'a> {
    /// Splits `raw` on `.` into path segments.
    pub fn parse(raw: &'a str) -> Self {
        Self {
            segments: raw.split('.').collect(),
        }
    }

    /// The path that refers to the root value.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Returns true if the value at this path below `root` is present.
    ///
    /// See [`is_present`].
    pub fn is_present_in<T: Inspect + ?Sized>(&self, root: &T) -> bool {
        is_present(root.field_value(), &self.segments)
    }
}

impl fmt::Display for DependencyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Walks `path` from `root` and reports whether the final value is present.
///
/// At every step one level of optional wrapping is removed; an absent
/// wrapper is not present. Each segment must name a field of a record, and
/// the walk stops with `false` at the first missing or zero-valued field.
/// Once the path is exhausted, collections must be non-empty, optional
/// values and opaque handles must be set, and anything else must be
/// non-zero.
///
/// # Examples
///
/// ```
/// use condval::rules::is_present;
/// use condval::value::Inspect;
/// use serde_json::json;
///
/// let doc = json!({ "filters": { "name": "x", "tags": [] } });
///
/// assert!(is_present(doc.field_value(), &["filters", "name"]));
/// assert!(!is_present(doc.field_value(), &["filters", "tags"]));
/// assert!(!is_present(doc.field_value(), &["filters", "missing"]));
/// ```
pub fn is_present(root: FieldValue<'_>, path: &[&str]) -> bool {
    let Some(mut current) = root.unwrap_nullable() else {
        return false;
    };

    for segment in path {
        let Some(record) = current.as_record() else {
            trace!(segment, kind = %current.kind(), "path descends into a non-record");
            return false;
        };
        let Some(field) = record.field_by_name(segment) else {
            debug!(segment, record = record.type_name(), "unknown dependency field");
            return false;
        };
        if field.is_zero() {
            return false;
        }
        current = match field.unwrap_nullable() {
            Some(value) => value,
            None => return false,
        };
    }

    current.is_present()
}
