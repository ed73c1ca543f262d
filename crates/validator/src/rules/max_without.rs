//! The `max_without` rule.
//!
//! `max_without=<path>... <threshold>` passes if any of the listed sibling
//! paths holds a present value; otherwise the field must not exceed the
//! threshold.
//!
//! ```text
//! limit: max_without=filters.name filters.age query.text 1000
//! ```
//!
//! Paths are resolved from the structure that immediately contains the
//! field, with nested fields separated by dots.

use super::resolver::{DependencyPath, is_present};
use super::threshold::is_within_max;
use crate::host::FieldLevel;
use crate::value::FieldValue;
use smallvec::SmallVec;
use tracing::trace;

/// Name under which the rule is registered.
pub const MAX_WITHOUT: &str = "max_without";

/// A parsed `max_without` parameter string.
///
/// The string is split on single spaces; the last token is the threshold
/// and every token before it is a dependency path. A single token means an
/// unconditional maximum.
///
/// # Examples
///
/// ```
/// use condval::rules::RuleParams;
///
/// let params = RuleParams::parse("filters.name query.text 1000");
/// assert_eq!(params.threshold(), "1000");
/// assert_eq!(params.dependencies().len(), 2);
/// assert_eq!(params.dependencies()[0].segments(), &["filters", "name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleParams<'a> {
    dependencies: SmallVec<[DependencyPath<'a>; 2]>,
    threshold: &'a str,
}

impl<'a> RuleParams<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.rsplit_once(' ') {
            Some((paths, threshold)) => Self {
                dependencies: paths.split(' ').map(DependencyPath::parse).collect(),
                threshold,
            },
            None => Self {
                dependencies: SmallVec::new(),
                threshold: raw,
            },
        }
    }

    pub fn dependencies(&self) -> &[DependencyPath<'a>] {
        &self.dependencies
    }

    pub fn threshold(&self) -> &'a str {
        self.threshold
    }

    /// Evaluates the rule for `field` inside `parent`.
    pub fn evaluate(&self, field: FieldValue<'_>, parent: FieldValue<'_>) -> bool {
        if let Some(path) = self
            .dependencies
            .iter()
            .find(|path| is_present(parent, path.segments()))
        {
            trace!(%path, "max_without waived by present dependency");
            return true;
        }

        is_within_max(field, self.threshold)
    }
}

/// Evaluates `max_without` for `field` inside `parent` with a raw
/// parameter string.
///
/// # Examples
///
/// ```
/// use condval::rules::evaluate_max_without;
/// use condval::value::Inspect;
///
/// assert!(evaluate_max_without(9u32.field_value(), "".field_value(), "10"));
/// assert!(!evaluate_max_without(11u32.field_value(), "".field_value(), "10"));
/// ```
pub fn evaluate_max_without(field: FieldValue<'_>, parent: FieldValue<'_>, param: &str) -> bool {
    RuleParams::parse(param).evaluate(field, parent)
}

/// Evaluates `max_without` against what a host engine provides.
pub fn check_max_without(fl: &dyn FieldLevel) -> bool {
    evaluate_max_without(fl.field(), fl.parent(), fl.param())
}
