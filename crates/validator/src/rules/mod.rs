//! The `max_without` conditional rule.
//!
//! - [`resolver`]: dependency paths and presence checks
//! - [`threshold`]: comparing a value against a textual maximum
//! - [`max_without`](mod@max_without): parameter parsing and evaluation
//! - [`validator`]: the typed [`Validate`](crate::foundation::Validate) adapter
//!
//! Rules answer a plain `bool`: a malformed parameter fails the field
//! instead of raising an error.

mod duration;
pub mod max_without;
pub mod resolver;
pub mod threshold;
pub mod validator;

pub use duration::{DurationError, parse_duration};
pub use max_without::{
    MAX_WITHOUT, RuleParams, check_max_without, evaluate_max_without,
};
pub use resolver::{DependencyPath, is_present};
pub use threshold::{TIMESTAMP_FORMAT, is_within_max};
pub use validator::{MaxWithout, MaxWithoutField, max_without};
