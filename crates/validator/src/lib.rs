//! # condval
//!
//! Conditional field validation: the `max_without` rule.
//!
//! A field tagged `max_without=<path>... <threshold>` must not exceed the
//! threshold unless one of the listed sibling paths holds a present value.
//! The threshold is interpreted by the kind of the field: integers by
//! value, strings by character count, collections by length, durations by
//! nanoseconds and timestamps by instant.
//!
//! ## Quick Start
//!
//! ```rust
//! use condval::prelude::*;
//!
//! #[derive(Record, Default)]
//! struct Filters {
//!     name: String,
//! }
//!
//! #[derive(Record, Default)]
//! struct Search {
//!     limit: u32,
//!     filters: Filters,
//! }
//!
//! let rule = max_without("filters.name 10").for_field("limit", |s: &Search| &s.limit);
//!
//! // Unfiltered searches are capped.
//! assert!(rule.validate(&Search { limit: 50, ..Search::default() }).is_err());
//!
//! // A filter lifts the cap.
//! let filtered = Search {
//!     limit: 50,
//!     filters: Filters { name: "rust".into() },
//! };
//! assert!(rule.validate(&filtered).is_ok());
//! ```
//!
//! ## Hosting the rule
//!
//! Engines that look rules up by name use [`registry::RuleRegistry`] and
//! [`registry::with_custom`], handing each call a [`host::FieldLevel`].
//!
//! ## Features
//!
//! - `derive` (default): `#[derive(Record)]`
//! - `json` (default): introspection of `serde_json::Value`

// Lets the derive macro's `::condval::` paths resolve inside this crate.
extern crate self as condval;

pub mod foundation;
pub mod host;
#[cfg(feature = "json")]
pub mod json;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod value;

#[cfg(feature = "derive")]
pub use condval_macros::Record;
