//! Prelude module for convenient imports.
//!
//! ```rust
//! use condval::prelude::*;
//!
//! assert!(evaluate_max_without(3u8.field_value(), "".field_value(), "5"));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// VALUES: Introspection
// ============================================================================

pub use crate::value::{FieldValue, Inspect, Record, ValueKind};

#[cfg(feature = "derive")]
pub use condval_macros::Record;

// ============================================================================
// RULES
// ============================================================================

pub use crate::rules::{
    MAX_WITHOUT, MaxWithout, RuleParams, check_max_without, evaluate_max_without, max_without,
};

// ============================================================================
// HOSTING
// ============================================================================

pub use crate::host::{FieldContext, FieldLevel};
pub use crate::registry::{RegistryError, RuleRegistry, with_custom};
