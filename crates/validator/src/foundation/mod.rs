//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`]
//!
//! Rules in [`crate::rules`] answer a plain `bool`. The typed adapters built
//! on top of them implement [`Validate`] and turn a failed rule into a
//! [`ValidationError`] carrying the field name and rule parameters.

pub mod error;
pub mod traits;

pub use error::{ErrorParams, ValidationError};
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
