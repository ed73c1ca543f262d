//! Core traits for the validation system

use crate::foundation::ValidationResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait typed validators implement.
///
/// Generic over the input type so that a validator built for one parent
/// struct cannot be applied to another by accident.
///
/// # Examples
///
/// ```
/// use condval::foundation::{Validate, ValidationError};
///
/// struct NonZero;
///
/// impl Validate for NonZero {
///     type Input = u64;
///
///     fn validate(&self, input: &u64) -> Result<(), ValidationError> {
///         if *input == 0 {
///             Err(ValidationError::new("non_zero", "Must not be zero"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonZero.validate(&1).is_ok());
/// assert!(NonZero.validate(&0).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` allows unsized inputs such as `str` and `[T]`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> ValidationResult<()>;
}

// ============================================================================
// TESTS
// ============================================================================
