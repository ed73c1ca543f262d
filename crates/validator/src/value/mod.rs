//! Runtime introspection of field values.
//!
//! Rules evaluate fields whose types are only known at runtime. Instead of
//! reflection, values describe themselves through two traits:
//!
//! - [`Inspect`]: any value that can be viewed as a [`FieldValue`]
//! - [`Record`]: struct-like values whose fields can be looked up by name
//!
//! `#[derive(Record)]` (behind the `derive` feature) implements both for
//! plain structs.

mod field;
mod inspect;
mod kind;

pub use field::FieldValue;
pub use kind::ValueKind;

/// A value that can describe itself as a [`FieldValue`].
///
/// # Examples
///
/// ```
/// use condval::value::{FieldValue, Inspect};
///
/// assert!(matches!(42u32.field_value(), FieldValue::Unsigned(42)));
/// assert!(matches!(vec![1, 2].field_value(), FieldValue::Sequence(2)));
/// assert!(matches!(Some("x").field_value(), FieldValue::Nullable(Some(_))));
/// ```
pub trait Inspect {
    /// Returns a borrowed view of this value.
    fn field_value(&self) -> FieldValue<'_>;
}

/// A struct-like value with named fields.
pub trait Record {
    /// Looks up a field by its exact name.
    fn field_by_name(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Returns true if every field holds its zero value.
    fn is_zero(&self) -> bool;

    /// Type name used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
