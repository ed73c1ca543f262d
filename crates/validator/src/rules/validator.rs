//! Typed `max_without` validator bound to a field of a parent struct.

use super::max_without::{MAX_WITHOUT, RuleParams};
use crate::foundation::{Validate, ValidationError, ValidationResult};
use crate::value::Inspect;
use std::borrow::Cow;
use std::marker::PhantomData;

// ============================================================================
// RULE
// ============================================================================

/// An owned `max_without` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxWithout {
    param: Cow<'static, str>,
}

/// Creates a `max_without` rule from its parameter string.
///
/// # Examples
///
/// ```
/// use condval::foundation::Validate;
/// use condval::rules::max_without;
/// use condval::value::{FieldValue, Inspect, Record};
///
/// struct Search { limit: u32, query: String }
///
/// impl Record for Search {
///     fn field_by_name(&self, name: &str) -> Option<FieldValue<'_>> {
///         match name {
///             "limit" => Some(self.limit.field_value()),
///             "query" => Some(self.query.field_value()),
///             _ => None,
///         }
///     }
///
///     fn is_zero(&self) -> bool {
///         self.limit == 0 && self.query.is_empty()
///     }
/// }
///
/// impl Inspect for Search {
///     fn field_value(&self) -> FieldValue<'_> {
///         FieldValue::Record(self)
///     }
/// }
///
/// let rule = max_without("query 100").for_field("limit", |s: &Search| &s.limit);
///
/// assert!(rule.validate(&Search { limit: 5_000, query: "rust".into() }).is_ok());
/// let err = rule.validate(&Search { limit: 5_000, query: String::new() }).unwrap_err();
/// assert_eq!(err.param("max"), Some("100"));
/// ```
pub fn max_without(param: impl Into<Cow<'static, str>>) -> MaxWithout {
    MaxWithout {
        param: param.into(),
    }
}

impl MaxWithout {
    /// The raw parameter string.
    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn params(&self) -> RuleParams<'_> {
        RuleParams::parse(&self.param)
    }

    /// Returns true if `field` inside `parent` satisfies the rule.
    pub fn check<F, P>(&self, field: &F, parent: &P) -> bool
    where
        F: Inspect + ?Sized,
        P: Inspect + ?Sized,
    {
        self.params().evaluate(field.field_value(), parent.field_value())
    }

    /// Binds the rule to a named field of `T`.
    pub fn for_field<T, U, F>(
        self,
        name: impl Into<Cow<'static, str>>,
        accessor: F,
    ) -> MaxWithoutField<T, U, F>
    where
        U: ?Sized,
        F: Fn(&T) -> &U,
    {
        MaxWithoutField {
            name: name.into(),
            rule: self,
            accessor,
            _phantom: PhantomData,
        }
    }

    fn error(&self) -> ValidationError {
        let params = self.params();
        let threshold = params.threshold().to_owned();
        let without = params
            .dependencies()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let message = if without.is_empty() {
            format!("Must not exceed {threshold}")
        } else {
            format!("Must not exceed {threshold} unless one of [{without}] is set")
        };

        let error = ValidationError::new(MAX_WITHOUT, message).with_param("max", threshold);
        if without.is_empty() {
            error
        } else {
            error.with_param("without", without)
        }
    }
}

// ============================================================================
// FIELD BINDING
// ============================================================================

/// A [`MaxWithout`] rule bound to one field of a parent struct.
///
/// # Type Parameters
///
/// * `T` - The parent struct type
/// * `U` - The field type (can be `?Sized`)
/// * `F` - The accessor function type
pub struct MaxWithoutField<T, U, F>
where
    U: ?Sized,
{
    name: Cow<'static, str>,
    rule: MaxWithout,
    accessor: F,
    _phantom: PhantomData<fn(&T) -> &U>,
}

impl<T, U, F> MaxWithoutField<T, U, F>
where
    U: ?Sized,
{
    pub fn field_name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &MaxWithout {
        &self.rule
    }
}

// Clone impl - manual because F might not derive Clone
impl<T, U, F> Clone for MaxWithoutField<T, U, F>
where
    F: Clone,
    U: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            rule: self.rule.clone(),
            accessor: self.accessor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, U, F> std::fmt::Debug for MaxWithoutField<T, U, F>
where
    U: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxWithoutField")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .field("accessor", &"<function>")
            .finish()
    }
}

impl<T, U, F> Validate for MaxWithoutField<T, U, F>
where
    T: Inspect,
    U: Inspect + ?Sized,
    F: Fn(&T) -> &U,
{
    type Input = T;

    fn validate(&self, input: &T) -> ValidationResult<()> {
        let field = (self.accessor)(input);
        if self.rule.check(field, input) {
            Ok(())
        } else {
            Err(self.rule.error().with_field(self.name.clone()))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
