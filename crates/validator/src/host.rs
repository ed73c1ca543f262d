//! The per-call contract between a host validation engine and a rule.
//!
//! A host engine walking a struct hands each rule the value under test, the
//! structure that immediately contains it and the rule's raw parameter
//! string. [`FieldLevel`] is that contract; [`FieldContext`] is a plain
//! implementation of it for hosts that have the three pieces at hand.

use crate::value::{FieldValue, Inspect, Record};

/// What a host engine exposes to a rule for a single field.
pub trait FieldLevel {
    /// The value of the field under validation.
    fn field(&self) -> FieldValue<'_>;

    /// The structure that immediately contains the field.
    fn parent(&self) -> FieldValue<'_>;

    /// The raw parameter string of the rule, e.g. `"filters.name 10"`.
    fn param(&self) -> &str;

    /// Name of the field under validation, if the host knows it.
    fn field_name(&self) -> &str {
        ""
    }
}

/// A [`FieldLevel`] built from borrowed parts.
///
/// # Examples
///
/// ```
/// use condval::host::{FieldContext, FieldLevel};
/// use serde_json::json;
///
/// let parent = json!({ "limit": 7 });
/// let ctx = FieldContext::lookup(&parent, "limit", "10").unwrap();
///
/// assert_eq!(ctx.field_name(), "limit");
/// assert_eq!(ctx.param(), "10");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    field: FieldValue<'a>,
    parent: FieldValue<'a>,
    param: &'a str,
    name: &'a str,
}

impl<'a> FieldContext<'a> {
    /// Creates a context from a field value and its parent.
    pub fn new<F, P>(field: &'a F, parent: &'a P, param: &'a str) -> Self
    where
        F: Inspect + ?Sized,
        P: Inspect + ?Sized,
    {
        Self::from_parts(field.field_value(), parent.field_value(), param)
    }

    /// Creates a context from already inspected values.
    pub fn from_parts(field: FieldValue<'a>, parent: FieldValue<'a>, param: &'a str) -> Self {
        Self {
            field,
            parent,
            param,
            name: "",
        }
    }

    /// Resolves `name` on `parent` and builds a context for that field.
    ///
    /// Returns `None` if `parent` is not a record or has no such field.
    pub fn lookup<P>(parent: &'a P, name: &'a str, param: &'a str) -> Option<Self>
    where
        P: Inspect + ?Sized,
    {
        let parent = parent.field_value();
        let record: &'a dyn Record = parent.unwrap_nullable()?.as_record()?;
        let field = record.field_by_name(name)?;
        Some(Self::from_parts(field, parent, param).named(name))
    }

    /// Sets the field name reported by [`FieldLevel::field_name`].
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: &'a str) -> Self {
        self.name = name;
        self
    }
}

impl FieldLevel for FieldContext<'_> {
    fn field(&self) -> FieldValue<'_> {
        self.field
    }

    fn parent(&self) -> FieldValue<'_> {
        self.parent
    }

    fn param(&self) -> &str {
        self.param
    }

    fn field_name(&self) -> &str {
        self.name
    }
}
