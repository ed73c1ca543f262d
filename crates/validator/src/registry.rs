//! Named rule registration.
//!
//! A host engine looks rules up by the name used in its constraint strings.
//! [`RuleRegistry`] is that name table; [`with_custom`] installs the rules
//! this crate provides.
//!
//! ```
//! use condval::host::FieldContext;
//! use condval::registry::{RuleRegistry, with_custom};
//! use serde_json::json;
//!
//! let mut registry = RuleRegistry::new();
//! with_custom(&mut registry).unwrap();
//!
//! let parent = json!({ "limit": 50, "query": "" });
//! let ctx = FieldContext::lookup(&parent, "limit", "query 10").unwrap();
//! assert!(!registry.evaluate("max_without", &ctx).unwrap());
//! ```

use crate::host::FieldLevel;
use crate::rules::{MAX_WITHOUT, check_max_without};
use crate::value::FieldValue;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Characters that delimit rules and parameters in constraint strings.
const RESERVED_CHARS: &str = ".[],|=+()`~!@#$%^&*\\\"/?<>{};:'";

/// Names with a built-in meaning in constraint strings.
const RESERVED_NAMES: &[&str] = &[
    "-",
    "dive",
    "keys",
    "endkeys",
    "omitempty",
    "omitnil",
    "required",
    "isdefault",
    "structonly",
    "nostructlevel",
];

/// A rule callable through the registry.
pub type RuleFn = dyn Fn(&dyn FieldLevel) -> bool + Send + Sync;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors from registering or looking up rules.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("rule name must not be empty")]
    EmptyName,

    #[error("rule name {name:?} is reserved or contains reserved characters")]
    InvalidName { name: String },

    #[error("rule {name:?} is already registered")]
    Duplicate { name: String },

    #[error("no rule registered as {name:?}")]
    UnknownRule { name: String },

    #[error("register validation: {0}")]
    Register(#[source] Box<RegistryError>),
}

// ============================================================================
// REGISTRY
// ============================================================================

struct Registration {
    rule: Box<RuleFn>,
    call_even_if_null: bool,
}

/// A table of rules keyed by name.
///
/// Built once at startup and then shared; every stored rule is
/// `Send + Sync`.
#[derive(Default)]
pub struct RuleRegistry {
    rules: BTreeMap<Cow<'static, str>, Registration>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rule` under `name`.
    ///
    /// When `call_even_if_null` is false the rule is never invoked for an
    /// absent optional field; such a field fails instead.
    pub fn register<R>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        rule: R,
        call_even_if_null: bool,
    ) -> Result<(), RegistryError>
    where
        R: Fn(&dyn FieldLevel) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        validate_name(&name)?;
        if self.rules.contains_key(&name) {
            return Err(RegistryError::Duplicate {
                name: name.into_owned(),
            });
        }

        debug!(rule = %name, call_even_if_null, "registered validation rule");
        self.rules.insert(
            name,
            Registration {
                rule: Box::new(rule),
                call_even_if_null,
            },
        );
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RuleFn> {
        self.rules.get(name).map(|r| r.rule.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Returns the `call_even_if_null` flag a rule was registered with.
    pub fn calls_even_if_null(&self, name: &str) -> Option<bool> {
        self.rules.get(name).map(|r| r.call_even_if_null)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|name| &**name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the rule registered as `name` for one field.
    pub fn evaluate(&self, name: &str, fl: &dyn FieldLevel) -> Result<bool, RegistryError> {
        let registration = self
            .rules
            .get(name)
            .ok_or_else(|| RegistryError::UnknownRule {
                name: name.to_owned(),
            })?;

        if !registration.call_even_if_null && matches!(fl.field(), FieldValue::Nullable(None)) {
            debug!(rule = name, field = fl.field_name(), "skipping rule for absent field");
            return Ok(false);
        }

        Ok((registration.rule)(fl))
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::EmptyName);
    }
    let reserved = RESERVED_NAMES.contains(&name)
        || name
            .chars()
            .any(|c| c.is_whitespace() || RESERVED_CHARS.contains(c));
    if reserved {
        return Err(RegistryError::InvalidName {
            name: name.to_owned(),
        });
    }
    Ok(())
}

/// Registers the rules provided by this crate.
pub fn with_custom(registry: &mut RuleRegistry) -> Result<(), RegistryError> {
    registry
        .register(MAX_WITHOUT, check_max_without, false)
        .map_err(|error| RegistryError::Register(Box::new(error)))
}
