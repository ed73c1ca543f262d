//! Introspection of `serde_json` values.
//!
//! Lets rules run over untyped JSON documents: objects behave as records,
//! arrays as sequences and `null` as an absent optional.
//!
//! ```
//! use condval::rules::evaluate_max_without;
//! use condval::value::Inspect;
//! use serde_json::json;
//!
//! let parent = json!({ "limit": 50, "filters": { "name": "x" } });
//! let field = json!(50);
//!
//! assert!(evaluate_max_without(field.field_value(), parent.field_value(), "filters.name 10"));
//! ```

use crate::value::{FieldValue, Inspect, Record};
use serde_json::{Map, Number, Value};

fn number_value(number: &Number) -> FieldValue<'_> {
    if let Some(v) = number.as_u64() {
        FieldValue::Unsigned(v)
    } else if let Some(v) = number.as_i64() {
        FieldValue::Signed(v)
    } else {
        number
            .as_f64()
            .map_or(FieldValue::Opaque { present: true }, FieldValue::Float)
    }
}

impl Inspect for Value {
    fn field_value(&self) -> FieldValue<'_> {
        match self {
            Value::Null => FieldValue::Nullable(None),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => number_value(n),
            Value::String(s) => FieldValue::String(s),
            Value::Array(items) => FieldValue::Sequence(items.len()),
            Value::Object(map) => FieldValue::Record(map),
        }
    }
}

impl Record for Map<String, Value> {
    fn field_by_name(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(Inspect::field_value)
    }

    fn is_zero(&self) -> bool {
        self.values().all(|value| value.field_value().is_zero())
    }

    fn type_name(&self) -> &'static str {
        "json object"
    }
}
