//! `#[derive(Record)]` expansion behaviour.

use condval::value::{FieldValue, Inspect, Record, ValueKind};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

#[derive(Default, condval::Record)]
struct Options {
    #[record(rename = "Name")]
    name: String,
    r#type: u8,
    #[record(skip)]
    #[allow(dead_code)]
    cache: NotInspectable,
    tags: HashMap<String, String>,
}

#[derive(Default)]
struct NotInspectable;

#[derive(condval::Record)]
struct Pair(u32, Option<String>);

#[derive(condval::Record)]
struct Wrapper<T> {
    inner: T,
}

#[derive(condval::Record)]
struct Unit;

#[test]
fn renamed_and_raw_fields() {
    let options = Options {
        name: "x".into(),
        r#type: 3,
        ..Options::default()
    };

    assert!(matches!(options.field_by_name("Name"), Some(FieldValue::String("x"))));
    assert!(options.field_by_name("name").is_none());
    assert!(matches!(options.field_by_name("type"), Some(FieldValue::Unsigned(3))));
    assert!(options.field_by_name("cache").is_none());
    assert_eq!(
        options.field_by_name("tags").map(|v| v.kind()),
        Some(ValueKind::Map)
    );
}

#[test]
fn zero_ignores_skipped_fields() {
    assert!(Options::default().is_zero());
    assert!(Options::default().field_value().is_zero());

    let options = Options {
        r#type: 1,
        ..Options::default()
    };
    assert!(!options.is_zero());
}

#[test]
fn tuple_fields_by_index() {
    let pair = Pair(7, None);
    assert!(matches!(pair.field_by_name("0"), Some(FieldValue::Unsigned(7))));
    assert!(matches!(pair.field_by_name("1"), Some(FieldValue::Nullable(None))));
    assert!(pair.field_by_name("2").is_none());
    assert!(!pair.is_zero());
    assert!(Pair(0, None).is_zero());
}

#[test]
fn generic_records() {
    let wrapper = Wrapper { inner: vec![1u8] };
    assert_eq!(wrapper.field_value().kind(), ValueKind::Record);
    assert!(matches!(wrapper.field_by_name("inner"), Some(FieldValue::Sequence(1))));
}

#[test]
fn unit_struct_is_always_zero() {
    assert!(Unit.is_zero());
    assert!(Unit.field_by_name("anything").is_none());
}

#[test]
fn type_name_points_at_the_struct() {
    assert!(Unit.type_name().ends_with("Unit"));
}
