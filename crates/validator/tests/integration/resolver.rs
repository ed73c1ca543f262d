//! Presence checks along dependency paths over derived records.

use condval::Record;
use condval::rules::DependencyPath;
use rstest::rstest;

#[derive(Default, Record)]
struct StringProp {
    prop: String,
}

#[derive(Default, Record)]
struct OptionalProp {
    prop: Option<String>,
}

#[derive(Default, Record)]
struct SliceProp {
    prop: Vec<String>,
}

#[derive(Default, Record)]
struct Nested {
    nested_prop: SliceProp,
}

fn present(root: &dyn condval::value::Inspect, path: &str) -> bool {
    condval::rules::is_present(root.field_value(), DependencyPath::parse(path).segments())
}

#[rstest]
#[case::string_not_empty("abc", true)]
#[case::string_empty("", false)]
fn string_prop(#[case] value: &str, #[case] expected: bool) {
    let root = StringProp { prop: value.into() };
    assert_eq!(present(&root, "prop"), expected);
}

#[rstest]
#[case::ptr_string_nil(None, false)]
#[case::ptr_string_not_empty(Some("abc"), true)]
#[case::ptr_string_empty(Some(""), false)]
fn optional_prop(#[case] value: Option<&str>, #[case] expected: bool) {
    let root = OptionalProp {
        prop: value.map(Into::into),
    };
    assert_eq!(present(&root, "prop"), expected);
}

#[rstest]
#[case::slice_not_empty(vec!["abc"], true)]
#[case::slice_empty(vec![], false)]
fn slice_prop(#[case] value: Vec<&str>, #[case] expected: bool) {
    let root = SliceProp {
        prop: value.into_iter().map(Into::into).collect(),
    };
    assert_eq!(present(&root, "prop"), expected);
}

#[rstest]
#[case::nested_slice_not_empty(vec!["abc"], true)]
#[case::nested_slice_empty(vec![], false)]
fn nested_slice_prop(#[case] value: Vec<&str>, #[case] expected: bool) {
    let root = Nested {
        nested_prop: SliceProp {
            prop: value.into_iter().map(Into::into).collect(),
        },
    };
    assert_eq!(present(&root, "nested_prop.prop"), expected);
}

#[test]
fn lookups_are_case_sensitive() {
    let root = StringProp { prop: "x".into() };
    assert!(!present(&root, "Prop"));
}

#[test]
fn zero_parent_short_circuits() {
    // `nested_prop` is zero, so the walk never reaches the unknown leaf.
    let root = Nested::default();
    assert!(!present(&root, "nested_prop.does_not_exist"));
}
