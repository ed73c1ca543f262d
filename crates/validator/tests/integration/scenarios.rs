//! End-to-end behaviour of the `max_without` rule.

use crate::common::{Filters, NestedFilters, TestData, init_tracing};
use condval::Record;
use condval::foundation::{Validate, ValidationResult};
use condval::host::FieldContext;
use condval::registry::{RuleRegistry, with_custom};
use condval::rules::{MAX_WITHOUT, max_without};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Default, Record)]
struct Query {
    text: String,
}

#[derive(Debug, Default, Record)]
struct Search {
    limit: u32,
    title: String,
    query: Query,
}

fn search(limit: u32, text: &str) -> Search {
    Search {
        limit,
        query: Query { text: text.into() },
        ..Search::default()
    }
}

fn registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    with_custom(&mut registry).unwrap();
    registry
}

#[rstest]
#[case::under_threshold(search(9, ""), "query.text 10", true)]
#[case::over_threshold_without_dependency(search(11, ""), "query.text 10", false)]
#[case::present_dependency_waives(search(11, "x"), "query.text 10", true)]
#[case::empty_dependency_does_not_waive(search(11, ""), "query.text 10", false)]
fn limit_scenarios(#[case] data: Search, #[case] param: &str, #[case] expected: bool) {
    init_tracing();
    let ctx = FieldContext::lookup(&data, "limit", param).unwrap();
    assert_eq!(registry().evaluate(MAX_WITHOUT, &ctx).unwrap(), expected);
}

#[rstest]
#[case("abc", "2", false)]
#[case("abc", "3", true)]
fn string_field_counts_characters(#[case] title: &str, #[case] param: &str, #[case] expected: bool) {
    let data = Search {
        title: title.into(),
        ..Search::default()
    };
    let ctx = FieldContext::lookup(&data, "title", param).unwrap();
    assert_eq!(registry().evaluate(MAX_WITHOUT, &ctx).unwrap(), expected);
}

fn test_data(string_f: &str, slice_f: &[&str]) -> TestData {
    TestData {
        limit: Some(20),
        filters: Filters {
            string_f: string_f.into(),
            nested_filters: NestedFilters {
                slice_f: slice_f.iter().map(ToString::to_string).collect(),
            },
        },
    }
}

#[rstest]
#[case::not_empty_dependency(test_data("a", &[]), "filters.string_f 10", false)]
#[case::empty_dependency(test_data("", &[]), "filters.string_f 10", true)]
#[case::not_empty_nested_dependency(
    test_data("", &["abc"]),
    "filters.nested_filters.slice_f 10",
    false
)]
#[case::empty_nested_dependency(test_data("", &[]), "filters.nested_filters.slice_f 10", true)]
fn optional_limit_with_filters(
    #[case] data: TestData,
    #[case] param: &str,
    #[case] want_err: bool,
) {
    let ctx = FieldContext::lookup(&data, "limit", param).unwrap();
    let passed = registry().evaluate(MAX_WITHOUT, &ctx).unwrap();
    assert_eq!(!passed, want_err);
}

#[test]
fn absent_optional_limit_fails_through_registry() {
    let data = TestData::default();
    let ctx = FieldContext::lookup(&data, "limit", "filters.string_f 10").unwrap();
    assert!(!registry().evaluate(MAX_WITHOUT, &ctx).unwrap());
}

#[test]
fn typed_validator_reports_structured_error() {
    let rule = max_without("filters.string_f filters.nested_filters.slice_f 10")
        .for_field("limit", |d: &TestData| &d.limit);

    assert!(rule.validate(&test_data("a", &[])).is_ok());
    assert!(rule.validate(&test_data("", &["x"])).is_ok());

    let err = rule.validate(&test_data("", &[])).unwrap_err();
    assert_eq!(err.code, "max_without");
    assert_eq!(err.field.as_deref(), Some("limit"));
    assert_eq!(err.param("max"), Some("10"));
    assert_eq!(
        err.param("without"),
        Some("filters.string_f filters.nested_filters.slice_f")
    );
}

#[test]
fn typed_validator_as_trait_object() {
    let rule = max_without("2").for_field("title", |s: &Search| s.title.as_str());
    let validators: Vec<Box<dyn Validate<Input = Search>>> = vec![Box::new(rule)];

    let data = Search {
        title: "ab".into(),
        ..Search::default()
    };
    assert!(validators.iter().all(|v| v.validate(&data).is_ok()));
}

#[test]
fn bound_validator_exposes_field_and_rule() {
    let rule = max_without("query.text 10").for_field("limit", |s: &Search| &s.limit);

    assert_eq!(rule.field_name(), "limit");
    assert_eq!(rule.rule().param(), "query.text 10");
    assert_eq!(rule.rule().params().threshold(), "10");

    let results: Vec<ValidationResult<()>> = [search(10, ""), search(11, ""), search(11, "x")]
        .iter()
        .map(|data| rule.validate(data))
        .collect();
    assert_eq!(
        results.iter().map(Result::is_ok).collect::<Vec<_>>(),
        vec![true, false, true]
    );
}
