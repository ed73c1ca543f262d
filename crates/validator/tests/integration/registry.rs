//! Registering and invoking rules by name.

use crate::common::{TestData, init_tracing};
use condval::host::{FieldContext, FieldLevel};
use condval::registry::{RegistryError, RuleRegistry, with_custom};
use condval::rules::MAX_WITHOUT;
use serde_json::json;

#[test]
fn with_custom_then_evaluate_json_document() {
    init_tracing();
    let mut registry = RuleRegistry::new();
    with_custom(&mut registry).unwrap();

    let unfiltered = json!({ "limit": 500, "filters": { "name": "" } });
    let ctx = FieldContext::lookup(&unfiltered, "limit", "filters.name 100").unwrap();
    assert!(!registry.evaluate(MAX_WITHOUT, &ctx).unwrap());

    let filtered = json!({ "limit": 500, "filters": { "name": "rust" } });
    let ctx = FieldContext::lookup(&filtered, "limit", "filters.name 100").unwrap();
    assert!(registry.evaluate(MAX_WITHOUT, &ctx).unwrap());
}

#[test]
fn custom_rules_sit_next_to_max_without() {
    let mut registry = RuleRegistry::new();
    with_custom(&mut registry).unwrap();
    registry
        .register(
            "non_zero",
            |fl: &dyn FieldLevel| fl.field().unwrap_nullable().is_some_and(|v| !v.is_zero()),
            false,
        )
        .unwrap();

    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec!["max_without", "non_zero"]
    );

    let data = TestData {
        limit: Some(0),
        ..TestData::default()
    };
    let ctx = FieldContext::lookup(&data, "limit", "").unwrap();
    assert!(!registry.evaluate("non_zero", &ctx).unwrap());
}

#[test]
fn registering_max_without_twice_fails() {
    let mut registry = RuleRegistry::new();
    with_custom(&mut registry).unwrap();

    let err = registry
        .register(MAX_WITHOUT, |_: &dyn FieldLevel| true, true)
        .unwrap_err();
    assert!(matches!(err, RegistryError::Duplicate { name } if name == MAX_WITHOUT));
}

#[test]
fn shared_across_threads() {
    let mut registry = RuleRegistry::new();
    with_custom(&mut registry).unwrap();
    let registry = std::sync::Arc::new(registry);

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                let limit = i * 10;
                let ctx = FieldContext::new(&limit, &"", "15");
                registry.evaluate(MAX_WITHOUT, &ctx).unwrap()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, true, false, false]);
}
