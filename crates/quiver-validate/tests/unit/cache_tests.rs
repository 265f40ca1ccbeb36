//! Tests for report memoization

use crate::test_utils::{FakeSymbolTable, class, inject, name, ty, validator};
use quiver_domain::{ConstructorElement, FieldElement, Modifiers};
use quiver_validate::{CycleDetected, ReportCache, ValidationReport};
use std::cell::Cell;
use std::sync::Arc;

fn empty_report(simple: &str) -> ValidationReport {
    ValidationReport::about(class(simple).id()).build()
}

#[test]
fn test_get_or_compute_computes_once() {
    let cache = ReportCache::new("test");
    let computed = Cell::new(0);
    let key = name("Foo");

    let first = cache
        .get_or_compute(&key, || {
            computed.set(computed.get() + 1);
            empty_report("Foo")
        })
        .expect("first compute");
    let second = cache
        .get_or_compute(&key, || {
            computed.set(computed.get() + 1);
            empty_report("Foo")
        })
        .expect("cache hit");

    assert_eq!(computed.get(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
    assert!(cache.contains(&key));
}

#[test]
fn test_reentrant_compute_of_same_key_is_a_cycle() {
    let cache = ReportCache::new("test");
    let key = name("Foo");

    let outer = cache.get_or_compute(&key, || {
        let inner = cache.get_or_compute(&key, || empty_report("Foo"));
        assert_eq!(inner.unwrap_err(), CycleDetected { key: name("Foo") });
        empty_report("Foo")
    });

    assert!(outer.is_ok());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_reentrant_compute_of_other_key_is_allowed() {
    let cache = ReportCache::new("test");

    let outer = cache.get_or_compute(&name("Foo"), || {
        let inner = cache.get_or_compute(&name("Bar"), || empty_report("Bar"));
        assert!(inner.is_ok());
        empty_report("Foo")
    });

    assert!(outer.is_ok());
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_key_is_released_after_cycle() {
    let cache = ReportCache::new("test");
    let key = name("Foo");
    let _ = cache.get_or_compute(&key, || {
        let _ = cache.get_or_compute(&key, || empty_report("Foo"));
        empty_report("Foo")
    });
    cache.clear();

    let again = cache.get_or_compute(&key, || empty_report("Foo"));

    assert!(again.is_ok());
}

#[test]
fn test_clear_empties_cache() {
    let cache = ReportCache::new("test");
    let _ = cache.get_or_compute(&name("Foo"), || empty_report("Foo"));

    cache.clear();

    assert!(cache.is_empty());
    assert!(cache.get(&name("Foo")).is_none());
}

#[test]
fn test_validate_is_memoized() {
    let foo = class("Foo").with_constructor(ConstructorElement::new().with_annotation(inject()));
    let validator = validator(FakeSymbolTable::new().with_type(foo.clone()));

    let first = validator.validate(&foo);
    let second = validator.validate(&foo);

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_clear_cache_recomputes_equal_report() {
    let foo = class("Foo").with_field(
        FieldElement::new("dep", ty("Dep"))
            .with_annotation(inject())
            .with_modifiers(Modifiers::private()),
    );
    let validator = validator(FakeSymbolTable::new().with_type(foo.clone()));

    let before = validator.validate(&foo);
    validator.clear_cache();
    let after = validator.validate(&foo);

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before, after);
}

#[test]
fn test_codegen_validator_has_its_own_caches() {
    let foo = class("Foo");
    let validator = Arc::new(validator(FakeSymbolTable::new().with_type(foo.clone())));
    let base_report = validator.validate(&foo);

    let for_codegen = validator.when_generating_code();
    let codegen_report = for_codegen.validate(&foo);

    assert!(!Arc::ptr_eq(&base_report, &codegen_report));
    assert_eq!(base_report, codegen_report);
}
