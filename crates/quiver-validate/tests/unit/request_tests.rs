//! Tests for dependency request shape validation

use crate::test_utils::{FakeSymbolTable, assisted_inject, class, error_messages, name, named, ty};
use quiver_domain::constants::{LAZY, MEMBERS_INJECTOR, PRODUCED, PRODUCER, PROVIDER};
use quiver_domain::{
    AnnotationInstance, ConstructorElement, ElementId, FieldElement, Member, RequestKind, TypeRef,
};
use quiver_validate::request::{framework_kind, request_kind_of};
use quiver_validate::{
    DefaultKeyFactory, DependencyRequestFactory, DependencyRequestValidator, ValidationReport,
};
use std::sync::Arc;

fn provider(arg: TypeRef) -> TypeRef {
    TypeRef::generic(PROVIDER, vec![arg])
}

fn lazy(arg: TypeRef) -> TypeRef {
    TypeRef::generic(LAZY, vec![arg])
}

fn field_id() -> ElementId {
    ElementId::Field {
        owner: name("Client"),
        name: "dep".to_string(),
    }
}

fn request_validator() -> DependencyRequestValidator {
    let assisted = class("AssistedFoo")
        .with_constructor(ConstructorElement::new().with_annotation(assisted_inject()));
    DependencyRequestValidator::new(Arc::new(FakeSymbolTable::new().with_type(assisted)))
}

/// Error messages for a field of type `ty` carrying `annotations`
fn check(ty: TypeRef, annotations: Vec<AnnotationInstance>) -> ValidationReport {
    let mut field = FieldElement::new("dep", ty.clone());
    field.annotations = annotations;
    let site = Member::new(field_id(), &field);
    let validator = request_validator();

    let mut builder = ValidationReport::about(field_id());
    validator.validate_dependency_request(&mut builder, &site, &ty);
    validator.check_not_producer(&mut builder, &site, &ty);
    builder.build()
}

#[test]
fn test_valid_request_shapes() {
    for ty in [
        ty("Foo"),
        provider(ty("Foo")),
        lazy(ty("Foo")),
        provider(lazy(ty("Foo"))),
        TypeRef::generic(MEMBERS_INJECTOR, vec![ty("Foo")]),
        TypeRef::generic("java.util.List", vec![TypeRef::unbounded_wildcard()]),
    ] {
        let report = check(ty.clone(), Vec::new());
        assert!(report.is_clean(), "{ty} should be a valid request");
    }
}

#[test]
fn test_raw_framework_types() {
    assert_eq!(
        error_messages(&check(TypeRef::declared(PROVIDER), Vec::new())),
        vec!["Injecting the raw type javax.inject.Provider is not supported"]
    );
    assert_eq!(
        error_messages(&check(provider(TypeRef::declared(LAZY)), Vec::new())),
        vec!["Injecting the raw type javax.inject.Provider<dagger.Lazy> is not supported"]
    );
}

#[test]
fn test_wildcard_framework_arguments() {
    assert_eq!(
        error_messages(&check(provider(TypeRef::unbounded_wildcard()), Vec::new())),
        vec![
            "Injecting Provider<T>, Lazy<T>, Producer<T>, or Produced<T> when T is a wildcard type such as javax.inject.Provider<?> is not supported"
        ]
    );
    let nested = provider(lazy(TypeRef::unbounded_wildcard()));
    assert_eq!(check(nested, Vec::new()).errors().len(), 1);
}

#[test]
fn test_nested_framework_types() {
    assert_eq!(
        error_messages(&check(lazy(provider(ty("Foo"))), Vec::new())),
        vec!["dagger.Lazy<javax.inject.Provider<test.Foo>> is not a valid request: Lazy may not wrap Provider"]
    );
    assert_eq!(
        error_messages(&check(provider(provider(ty("Foo"))), Vec::new())),
        vec!["javax.inject.Provider<javax.inject.Provider<test.Foo>> is not a valid request: Provider may not wrap Provider"]
    );
    assert_eq!(
        error_messages(&check(provider(lazy(lazy(ty("Foo")))), Vec::new())),
        vec!["javax.inject.Provider<dagger.Lazy<dagger.Lazy<test.Foo>>> is not a valid request: Lazy may not wrap Lazy"]
    );
}

#[test]
fn test_multiple_qualifiers_report_each_qualifier() {
    let report = check(ty("Foo"), vec![named("a"), named("b")]);
    let errors = report.errors();

    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0].message,
        "A single dependency request may not use more than one @Qualifier"
    );
    assert_eq!(errors[0].annotation, Some(named("a")));
    assert_eq!(errors[1].annotation, Some(named("b")));
    assert_eq!(errors[0].element, field_id());
}

#[test]
fn test_single_qualifier_is_allowed() {
    assert!(check(ty("Foo"), vec![named("a")]).is_clean());
}

#[test]
fn test_assisted_injection_types_cannot_be_requested() {
    let expected = "Injecting @AssistedInject type test.AssistedFoo is not supported. Did you mean to inject its assisted factory type instead?";

    assert_eq!(error_messages(&check(ty("AssistedFoo"), Vec::new())), vec![expected]);
    assert_eq!(
        error_messages(&check(provider(ty("AssistedFoo")), Vec::new())),
        vec![expected]
    );
    assert_eq!(
        error_messages(&check(provider(lazy(ty("AssistedFoo"))), Vec::new())),
        vec![expected]
    );
}

#[test]
fn test_producer_types_outside_producers() {
    assert_eq!(
        error_messages(&check(TypeRef::generic(PRODUCER, vec![ty("Foo")]), Vec::new())),
        vec!["Producer may only be injected in @Produces methods"]
    );
    assert_eq!(
        error_messages(&check(TypeRef::generic(PRODUCED, vec![ty("Foo")]), Vec::new())),
        vec!["Produced may only be injected in @Produces methods"]
    );
}

#[test]
fn test_framework_kind_by_name() {
    assert_eq!(framework_kind(&quiver_domain::ClassName::parse(PROVIDER)), Some(RequestKind::Provider));
    assert_eq!(
        framework_kind(&quiver_domain::ClassName::parse("jakarta.inject.Provider")),
        Some(RequestKind::Provider)
    );
    assert_eq!(framework_kind(&quiver_domain::ClassName::parse(LAZY)), Some(RequestKind::Lazy));
    assert_eq!(framework_kind(&name("Foo")), None);
}

#[test]
fn test_request_kind_of_unwraps_framework_types() {
    assert_eq!(request_kind_of(&ty("Foo")), (RequestKind::Instance, ty("Foo")));
    assert_eq!(request_kind_of(&provider(ty("Foo"))), (RequestKind::Provider, ty("Foo")));
    assert_eq!(request_kind_of(&lazy(ty("Foo"))), (RequestKind::Lazy, ty("Foo")));
    assert_eq!(
        request_kind_of(&provider(lazy(ty("Foo")))),
        (RequestKind::ProviderOfLazy, ty("Foo"))
    );
    assert_eq!(
        request_kind_of(&TypeRef::generic(PRODUCED, vec![ty("Foo")])),
        (RequestKind::Produced, ty("Foo"))
    );
    assert_eq!(
        request_kind_of(&TypeRef::declared(PROVIDER)),
        (RequestKind::Provider, TypeRef::declared(PROVIDER))
    );
}

#[test]
fn test_request_factory_builds_qualified_key() {
    let field = FieldElement::new("dep", provider(lazy(ty("Foo"))))
        .with_annotation(named("primary"))
        .with_annotation(AnnotationInstance::new("androidx.annotation.Nullable"));
    let site = Member::new(field_id(), &field);
    let factory = DependencyRequestFactory::new(Arc::new(DefaultKeyFactory::new()));

    let request = factory.for_required_resolved_variable(&site, &field.ty);

    assert_eq!(request.kind, RequestKind::ProviderOfLazy);
    assert_eq!(request.key.ty, ty("Foo"));
    assert_eq!(request.key.qualifier, Some(named("primary")));
    assert_eq!(request.request_element, Some(field_id()));
    assert!(request.is_nullable);
}

#[test]
fn test_request_factory_plain_instance() {
    let field = FieldElement::new("dep", ty("Foo"));
    let site = Member::new(field_id(), &field);
    let factory = DependencyRequestFactory::new(Arc::new(DefaultKeyFactory::new()));

    let request = factory.for_required_resolved_variable(&site, &ty("Bar"));

    assert_eq!(request.kind, RequestKind::Instance);
    assert_eq!(request.key.ty, ty("Bar"));
    assert_eq!(request.key.qualifier, None);
    assert!(!request.is_nullable);
}
