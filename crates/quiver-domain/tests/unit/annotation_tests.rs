//! Unit tests for annotation instances

use quiver_domain::{Annotated, AnnotationInstance, AnnotationValue, FieldElement, TypeRef};

#[test]
fn test_structural_equality() {
    let a = AnnotationInstance::qualifier("javax.inject.Named")
        .with_value("value", AnnotationValue::Str("primary".into()));
    let b = AnnotationInstance::qualifier("javax.inject.Named")
        .with_value("value", AnnotationValue::Str("primary".into()));
    let c = AnnotationInstance::qualifier("javax.inject.Named")
        .with_value("value", AnnotationValue::Str("secondary".into()));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_meta_annotation_predicates() {
    let scope = AnnotationInstance::scope("javax.inject.Singleton");
    assert!(scope.is_scope());
    assert!(!scope.is_qualifier());
    assert!(!scope.is_map_key());

    let key = AnnotationInstance::map_key("dagger.multibindings.IntKey", AnnotationValue::Int(3));
    assert!(key.is_map_key());
}

#[test]
fn test_display() {
    let named = AnnotationInstance::qualifier("javax.inject.Named")
        .with_value("value", AnnotationValue::Str("db".into()));
    assert_eq!(named.to_string(), "@javax.inject.Named(\"db\")");

    let plain = AnnotationInstance::new("javax.inject.Inject");
    assert_eq!(plain.to_string(), "@javax.inject.Inject");

    let multi = AnnotationInstance::new("com.example.Config")
        .with_value("a", AnnotationValue::Bool(true))
        .with_value("b", AnnotationValue::Int(2));
    assert_eq!(multi.to_string(), "@com.example.Config(a = true, b = 2)");
}

#[test]
fn test_annotated_lookup() {
    let field = FieldElement::new("dep", TypeRef::declared("com.example.Dep"))
        .with_annotation(AnnotationInstance::new("javax.inject.Inject"));

    assert!(field.has_annotation("javax.inject.Inject"));
    assert!(field.has_any_annotation(&["jakarta.inject.Inject", "javax.inject.Inject"]));
    assert!(field.annotation("dagger.Lazy").is_none());
}
