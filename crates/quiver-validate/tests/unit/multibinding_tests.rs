//! Tests for multibinding annotation placement

use crate::test_utils::{binds, class, error_messages};
use quiver_domain::constants::{ELEMENTS_INTO_SET, INTO_MAP, INTO_SET, PROVIDES};
use quiver_domain::{
    AnnotationInstance, BindingMethodRecognizer, Member, MethodElement, TypeElement, TypeRef,
};
use quiver_validate::{AnyBindingMethodRecognizer, MultibindingAnnotationsChecker};
use std::sync::Arc;

fn module_with(method: MethodElement) -> TypeElement {
    class("AppModule").with_method(method)
}

fn checker() -> MultibindingAnnotationsChecker {
    MultibindingAnnotationsChecker::new(Arc::new(AnyBindingMethodRecognizer))
}

#[test]
fn test_each_annotation_on_non_binding_method_is_reported() {
    let into_set = AnnotationInstance::new(INTO_SET);
    let into_map = AnnotationInstance::new(INTO_MAP);
    let module = module_with(
        MethodElement::new("foo", TypeRef::declared("test.Foo"))
            .with_annotation(into_set.clone())
            .with_annotation(into_map.clone()),
    );
    let method = module.method("foo").expect("declared");

    let report = checker().check(&method);
    let errors = report.errors();

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.message
        == "Multibinding annotations may only be on @Provides, @Produces, or @Binds methods"));
    assert_eq!(errors[0].annotation, Some(into_set));
    assert_eq!(errors[1].annotation, Some(into_map));
    assert!(errors.iter().all(|e| e.element == method.id));
}

#[test]
fn test_binding_methods_may_carry_multibinding_annotations() {
    for binding in [AnnotationInstance::new(PROVIDES), binds()] {
        let module = module_with(
            MethodElement::new("foo", TypeRef::declared("test.Foo"))
                .with_annotation(binding)
                .with_annotation(AnnotationInstance::new(ELEMENTS_INTO_SET)),
        );
        let method = module.method("foo").expect("declared");

        assert!(checker().check(&method).is_clean());
    }
}

#[test]
fn test_method_without_multibinding_annotations_is_clean() {
    let module = module_with(MethodElement::new("foo", TypeRef::Void));
    let method = module.method("foo").expect("declared");

    assert!(checker().check(&method).all_items().is_empty());
}

#[test]
fn test_check_annotations_reports_only_given_annotations() {
    let into_set = AnnotationInstance::new(INTO_SET);
    let module = module_with(
        MethodElement::new("foo", TypeRef::Void)
            .with_annotation(into_set.clone())
            .with_annotation(AnnotationInstance::new(INTO_MAP)),
    );
    let method = module.method("foo").expect("declared");

    let report = checker().check_annotations(&method, &[&into_set]);

    assert_eq!(report.errors().len(), 1);
    assert_eq!(report.errors()[0].annotation, Some(into_set));
}

struct NamedRecognizer(&'static str);

impl BindingMethodRecognizer for NamedRecognizer {
    fn is_binding_method(&self, method: &Member<'_, MethodElement>) -> bool {
        method.name == self.0
    }
}

#[test]
fn test_recognizer_decides_what_a_binding_method_is() {
    let checker = MultibindingAnnotationsChecker::new(Arc::new(NamedRecognizer("contribute")));
    let module = class("AppModule")
        .with_method(
            MethodElement::new("contribute", TypeRef::Void)
                .with_annotation(AnnotationInstance::new(INTO_SET)),
        )
        .with_method(
            MethodElement::new("other", TypeRef::Void)
                .with_annotation(AnnotationInstance::new(INTO_SET)),
        );

    let contribute = module.method("contribute").expect("declared");
    let other = module.method("other").expect("declared");

    assert!(checker.check(&contribute).is_clean());
    assert_eq!(error_messages(&checker.check(&other)).len(), 1);
}
