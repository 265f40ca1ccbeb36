//! Qualifier, scope, and map-key extraction
//!
//! Classifies the annotations on a declaration by the meta-annotations on
//! their types. Cardinality is not enforced here; validators decide how many
//! of each kind are legal where.

use quiver_domain::constants::{ASSISTED_INJECT, INJECT_ANNOTATIONS, MULTIBINDING_ANNOTATIONS};
use quiver_domain::{Annotated, AnnotationInstance};

/// Annotations whose type is a `@Qualifier`, in declaration order
pub fn qualifiers<A: Annotated + ?Sized>(element: &A) -> Vec<&AnnotationInstance> {
    element
        .annotations()
        .iter()
        .filter(|a| a.is_qualifier())
        .collect()
}

/// Annotations whose type is a `@Scope`, in declaration order
pub fn scopes<A: Annotated + ?Sized>(element: &A) -> Vec<&AnnotationInstance> {
    element
        .annotations()
        .iter()
        .filter(|a| a.is_scope())
        .collect()
}

/// Annotations whose type is a `@MapKey`, in declaration order
pub fn map_keys<A: Annotated + ?Sized>(element: &A) -> Vec<&AnnotationInstance> {
    element
        .annotations()
        .iter()
        .filter(|a| a.is_map_key())
        .collect()
}

/// The qualifier of an element that is known to carry at most one
pub fn single_qualifier<A: Annotated + ?Sized>(element: &A) -> Option<AnnotationInstance> {
    qualifiers(element).into_iter().next().cloned()
}

/// The map key of an element that is known to carry at most one
pub fn single_map_key<A: Annotated + ?Sized>(element: &A) -> Option<AnnotationInstance> {
    map_keys(element).into_iter().next().cloned()
}

/// Whether the element carries `@Inject` (either namespace)
pub fn is_inject<A: Annotated + ?Sized>(element: &A) -> bool {
    element.has_any_annotation(INJECT_ANNOTATIONS)
}

pub fn is_assisted_inject<A: Annotated + ?Sized>(element: &A) -> bool {
    element.has_annotation(ASSISTED_INJECT)
}

/// The annotation that makes a constructor an injection constructor,
/// preferring `@Inject` over `@AssistedInject`
pub fn injection_annotation<A: Annotated + ?Sized>(element: &A) -> Option<&AnnotationInstance> {
    element
        .annotations()
        .iter()
        .find(|a| a.name.is_any(INJECT_ANNOTATIONS))
        .or_else(|| element.annotation(ASSISTED_INJECT))
}

/// `@IntoSet`, `@ElementsIntoSet`, and `@IntoMap` occurrences
pub fn multibinding_annotations<A: Annotated + ?Sized>(element: &A) -> Vec<&AnnotationInstance> {
    element
        .annotations()
        .iter()
        .filter(|a| a.name.is_any(MULTIBINDING_ANNOTATIONS))
        .collect()
}
