//! Multibinding annotation placement
//!
//! `@IntoSet`, `@ElementsIntoSet`, and `@IntoMap` only mean something on a
//! binding method. This pass reports each occurrence on any other method.

use crate::annotations;
use crate::messages::MultibindingMessage;
use crate::report::ValidationReport;
use quiver_domain::constants::BINDING_METHOD_ANNOTATIONS;
use quiver_domain::{
    Annotated, AnnotationInstance, BindingMethodRecognizer, Member, MethodElement,
};
use std::sync::Arc;

/// Recognizes methods annotated with any binding-method annotation
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyBindingMethodRecognizer;

impl BindingMethodRecognizer for AnyBindingMethodRecognizer {
    fn is_binding_method(&self, method: &Member<'_, MethodElement>) -> bool {
        method.has_any_annotation(BINDING_METHOD_ANNOTATIONS)
    }
}

pub struct MultibindingAnnotationsChecker {
    recognizer: Arc<dyn BindingMethodRecognizer>,
}

impl MultibindingAnnotationsChecker {
    pub fn new(recognizer: Arc<dyn BindingMethodRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Check every multibinding annotation present on `method`
    pub fn check(&self, method: &Member<'_, MethodElement>) -> ValidationReport {
        let present = annotations::multibinding_annotations(method.element);
        self.check_annotations(method, &present)
    }

    /// One error per annotation in `present` unless `method` is a binding
    /// method, each attributed to that annotation occurrence
    pub fn check_annotations(
        &self,
        method: &Member<'_, MethodElement>,
        present: &[&AnnotationInstance],
    ) -> ValidationReport {
        let mut builder = ValidationReport::about(method.id.clone());
        if !present.is_empty() && !self.recognizer.is_binding_method(method) {
            for annotation in present {
                builder.add_error_at(
                    MultibindingMessage::NotOnBindingMethod {},
                    &method.id,
                    Some(*annotation),
                );
            }
        }
        builder.build()
    }
}
