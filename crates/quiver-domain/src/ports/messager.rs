//! Diagnostic Sink Port

use crate::value_objects::{AnnotationInstance, ElementId, Severity};

/// Receives diagnostics for rendering by the host compiler
pub trait Messager {
    fn print_message(
        &self,
        kind: Severity,
        message: &str,
        element: &ElementId,
        annotation: Option<&AnnotationInstance>,
    );
}
