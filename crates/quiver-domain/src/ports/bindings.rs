//! Binding Method Recognizer Port

use crate::value_objects::{Member, MethodElement};

/// Decides whether a method is any kind of binding method
pub trait BindingMethodRecognizer: Send + Sync {
    fn is_binding_method(&self, method: &Member<'_, MethodElement>) -> bool;
}
