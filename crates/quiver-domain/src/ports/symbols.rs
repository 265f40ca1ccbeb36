//! Symbol Table Port
//!
//! Black-box queries against the host program's type system: lookup of
//! declared types, subtyping, member resolution, and superficial
//! well-formedness checks.

use crate::constants::ASSISTED_INJECT;
use crate::value_objects::{
    Annotated, ClassName, ElementId, Member, MethodElement, ResolvedSignature, TypeElement,
    TypeRef,
};
use std::collections::HashSet;
use thiserror::Error;

/// A declaration whose own type or annotations failed to resolve
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{element} has errors: {reason}")]
pub struct MalformedElement {
    pub element: ElementId,
    pub reason: String,
}

/// Type-system queries provided by the host compiler
pub trait SymbolTable: Send + Sync {
    /// Look up a declared type by name
    fn type_element(&self, name: &ClassName) -> Option<&TypeElement>;

    /// Whether `sub` is assignable to `sup`
    fn is_subtype(&self, sub: &TypeRef, sup: &TypeRef) -> bool;

    /// Signature of `method` with the container's type arguments substituted
    fn resolve_as_member_of(
        &self,
        container: &TypeRef,
        method: &Member<'_, MethodElement>,
    ) -> ResolvedSignature;

    /// Assert that the element's own type and annotations resolved
    ///
    /// Hosts that have nothing to report keep the default.
    fn check_well_formed(&self, _element: &ElementId) -> Result<(), MalformedElement> {
        Ok(())
    }

    /// Whether `ty` names a type with an `@AssistedInject` constructor
    fn is_assisted_injection_type(&self, ty: &TypeRef) -> bool {
        ty.class_name()
            .and_then(|name| self.type_element(name))
            .is_some_and(|element| {
                element
                    .constructors
                    .iter()
                    .any(|c| c.has_annotation(ASSISTED_INJECT))
            })
    }
}

/// Query against the output namespace: has an artifact with this name been
/// generated already, in this or an earlier round?
pub trait GeneratedArtifactIndex: Send + Sync {
    fn artifact_exists(&self, name: &ClassName) -> bool;
}

/// Index for a first round, where nothing has been generated yet
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeneratedArtifacts;

impl GeneratedArtifactIndex for NoGeneratedArtifacts {
    fn artifact_exists(&self, _name: &ClassName) -> bool {
        false
    }
}

impl GeneratedArtifactIndex for HashSet<ClassName> {
    fn artifact_exists(&self, name: &ClassName) -> bool {
        self.contains(name)
    }
}
