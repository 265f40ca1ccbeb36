//! Key Factory Port

use crate::value_objects::{
    AnnotationInstance, Key, Member, MethodElement, ResolvedSignature, TypeElement, TypeRef,
};

/// Computes the keys that bindings and requests resolve to
pub trait KeyFactory: Send + Sync {
    /// Key for a request of `ty` with an optional qualifier
    fn for_qualified_type(&self, qualifier: Option<AnnotationInstance>, ty: TypeRef) -> Key;

    /// Key bound by a `@Binds` method, given its signature resolved against
    /// the contributing module
    fn for_binds_method(
        &self,
        method: &Member<'_, MethodElement>,
        resolved: &ResolvedSignature,
        module: &TypeElement,
    ) -> Key;

    /// Key declared by a `@Multibinds` method
    fn for_multibinds_method(
        &self,
        method: &Member<'_, MethodElement>,
        resolved: &ResolvedSignature,
        module: &TypeElement,
    ) -> Key;
}
