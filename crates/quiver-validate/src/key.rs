//! Default Key Factory
//!
//! Computes the key a binding method contributes to. Multibinding
//! contributions are keyed by their collective type (`Set<T>`,
//! `Map<K, Provider<V>>`) and tagged with the contributing method so that
//! contributions to the same collection stay distinct.

use crate::annotations;
use crate::declarations::ContributionType;
use quiver_domain::constants::{CLASS, MAP, PROVIDER, SET, STRING};
use quiver_domain::{
    AnnotationInstance, AnnotationValue, Key, KeyFactory, Member, MethodElement,
    MultibindingContributionId, ResolvedSignature, TypeElement, TypeRef,
};

/// Key type of a map entry declared with `map_key`
///
/// A map key with a single `value` member is unwrapped to that member's
/// type; any other map key annotation is its own key type.
pub fn map_key_type(map_key: &AnnotationInstance) -> TypeRef {
    let unwrapped = match map_key.values.len() {
        1 => map_key.values.get("value"),
        _ => None,
    };
    match unwrapped {
        Some(AnnotationValue::Bool(_)) => TypeRef::declared("java.lang.Boolean"),
        Some(AnnotationValue::Int(_)) => TypeRef::declared("java.lang.Integer"),
        Some(AnnotationValue::Char(_)) => TypeRef::declared("java.lang.Character"),
        Some(AnnotationValue::Str(_)) => TypeRef::declared(STRING),
        Some(AnnotationValue::Class(_)) => TypeRef::generic(CLASS, vec![TypeRef::unbounded_wildcard()]),
        Some(AnnotationValue::Enum { ty, .. }) => TypeRef::of(ty.clone()),
        Some(AnnotationValue::Annotation(annotation)) => TypeRef::of(annotation.name.clone()),
        Some(AnnotationValue::Array(_)) | None => TypeRef::of(map_key.name.clone()),
    }
}

/// `Map<K, Provider<V>>`
fn map_of_providers(key_type: TypeRef, value_type: TypeRef) -> TypeRef {
    TypeRef::generic(
        MAP,
        vec![key_type, TypeRef::generic(PROVIDER, vec![value_type])],
    )
}

/// Key factory following the standard contribution rules
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultKeyFactory;

impl DefaultKeyFactory {
    pub fn new() -> Self {
        Self
    }
}

impl KeyFactory for DefaultKeyFactory {
    fn for_qualified_type(&self, qualifier: Option<AnnotationInstance>, ty: TypeRef) -> Key {
        Key::new(ty).with_qualifier(qualifier)
    }

    fn for_binds_method(
        &self,
        method: &Member<'_, MethodElement>,
        resolved: &ResolvedSignature,
        module: &TypeElement,
    ) -> Key {
        let qualifier = annotations::single_qualifier(method.element);
        let provided = resolved.return_type.clone();
        let contribution = MultibindingContributionId {
            module: module.name.clone(),
            binding_element: method.name.clone(),
        };
        match ContributionType::from_binding_element(method.element) {
            ContributionType::Unique => Key::new(provided).with_qualifier(qualifier),
            ContributionType::Set => Key::new(TypeRef::generic(SET, vec![provided]))
                .with_qualifier(qualifier)
                .with_contribution(contribution),
            ContributionType::SetValues => Key::new(provided)
                .with_qualifier(qualifier)
                .with_contribution(contribution),
            ContributionType::Map => {
                let key_type = annotations::single_map_key(method.element).map_or_else(
                    || TypeRef::Error("<missing map key>".to_string()),
                    |map_key| map_key_type(&map_key),
                );
                Key::new(map_of_providers(key_type, provided))
                    .with_qualifier(qualifier)
                    .with_contribution(contribution)
            }
        }
    }

    fn for_multibinds_method(
        &self,
        method: &Member<'_, MethodElement>,
        resolved: &ResolvedSignature,
        _module: &TypeElement,
    ) -> Key {
        let qualifier = annotations::single_qualifier(method.element);
        let ty = match (&resolved.return_type, resolved.return_type.type_args()) {
            (return_type, [key_type, value_type]) if return_type.is_declared(MAP) => {
                map_of_providers(key_type.clone(), value_type.clone())
            }
            (return_type, _) => return_type.clone(),
        };
        Key::new(ty).with_qualifier(qualifier)
    }
}
