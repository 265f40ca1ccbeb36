//! Dependency Request Validation
//!
//! Checks that a single injection site (a constructor or method parameter,
//! or an injected field) requests a legal type shape, and builds the
//! [`DependencyRequest`] for a site once it is known to be valid.

use crate::annotations;
use crate::messages::RequestMessage;
use crate::report::ValidationReportBuilder;
use quiver_domain::constants::{LAZY, MEMBERS_INJECTOR, PRODUCED, PRODUCER, PROVIDER_TYPES};
use quiver_domain::{
    Annotated, ClassName, DependencyRequest, KeyFactory, Member, RequestKind, SymbolTable, TypeRef,
};
use std::sync::Arc;

/// Request kind implied by a framework wrapper type name, if it is one
pub fn framework_kind(name: &ClassName) -> Option<RequestKind> {
    if name.is_any(PROVIDER_TYPES) {
        Some(RequestKind::Provider)
    } else if name.is(LAZY) {
        Some(RequestKind::Lazy)
    } else if name.is(PRODUCER) {
        Some(RequestKind::Producer)
    } else if name.is(PRODUCED) {
        Some(RequestKind::Produced)
    } else if name.is(MEMBERS_INJECTOR) {
        Some(RequestKind::MembersInjection)
    } else {
        None
    }
}

fn is_framework_type(ty: &TypeRef) -> bool {
    ty.class_name().and_then(framework_kind).is_some()
}

/// Split a requested type into its request kind and the type being asked for
///
/// `Provider<Lazy<Foo>>` is a provider-of-lazy request for `Foo`. Raw
/// framework types are returned unchanged with their wrapper's kind.
pub fn request_kind_of(ty: &TypeRef) -> (RequestKind, TypeRef) {
    let Some(kind) = ty.class_name().and_then(framework_kind) else {
        return (RequestKind::Instance, ty.clone());
    };
    let [inner] = ty.type_args() else {
        return (kind, ty.clone());
    };
    if kind == RequestKind::Provider && inner.class_name().is_some_and(|n| n.is(LAZY)) {
        if let [lazy_arg] = inner.type_args() {
            return (RequestKind::ProviderOfLazy, lazy_arg.clone());
        }
    }
    (kind, inner.clone())
}

/// Validates the type shape of individual injection sites
pub struct DependencyRequestValidator {
    symbols: Arc<dyn SymbolTable>,
}

impl DependencyRequestValidator {
    pub fn new(symbols: Arc<dyn SymbolTable>) -> Self {
        Self { symbols }
    }

    /// Add errors to `builder` for every problem with requesting `ty` at `site`
    pub fn validate_dependency_request<T: Annotated>(
        &self,
        builder: &mut ValidationReportBuilder,
        site: &Member<'_, T>,
        ty: &TypeRef,
    ) {
        let qualifiers = annotations::qualifiers(site.element);
        if qualifiers.len() > 1 {
            for qualifier in qualifiers {
                builder.add_error_at(
                    RequestMessage::MultipleQualifiers {},
                    &site.id,
                    Some(qualifier),
                );
            }
        }
        self.check_type(builder, site, ty);
    }

    fn check_type<T>(
        &self,
        builder: &mut ValidationReportBuilder,
        site: &Member<'_, T>,
        ty: &TypeRef,
    ) {
        let Some(outer) = ty.class_name().filter(|n| framework_kind(n).is_some()) else {
            self.check_not_assisted(builder, site, ty);
            return;
        };

        let [inner] = ty.type_args() else {
            builder.add_error_at(
                RequestMessage::RawFrameworkType { ty: ty.to_string() },
                &site.id,
                None,
            );
            return;
        };

        let (wrapper, wrapped) = if outer.is_any(PROVIDER_TYPES) && inner.is_declared(LAZY) {
            let [lazy_arg] = inner.type_args() else {
                builder.add_error_at(
                    RequestMessage::RawFrameworkType { ty: ty.to_string() },
                    &site.id,
                    None,
                );
                return;
            };
            (inner, lazy_arg)
        } else {
            (ty, inner)
        };

        if wrapped.is_wildcard() {
            builder.add_error_at(
                RequestMessage::WildcardFrameworkArgument { ty: ty.to_string() },
                &site.id,
                None,
            );
            return;
        }

        if is_framework_type(wrapped) {
            builder.add_error_at(
                RequestMessage::NestedFrameworkType {
                    ty: ty.to_string(),
                    outer: simple_wrapper_name(wrapper),
                    inner: simple_wrapper_name(wrapped),
                },
                &site.id,
                None,
            );
            return;
        }

        self.check_not_assisted(builder, site, wrapped);
    }

    fn check_not_assisted<T>(
        &self,
        builder: &mut ValidationReportBuilder,
        site: &Member<'_, T>,
        requested: &TypeRef,
    ) {
        if self.symbols.is_assisted_injection_type(requested) {
            builder.add_error_at(
                RequestMessage::AssistedInjectionType {
                    ty: requested.to_string(),
                },
                &site.id,
                None,
            );
        }
    }

    /// Reject `Producer<T>` and `Produced<T>` outside producer graphs
    pub fn check_not_producer<T>(
        &self,
        builder: &mut ValidationReportBuilder,
        site: &Member<'_, T>,
        ty: &TypeRef,
    ) {
        let (kind, _) = request_kind_of(ty);
        if kind.is_producer_only() {
            builder.add_error_at(
                RequestMessage::ProducerInNonProducer {
                    framework: simple_wrapper_name(ty),
                },
                &site.id,
                None,
            );
        }
    }
}

fn simple_wrapper_name(ty: &TypeRef) -> String {
    ty.class_name()
        .map_or_else(|| ty.to_string(), |n| n.simple_name().to_string())
}

/// Builds [`DependencyRequest`]s for validated injection sites
pub struct DependencyRequestFactory {
    keys: Arc<dyn KeyFactory>,
}

impl DependencyRequestFactory {
    pub fn new(keys: Arc<dyn KeyFactory>) -> Self {
        Self { keys }
    }

    /// Request made by `site`, whose type has already been resolved against
    /// the enclosing container
    pub fn for_required_resolved_variable<T: Annotated>(
        &self,
        site: &Member<'_, T>,
        resolved_type: &TypeRef,
    ) -> DependencyRequest {
        let (kind, requested) = request_kind_of(resolved_type);
        let qualifier = annotations::single_qualifier(site.element);
        DependencyRequest {
            kind,
            key: self.keys.for_qualified_type(qualifier, requested),
            request_element: Some(site.id.clone()),
            is_nullable: site
                .element
                .annotations()
                .iter()
                .any(|a| a.simple_name() == "Nullable"),
        }
    }
}
