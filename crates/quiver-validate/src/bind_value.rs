//! Bind-value fields on test roots
//!
//! A test root can bind a value into its test component by annotating a
//! field with `@BindValue`, `@BindValueIntoSet`, `@BindElementsIntoSet`, or
//! `@BindValueIntoMap`. This module collects those fields into
//! [`BindValueMetadata`] and reports the ones that cannot be bound.

use crate::annotations;
use crate::messages::BindValueMessage;
use crate::report::{ValidationReport, ValidationReportBuilder};
use quiver_domain::constants::{
    BIND_ELEMENTS_INTO_SET, BIND_VALUE, BIND_VALUE_INTO_MAP, BIND_VALUE_INTO_SET,
};
use quiver_domain::{
    Annotated, AnnotationInstance, ClassName, ElementId, FieldElement, Member, MethodElement,
    Modifiers, TypeElement, TypeRef,
};
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

/// Which bind-value annotation a field carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BindValueKind {
    Value,
    IntoSet,
    ElementsIntoSet,
    IntoMap,
}

impl BindValueKind {
    pub const ALL: [Self; 4] = [Self::Value, Self::IntoSet, Self::ElementsIntoSet, Self::IntoMap];

    pub fn annotation_name(self) -> &'static str {
        match self {
            Self::Value => BIND_VALUE,
            Self::IntoSet => BIND_VALUE_INTO_SET,
            Self::ElementsIntoSet => BIND_ELEMENTS_INTO_SET,
            Self::IntoMap => BIND_VALUE_INTO_MAP,
        }
    }

    pub fn simple_name(self) -> &'static str {
        match self {
            Self::Value => "BindValue",
            Self::IntoSet => "BindValueIntoSet",
            Self::ElementsIntoSet => "BindElementsIntoSet",
            Self::IntoMap => "BindValueIntoMap",
        }
    }

    /// Bind-value annotations on `element`, in declaration order
    pub fn present_on<A: Annotated + ?Sized>(element: &A) -> Vec<Self> {
        element
            .annotations()
            .iter()
            .filter_map(|a| Self::ALL.into_iter().find(|kind| a.is(kind.annotation_name())))
            .collect()
    }
}

/// A validated bind-value field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindValueElement {
    pub field: ElementId,
    pub ty: TypeRef,
    pub kind: BindValueKind,
    pub qualifier: Option<AnnotationInstance>,
    pub map_key: Option<AnnotationInstance>,
    /// Kotlin property getter through which the value is read, if any
    pub getter: Option<Modifiers>,
}

/// Bind-value fields of one test root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindValueMetadata {
    pub test_element: ClassName,
    pub elements: Vec<BindValueElement>,
}

impl BindValueMetadata {
    /// Collect and validate the bind-value declarations of `test_root`
    ///
    /// Invalid declarations are reported and left out of the metadata.
    pub fn create(test_root: &TypeElement) -> (Self, ValidationReport) {
        let mut builder = ValidationReport::about(test_root.id());
        let mut elements = Vec::new();

        for field in test_root.fields() {
            let kinds = BindValueKind::present_on(field.element);
            if kinds.is_empty() {
                continue;
            }
            if let Some(element) = validate_field(&mut builder, &field, &kinds) {
                elements.push(element);
            }
        }

        for method in test_root.methods() {
            let kinds = BindValueKind::present_on(method.element);
            if !kinds.is_empty() {
                reject_method(&mut builder, &method, &kinds);
            }
        }

        debug!(
            test_root = %test_root.name,
            bound = elements.len(),
            "collected bind-value fields"
        );
        let metadata = Self {
            test_element: test_root.name.clone(),
            elements,
        };
        (metadata, builder.build())
    }
}

fn validate_field(
    builder: &mut ValidationReportBuilder,
    field: &Member<'_, FieldElement>,
    kinds: &[BindValueKind],
) -> Option<BindValueElement> {
    let kind = single_kind(builder, &field.id, kinds)?;
    let annotation = kind.simple_name().to_string();
    let element = field.name.clone();
    let mut valid = true;
    let mut reject = |builder: &mut ValidationReportBuilder, message: BindValueMessage| {
        builder.add_error_at(message, &field.id, None);
        valid = false;
    };

    match field.property_getter {
        Some(getter) if getter.is_private() => reject(
            builder,
            BindValueMessage::PrivateGetter {
                annotation: annotation.clone(),
                element: element.clone(),
            },
        ),
        None if field.modifiers.is_private() => reject(
            builder,
            BindValueMessage::PrivateField {
                annotation: annotation.clone(),
                element: element.clone(),
            },
        ),
        _ => {}
    }

    if annotations::is_inject(field.element) {
        reject(
            builder,
            BindValueMessage::WithInject {
                annotation: annotation.clone(),
                element,
            },
        );
    }

    let qualifiers = annotations::qualifiers(field.element);
    if qualifiers.len() > 1 {
        reject(
            builder,
            BindValueMessage::MultipleQualifiers {
                annotation: annotation.clone(),
                found: format_list(&qualifiers),
            },
        );
    }

    let map_keys = annotations::map_keys(field.element);
    if kind == BindValueKind::IntoMap {
        if map_keys.len() != 1 {
            reject(
                builder,
                BindValueMessage::MapKeyCount {
                    found: format_list(&map_keys),
                },
            );
        }
    } else if !map_keys.is_empty() {
        reject(
            builder,
            BindValueMessage::UnexpectedMapKey {
                annotation: annotation.clone(),
            },
        );
    }

    let scopes = annotations::scopes(field.element);
    if !scopes.is_empty() {
        reject(
            builder,
            BindValueMessage::Scoped {
                annotation,
                found: format_list(&scopes),
            },
        );
    }

    valid.then(|| BindValueElement {
        field: field.id.clone(),
        ty: field.ty.clone(),
        kind,
        qualifier: qualifiers.first().map(|q| (*q).clone()),
        map_key: map_keys.first().map(|k| (*k).clone()),
        getter: field.property_getter,
    })
}

fn reject_method(
    builder: &mut ValidationReportBuilder,
    method: &Member<'_, MethodElement>,
    kinds: &[BindValueKind],
) {
    if let Some(kind) = single_kind(builder, &method.id, kinds) {
        builder.add_error_at(
            BindValueMessage::NotAField {
                annotation: kind.simple_name().to_string(),
                element: format!("{}()", method.name),
            },
            &method.id,
            None,
        );
    }
}

/// The element's only bind-value annotation, reporting when there are several
fn single_kind(
    builder: &mut ValidationReportBuilder,
    element: &ElementId,
    kinds: &[BindValueKind],
) -> Option<BindValueKind> {
    match kinds {
        [kind] => Some(*kind),
        _ => {
            let found: Vec<String> = kinds.iter().map(|k| format!("@{}", k.simple_name())).collect();
            builder.add_error_at(
                BindValueMessage::MultipleBindValueAnnotations {
                    found: format!("[{}]", found.join(", ")),
                },
                element,
                None,
            );
            None
        }
    }
}

fn format_list<T: Display>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
