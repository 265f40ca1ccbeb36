//! Declarations handed to the validation core
//!
//! These mirror what the host compiler knows about a type and its directly
//! declared members. The core never mutates them.

use super::annotation::{Annotated, AnnotationInstance};
use super::names::{ClassName, ElementId};
use super::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
}

impl Modifiers {
    pub fn private() -> Self {
        Self {
            visibility: Visibility::Private,
            ..Self::default()
        }
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

/// Kotlin shared-instance containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KotlinKind {
    #[default]
    None,
    Object,
    CompanionObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterElement {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub annotations: Vec<AnnotationInstance>,
}

impl ParameterElement {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorElement {
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<AnnotationInstance>,
    #[serde(default)]
    pub parameters: Vec<ParameterElement>,
    #[serde(default)]
    pub thrown_types: Vec<TypeRef>,
}

impl ConstructorElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterElement) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn throws(mut self, ty: TypeRef) -> Self {
        self.thrown_types.push(ty);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldElement {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<AnnotationInstance>,
    /// Modifiers of the Kotlin property getter backing this field, if any
    #[serde(default)]
    pub property_getter: Option<Modifiers>,
}

impl FieldElement {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::default(),
            annotations: Vec::new(),
            property_getter: None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_property_getter(mut self, getter: Modifiers) -> Self {
        self.property_getter = Some(getter);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodElement {
    pub name: String,
    pub return_type: TypeRef,
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<AnnotationInstance>,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterElement>,
    #[serde(default)]
    pub thrown_types: Vec<TypeRef>,
}

impl MethodElement {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            modifiers: Modifiers::default(),
            annotations: Vec::new(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            thrown_types: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterElement) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn throws(mut self, ty: TypeRef) -> Self {
        self.thrown_types.push(ty);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeElement {
    pub name: ClassName,
    pub modifiers: Modifiers,
    #[serde(default)]
    pub annotations: Vec<AnnotationInstance>,
    #[serde(default)]
    pub kotlin: KotlinKind,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Direct superclass; `None` for roots and interfaces
    #[serde(default)]
    pub superclass: Option<TypeRef>,
    #[serde(default)]
    pub constructors: Vec<ConstructorElement>,
    #[serde(default)]
    pub fields: Vec<FieldElement>,
    #[serde(default)]
    pub methods: Vec<MethodElement>,
}

impl TypeElement {
    pub fn class(name: ClassName) -> Self {
        Self {
            name,
            modifiers: Modifiers::default(),
            annotations: Vec::new(),
            kotlin: KotlinKind::None,
            type_parameters: Vec::new(),
            superclass: None,
            constructors: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_kotlin(mut self, kotlin: KotlinKind) -> Self {
        self.kotlin = kotlin;
        self
    }

    pub fn with_type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    pub fn with_superclass(mut self, superclass: TypeRef) -> Self {
        self.superclass = Some(superclass);
        self
    }

    pub fn with_constructor(mut self, constructor: ConstructorElement) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_field(mut self, field: FieldElement) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodElement) -> Self {
        self.methods.push(method);
        self
    }

    pub fn id(&self) -> ElementId {
        ElementId::Type(self.name.clone())
    }

    /// This type as seen from inside its own declaration (`Foo<T>`)
    pub fn as_type(&self) -> TypeRef {
        TypeRef::Declared {
            name: self.name.clone(),
            args: self
                .type_parameters
                .iter()
                .map(|p| TypeRef::Variable(p.clone()))
                .collect(),
        }
    }

    pub fn is_nested(&self) -> bool {
        self.name.is_nested()
    }

    pub fn is_kotlin_object(&self) -> bool {
        self.kotlin != KotlinKind::None
    }

    pub fn constructors(&self) -> impl Iterator<Item = Member<'_, ConstructorElement>> {
        self.constructors
            .iter()
            .enumerate()
            .map(|(index, element)| Member {
                id: ElementId::Constructor {
                    owner: self.name.clone(),
                    index,
                },
                element,
            })
    }

    pub fn fields(&self) -> impl Iterator<Item = Member<'_, FieldElement>> {
        self.fields.iter().map(|element| Member {
            id: ElementId::Field {
                owner: self.name.clone(),
                name: element.name.clone(),
            },
            element,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = Member<'_, MethodElement>> {
        self.methods
            .iter()
            .enumerate()
            .map(|(index, element)| Member {
                id: ElementId::Method {
                    owner: self.name.clone(),
                    name: element.name.clone(),
                    index,
                },
                element,
            })
    }

    /// First declared method with the given name
    pub fn method(&self, name: &str) -> Option<Member<'_, MethodElement>> {
        self.methods().find(|m| m.name == name)
    }

    pub fn field(&self, name: &str) -> Option<Member<'_, FieldElement>> {
        self.fields().find(|f| f.name == name)
    }
}

/// A declaration paired with its identity
#[derive(Debug, Clone)]
pub struct Member<'a, T> {
    pub id: ElementId,
    pub element: &'a T,
}

impl<'a, T> Member<'a, T> {
    pub fn new(id: ElementId, element: &'a T) -> Self {
        Self { id, element }
    }
}

impl<T> Deref for Member<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.element
    }
}

impl<'a> Member<'a, ConstructorElement> {
    pub fn parameters(&self) -> Vec<Member<'a, ParameterElement>> {
        parameter_members(&self.id, &self.element.parameters)
    }
}

impl<'a> Member<'a, MethodElement> {
    pub fn parameters(&self) -> Vec<Member<'a, ParameterElement>> {
        parameter_members(&self.id, &self.element.parameters)
    }
}

fn parameter_members<'a>(
    executable: &ElementId,
    parameters: &'a [ParameterElement],
) -> Vec<Member<'a, ParameterElement>> {
    parameters
        .iter()
        .enumerate()
        .map(|(index, element)| Member {
            id: executable.parameter(index, element.name.clone()),
            element,
        })
        .collect()
}

macro_rules! impl_annotated {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Annotated for $ty {
                fn annotations(&self) -> &[AnnotationInstance] {
                    &self.annotations
                }
            }
        )*
    };
}

impl_annotated!(
    TypeElement,
    ConstructorElement,
    FieldElement,
    MethodElement,
    ParameterElement,
);
