//! Value Objects
//!
//! Immutable values shared between the host compiler, the validation core,
//! and downstream graph resolution.

pub mod annotation;
pub mod element;
pub mod key;
pub mod names;
pub mod severity;
pub mod types;

pub use annotation::{Annotated, AnnotationInstance, AnnotationValue, MetaAnnotation};
pub use element::{
    ConstructorElement, FieldElement, KotlinKind, Member, MethodElement, Modifiers,
    ParameterElement, TypeElement, Visibility,
};
pub use key::{DependencyRequest, Key, MultibindingContributionId, RequestKind};
pub use names::{ClassName, ElementId};
pub use severity::Severity;
pub use types::{ResolvedSignature, TypeRef};
