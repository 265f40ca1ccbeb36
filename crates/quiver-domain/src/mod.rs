//! Domain layer for Quiver
//!
//! Holds the read-only declaration model that the host compiler hands to the
//! validation core, the value types that flow out of it (keys, dependency
//! requests, severities), and the port traits through which the core queries
//! the host type system.
//!
//! Nothing in this crate performs validation; see `quiver-validate`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    BindingMethodRecognizer, GeneratedArtifactIndex, KeyFactory, MalformedElement, Messager,
    NoGeneratedArtifacts, SymbolTable,
};
pub use value_objects::{
    Annotated, AnnotationInstance, AnnotationValue, ClassName, ConstructorElement,
    DependencyRequest, ElementId, FieldElement, Key, KotlinKind, Member, MetaAnnotation,
    MethodElement, Modifiers, MultibindingContributionId, ParameterElement, RequestKind,
    ResolvedSignature, Severity, TypeElement, TypeRef, Visibility,
};
