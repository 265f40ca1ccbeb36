//! Binding keys and dependency requests

use super::annotation::AnnotationInstance;
use super::names::{ClassName, ElementId};
use super::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distinguishes one multibinding contribution from another with the same
/// type and qualifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultibindingContributionId {
    pub module: ClassName,
    pub binding_element: String,
}

/// What a binding provides or a request asks for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub ty: TypeRef,
    pub qualifier: Option<AnnotationInstance>,
    pub multibinding_contribution: Option<MultibindingContributionId>,
}

impl Key {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            qualifier: None,
            multibinding_contribution: None,
        }
    }

    pub fn with_qualifier(mut self, qualifier: Option<AnnotationInstance>) -> Self {
        self.qualifier = qualifier;
        self
    }

    pub fn with_contribution(mut self, contribution: MultibindingContributionId) -> Self {
        self.multibinding_contribution = Some(contribution);
        self
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(qualifier) = &self.qualifier {
            write!(f, "{qualifier} ")?;
        }
        write!(f, "{}", self.ty)
    }
}

/// How a dependency is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    Instance,
    Provider,
    Lazy,
    ProviderOfLazy,
    MembersInjection,
    Producer,
    Produced,
    Future,
}

impl RequestKind {
    /// Kinds that only make sense inside producer graphs
    pub fn is_producer_only(self) -> bool {
        matches!(self, Self::Producer | Self::Produced)
    }
}

/// A single injection site's request for a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyRequest {
    pub kind: RequestKind,
    pub key: Key,
    pub request_element: Option<ElementId>,
    pub is_nullable: bool,
}
