//! Binding Declarations
//!
//! Immutable records describing bindings declared by module methods:
//! delegate (`@Binds`) declarations and `@Multibinds` declarations. Both are
//! values; building one twice from the same method and module yields equal
//! values with equal hashes.

use crate::annotations;
use crate::request::DependencyRequestFactory;
use crate::signature::MethodSignatureFormatter;
use quiver_domain::constants::{
    BINDS, ELEMENTS_INTO_SET, INTO_MAP, INTO_SET, MAP, MULTIBINDS, SET,
};
use quiver_domain::{
    Annotated, AnnotationInstance, ClassName, DependencyRequest, ElementId, Error, Key,
    KeyFactory, Member, MethodElement, Result, SymbolTable, TypeElement,
};
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// How a binding contributes to its key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContributionType {
    /// The only binding for its key
    Unique,
    /// One element of a set multibinding (`@IntoSet`)
    Set,
    /// Several elements of a set multibinding (`@ElementsIntoSet`)
    SetValues,
    /// One entry of a map multibinding (`@IntoMap`)
    Map,
}

impl ContributionType {
    /// Contribution type implied by a binding element's annotations
    pub fn from_binding_element<A: Annotated + ?Sized>(element: &A) -> Self {
        if element.has_annotation(INTO_MAP) {
            Self::Map
        } else if element.has_annotation(INTO_SET) {
            Self::Set
        } else if element.has_annotation(ELEMENTS_INTO_SET) {
            Self::SetValues
        } else {
            Self::Unique
        }
    }

    pub fn is_multibinding(self) -> bool {
        self != Self::Unique
    }
}

/// Anything whose binding contributes to its key in a particular way
pub trait HasContributionType {
    fn contribution_type(&self) -> ContributionType;
}

/// A `@Binds` method: requests for `key` are satisfied by `delegate_request`
#[derive(Debug, Clone, Serialize)]
pub struct DelegateDeclaration {
    contribution_type: ContributionType,
    key: Key,
    binding_element: ElementId,
    contributing_type: Option<ClassName>,
    delegate_request: DependencyRequest,
    map_key: Option<AnnotationInstance>,
    #[serde(skip)]
    hash: u64,
}

impl DelegateDeclaration {
    pub fn new(
        contribution_type: ContributionType,
        key: Key,
        binding_element: ElementId,
        contributing_type: Option<ClassName>,
        delegate_request: DependencyRequest,
        map_key: Option<AnnotationInstance>,
    ) -> Self {
        let mut hasher = DefaultHasher::new();
        contribution_type.hash(&mut hasher);
        key.hash(&mut hasher);
        binding_element.hash(&mut hasher);
        contributing_type.hash(&mut hasher);
        delegate_request.hash(&mut hasher);
        map_key.hash(&mut hasher);
        Self {
            contribution_type,
            key,
            binding_element,
            contributing_type,
            delegate_request,
            map_key,
            hash: hasher.finish(),
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn binding_element(&self) -> &ElementId {
        &self.binding_element
    }

    pub fn contributing_type(&self) -> Option<&ClassName> {
        self.contributing_type.as_ref()
    }

    pub fn delegate_request(&self) -> &DependencyRequest {
        &self.delegate_request
    }

    pub fn map_key(&self) -> Option<&AnnotationInstance> {
        self.map_key.as_ref()
    }
}

impl HasContributionType for DelegateDeclaration {
    fn contribution_type(&self) -> ContributionType {
        self.contribution_type
    }
}

impl PartialEq for DelegateDeclaration {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.contribution_type == other.contribution_type
            && self.key == other.key
            && self.binding_element == other.binding_element
            && self.contributing_type == other.contributing_type
            && self.delegate_request == other.delegate_request
            && self.map_key == other.map_key
    }
}

impl Eq for DelegateDeclaration {}

impl Hash for DelegateDeclaration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// A `@Multibinds` method: declares a possibly-empty set or map multibinding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MultibindingDeclaration {
    contribution_type: ContributionType,
    key: Key,
    binding_element: ElementId,
    contributing_type: Option<ClassName>,
}

impl MultibindingDeclaration {
    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn binding_element(&self) -> &ElementId {
        &self.binding_element
    }

    pub fn contributing_type(&self) -> Option<&ClassName> {
        self.contributing_type.as_ref()
    }
}

impl HasContributionType for MultibindingDeclaration {
    fn contribution_type(&self) -> ContributionType {
        self.contribution_type
    }
}

/// Every kind of declaration handed to graph resolution
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BindingDeclaration {
    Delegate(DelegateDeclaration),
    Multibinds(MultibindingDeclaration),
}

impl BindingDeclaration {
    pub fn key(&self) -> &Key {
        match self {
            Self::Delegate(d) => d.key(),
            Self::Multibinds(m) => m.key(),
        }
    }

    pub fn binding_element(&self) -> &ElementId {
        match self {
            Self::Delegate(d) => d.binding_element(),
            Self::Multibinds(m) => m.binding_element(),
        }
    }

    pub fn contributing_type(&self) -> Option<&ClassName> {
        match self {
            Self::Delegate(d) => d.contributing_type(),
            Self::Multibinds(m) => m.contributing_type(),
        }
    }
}

impl HasContributionType for BindingDeclaration {
    fn contribution_type(&self) -> ContributionType {
        match self {
            Self::Delegate(d) => d.contribution_type(),
            Self::Multibinds(m) => m.contribution_type(),
        }
    }
}

impl From<DelegateDeclaration> for BindingDeclaration {
    fn from(declaration: DelegateDeclaration) -> Self {
        Self::Delegate(declaration)
    }
}

impl From<MultibindingDeclaration> for BindingDeclaration {
    fn from(declaration: MultibindingDeclaration) -> Self {
        Self::Multibinds(declaration)
    }
}

/// Builds [`DelegateDeclaration`]s from `@Binds` methods
pub struct DelegateDeclarationFactory {
    symbols: Arc<dyn SymbolTable>,
    keys: Arc<dyn KeyFactory>,
    requests: DependencyRequestFactory,
    formatter: MethodSignatureFormatter,
}

impl DelegateDeclarationFactory {
    pub fn new(symbols: Arc<dyn SymbolTable>, keys: Arc<dyn KeyFactory>) -> Self {
        Self {
            requests: DependencyRequestFactory::new(Arc::clone(&keys)),
            formatter: MethodSignatureFormatter::new(Arc::clone(&symbols)),
            symbols,
            keys,
        }
    }

    /// Declaration for `binds_method` as contributed by `module`
    ///
    /// The method must carry `@Binds` and declare exactly one parameter.
    /// Its parameter type is resolved as a member of `module`, so generic
    /// modules bind the substituted type.
    pub fn create(
        &self,
        binds_method: &Member<'_, MethodElement>,
        module: &TypeElement,
    ) -> Result<DelegateDeclaration> {
        if !binds_method.has_annotation(BINDS) {
            return Err(Error::precondition(format!(
                "{} is not annotated with @Binds",
                binds_method.id
            )));
        }
        let parameters = binds_method.parameters();
        let [parameter] = parameters.as_slice() else {
            return Err(Error::precondition(format!(
                "@Binds method {} must have exactly one parameter, found {}",
                binds_method.id,
                parameters.len()
            )));
        };

        let container = module.as_type();
        let resolved = self.symbols.resolve_as_member_of(&container, binds_method);
        let [parameter_type] = resolved.parameter_types.as_slice() else {
            return Err(Error::internal(format!(
                "resolved signature of {} has {} parameter types",
                binds_method.id,
                resolved.parameter_types.len()
            )));
        };

        let declaration = DelegateDeclaration::new(
            ContributionType::from_binding_element(binds_method.element),
            self.keys.for_binds_method(binds_method, &resolved, module),
            binds_method.id.clone(),
            Some(module.name.clone()),
            self.requests
                .for_required_resolved_variable(parameter, parameter_type),
            annotations::single_map_key(binds_method.element),
        );
        debug!(
            method = %self.formatter.format(binds_method, Some(&container)),
            key = %declaration.key,
            "created delegate declaration"
        );
        Ok(declaration)
    }
}

/// Builds [`MultibindingDeclaration`]s from `@Multibinds` methods
pub struct MultibindingDeclarationFactory {
    symbols: Arc<dyn SymbolTable>,
    keys: Arc<dyn KeyFactory>,
}

impl MultibindingDeclarationFactory {
    pub fn new(symbols: Arc<dyn SymbolTable>, keys: Arc<dyn KeyFactory>) -> Self {
        Self { symbols, keys }
    }

    /// Declaration for a `@Multibinds` method returning a `Set` or `Map`
    pub fn create(
        &self,
        method: &Member<'_, MethodElement>,
        module: &TypeElement,
    ) -> Result<MultibindingDeclaration> {
        if !method.has_annotation(MULTIBINDS) {
            return Err(Error::precondition(format!(
                "{} is not annotated with @Multibinds",
                method.id
            )));
        }
        let resolved = self.symbols.resolve_as_member_of(&module.as_type(), method);
        let contribution_type = if resolved.return_type.is_declared(MAP) {
            ContributionType::Map
        } else if resolved.return_type.is_declared(SET) {
            ContributionType::Set
        } else {
            return Err(Error::precondition(format!(
                "@Multibinds method {} must return a Set or Map, found {}",
                method.id, resolved.return_type
            )));
        };

        Ok(MultibindingDeclaration {
            contribution_type,
            key: self.keys.for_multibinds_method(method, &resolved, module),
            binding_element: method.id.clone(),
            contributing_type: Some(module.name.clone()),
        })
    }
}
