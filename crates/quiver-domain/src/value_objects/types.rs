//! Type references as seen by the validation core

use super::names::ClassName;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A (possibly parameterized) type mentioned by a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    Declared { name: ClassName, args: Vec<TypeRef> },
    Primitive(String),
    Array(Box<TypeRef>),
    Variable(String),
    /// `?`, `? extends T`, or `? super T`
    Wildcard {
        extends: Option<Box<TypeRef>>,
        super_bound: Option<Box<TypeRef>>,
    },
    Void,
    /// A type the host compiler could not resolve
    Error(String),
}

impl TypeRef {
    /// Non-generic declared type from its canonical name
    pub fn declared(canonical: &str) -> Self {
        Self::Declared {
            name: ClassName::parse(canonical),
            args: Vec::new(),
        }
    }

    /// Parameterized declared type
    pub fn generic(canonical: &str, args: Vec<TypeRef>) -> Self {
        Self::Declared {
            name: ClassName::parse(canonical),
            args,
        }
    }

    pub fn of(name: ClassName) -> Self {
        Self::Declared {
            name,
            args: Vec::new(),
        }
    }

    pub fn unbounded_wildcard() -> Self {
        Self::Wildcard {
            extends: None,
            super_bound: None,
        }
    }

    pub fn class_name(&self) -> Option<&ClassName> {
        match self {
            Self::Declared { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn type_args(&self) -> &[TypeRef] {
        match self {
            Self::Declared { args, .. } => args,
            _ => &[],
        }
    }

    /// Whether this is a declared type with the given canonical name
    pub fn is_declared(&self, canonical: &str) -> bool {
        self.class_name().is_some_and(|n| n.is(canonical))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard { .. })
    }

    /// Whether this type or any type nested in it failed to resolve
    pub fn is_erroneous(&self) -> bool {
        match self {
            Self::Error(_) => true,
            Self::Declared { args, .. } => args.iter().any(Self::is_erroneous),
            Self::Array(component) => component.is_erroneous(),
            Self::Wildcard {
                extends,
                super_bound,
            } => {
                extends.as_ref().is_some_and(|t| t.is_erroneous())
                    || super_bound.as_ref().is_some_and(|t| t.is_erroneous())
            }
            Self::Primitive(_) | Self::Variable(_) | Self::Void => false,
        }
    }

    /// Replace type variables using `bindings`; unbound variables are kept
    pub fn substitute(&self, bindings: &HashMap<String, TypeRef>) -> Self {
        match self {
            Self::Variable(name) => bindings.get(name).cloned().unwrap_or_else(|| self.clone()),
            Self::Declared { name, args } => Self::Declared {
                name: name.clone(),
                args: args.iter().map(|a| a.substitute(bindings)).collect(),
            },
            Self::Array(component) => Self::Array(Box::new(component.substitute(bindings))),
            Self::Wildcard {
                extends,
                super_bound,
            } => Self::Wildcard {
                extends: extends.as_ref().map(|t| Box::new(t.substitute(bindings))),
                super_bound: super_bound.as_ref().map(|t| Box::new(t.substitute(bindings))),
            },
            Self::Primitive(_) | Self::Void | Self::Error(_) => self.clone(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared { name, args } => {
                write!(f, "{name}")?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::Primitive(name) | Self::Variable(name) => f.write_str(name),
            Self::Array(component) => write!(f, "{component}[]"),
            Self::Wildcard {
                extends: Some(bound),
                ..
            } => write!(f, "? extends {bound}"),
            Self::Wildcard {
                super_bound: Some(bound),
                ..
            } => write!(f, "? super {bound}"),
            Self::Wildcard { .. } => f.write_str("?"),
            Self::Void => f.write_str("void"),
            Self::Error(name) => write!(f, "{name}"),
        }
    }
}

/// Parameter, return, and thrown types of a method resolved against a
/// particular receiver type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSignature {
    pub parameter_types: Vec<TypeRef>,
    pub return_type: TypeRef,
    pub thrown_types: Vec<TypeRef>,
}
