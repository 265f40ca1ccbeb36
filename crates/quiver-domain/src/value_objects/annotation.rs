//! Annotation instances attached to declarations

use super::names::ClassName;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Meta-annotations the host compiler found on an annotation's type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetaAnnotation {
    Qualifier,
    Scope,
    MapKey,
}

/// A compile-time constant annotation argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationValue {
    Bool(bool),
    Int(i64),
    Char(char),
    Str(String),
    Class(ClassName),
    Enum { ty: ClassName, name: String },
    Annotation(Box<AnnotationInstance>),
    Array(Vec<AnnotationValue>),
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "'{v}'"),
            Self::Str(v) => write!(f, "\"{v}\""),
            Self::Class(name) => write!(f, "{name}.class"),
            Self::Enum { ty, name } => write!(f, "{ty}.{name}"),
            Self::Annotation(annotation) => write!(f, "{annotation}"),
            Self::Array(values) => {
                f.write_str("{")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// One occurrence of an annotation on a declaration
///
/// Equality is structural: two independently built instances with the same
/// type, arguments, and meta-annotations are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationInstance {
    pub name: ClassName,
    #[serde(default)]
    pub values: BTreeMap<String, AnnotationValue>,
    #[serde(default)]
    pub meta: BTreeSet<MetaAnnotation>,
}

impl AnnotationInstance {
    /// Plain annotation with no arguments
    pub fn new(canonical: &str) -> Self {
        Self {
            name: ClassName::parse(canonical),
            values: BTreeMap::new(),
            meta: BTreeSet::new(),
        }
    }

    /// Annotation whose type is meta-annotated with `@Qualifier`
    pub fn qualifier(canonical: &str) -> Self {
        Self::new(canonical).with_meta(MetaAnnotation::Qualifier)
    }

    /// Annotation whose type is meta-annotated with `@Scope`
    pub fn scope(canonical: &str) -> Self {
        Self::new(canonical).with_meta(MetaAnnotation::Scope)
    }

    /// Annotation whose type is meta-annotated with `@MapKey`
    pub fn map_key(canonical: &str, value: AnnotationValue) -> Self {
        Self::new(canonical)
            .with_meta(MetaAnnotation::MapKey)
            .with_value("value", value)
    }

    pub fn with_meta(mut self, meta: MetaAnnotation) -> Self {
        self.meta.insert(meta);
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn is(&self, canonical: &str) -> bool {
        self.name.is(canonical)
    }

    pub fn is_qualifier(&self) -> bool {
        self.meta.contains(&MetaAnnotation::Qualifier)
    }

    pub fn is_scope(&self) -> bool {
        self.meta.contains(&MetaAnnotation::Scope)
    }

    pub fn is_map_key(&self) -> bool {
        self.meta.contains(&MetaAnnotation::MapKey)
    }

    pub fn simple_name(&self) -> &str {
        self.name.simple_name()
    }
}

impl fmt::Display for AnnotationInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if self.values.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        if self.values.len() == 1 {
            if let Some(value) = self.values.get("value") {
                write!(f, "{value}")?;
                return f.write_str(")");
            }
        }
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        f.write_str(")")
    }
}

/// Anything that carries annotations
pub trait Annotated {
    fn annotations(&self) -> &[AnnotationInstance];

    fn has_annotation(&self, canonical: &str) -> bool {
        self.annotations().iter().any(|a| a.is(canonical))
    }

    fn has_any_annotation(&self, canonical: &[&str]) -> bool {
        canonical.iter().any(|name| self.has_annotation(name))
    }

    /// First annotation with the given name, in declaration order
    fn annotation(&self, canonical: &str) -> Option<&AnnotationInstance> {
        self.annotations().iter().find(|a| a.is(canonical))
    }
}
