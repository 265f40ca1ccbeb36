//! Names and element identities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully qualified name of a declared type
///
/// `simple_names` holds the nesting path, outermost first, so
/// `com.example.Outer.Inner` is `{ package: "com.example", simple_names:
/// ["Outer", "Inner"] }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassName {
    pub package: String,
    pub simple_names: Vec<String>,
}

impl ClassName {
    /// Create a top-level class name
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Parse a canonical name, treating the first capitalized segment as the
    /// start of the type path (`java.util.Map.Entry` -> `java.util` + `Map.Entry`).
    pub fn parse(canonical: &str) -> Self {
        let segments: Vec<&str> = canonical.split('.').collect();
        let split = segments
            .iter()
            .position(|s| s.chars().next().is_some_and(char::is_uppercase))
            .unwrap_or(segments.len().saturating_sub(1));
        Self {
            package: segments[..split].join("."),
            simple_names: segments[split..].iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Name of a type nested directly inside this one
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());
        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// Innermost simple name
    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map_or("", String::as_str)
    }

    /// Name of the directly enclosing type, if this type is nested
    pub fn enclosing(&self) -> Option<Self> {
        if self.simple_names.len() < 2 {
            return None;
        }
        Some(Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    pub fn is_nested(&self) -> bool {
        self.simple_names.len() > 1
    }

    pub fn canonical_name(&self) -> String {
        let path = self.simple_names.join(".");
        if self.package.is_empty() {
            path
        } else {
            format!("{}.{}", self.package, path)
        }
    }

    /// Whether this name equals the given canonical name
    pub fn is(&self, canonical: &str) -> bool {
        self.canonical_name() == canonical
    }

    pub fn is_any(&self, canonical: &[&str]) -> bool {
        let name = self.canonical_name();
        canonical.iter().any(|c| *c == name)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

/// Identity of a declaration, used as the subject of reports and diagnostics
///
/// Members are identified by their owner plus their position among the
/// owner's declared members of the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementId {
    Type(ClassName),
    Constructor {
        owner: ClassName,
        index: usize,
    },
    Field {
        owner: ClassName,
        name: String,
    },
    Method {
        owner: ClassName,
        name: String,
        index: usize,
    },
    Parameter {
        executable: Box<ElementId>,
        index: usize,
        name: String,
    },
}

impl ElementId {
    /// The type that declares this element (the type itself for `Type`)
    pub fn owner(&self) -> &ClassName {
        match self {
            Self::Type(name) => name,
            Self::Constructor { owner, .. }
            | Self::Field { owner, .. }
            | Self::Method { owner, .. } => owner,
            Self::Parameter { executable, .. } => executable.owner(),
        }
    }

    /// Identity of the `index`-th parameter of this executable
    pub fn parameter(&self, index: usize, name: impl Into<String>) -> Self {
        Self::Parameter {
            executable: Box::new(self.clone()),
            index,
            name: name.into(),
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type(_))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => write!(f, "{name}"),
            Self::Constructor { owner, .. } => write!(f, "{owner}.<init>"),
            Self::Field { owner, name } => write!(f, "{owner}.{name}"),
            Self::Method { owner, name, .. } => write!(f, "{owner}.{name}()"),
            Self::Parameter {
                executable, name, ..
            } => write!(f, "parameter {name} of {executable}"),
        }
    }
}
