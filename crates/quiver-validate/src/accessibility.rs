//! Accessibility of declared types

use quiver_domain::{SymbolTable, TypeElement};

/// Whether code in `ty`'s own package can refer to `ty`
///
/// A type is inaccessible when it or any type enclosing it is private.
/// Enclosing types unknown to the symbol table are assumed accessible.
pub fn is_element_accessible_from_own_package(symbols: &dyn SymbolTable, ty: &TypeElement) -> bool {
    if ty.modifiers.is_private() {
        return false;
    }
    ty.name
        .enclosing()
        .and_then(|enclosing| symbols.type_element(&enclosing))
        .is_none_or(|enclosing| is_element_accessible_from_own_package(symbols, enclosing))
}

/// Nested, non-static type whose instances capture an outer instance
pub fn is_inner_class(ty: &TypeElement) -> bool {
    ty.is_nested() && !ty.modifiers.is_static
}
