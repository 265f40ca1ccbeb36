//! Method signature formatting for diagnostics and logs

use crate::annotations;
use quiver_domain::{
    AnnotationInstance, ConstructorElement, Member, MethodElement, SymbolTable, TypeRef,
};
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// `java.lang.` in front of a type name, not preceded by another name segment
static JAVA_LANG_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^.\w])java\.lang\.([A-Z])").expect("Invalid regex")
});

/// Drop `java.lang.` from type and annotation names
pub fn strip_common_type_prefixes(text: &str) -> String {
    JAVA_LANG_PREFIX.replace_all(text, "$1$2").into_owned()
}

/// Renders `@Ann ReturnType pkg.Type.name(@Qualifier ParamType, ...)`
pub struct MethodSignatureFormatter {
    symbols: Arc<dyn SymbolTable>,
}

impl MethodSignatureFormatter {
    pub fn new(symbols: Arc<dyn SymbolTable>) -> Self {
        Self { symbols }
    }

    /// Format `method`, resolving its types as a member of `container` when
    /// given, and as declared otherwise
    pub fn format(&self, method: &Member<'_, MethodElement>, container: Option<&TypeRef>) -> String {
        let (declaring, return_type, parameter_types) = match container {
            Some(container) => {
                let resolved = self.symbols.resolve_as_member_of(container, method);
                let declaring = container
                    .class_name()
                    .map_or_else(|| method.id.owner().to_string(), ToString::to_string);
                (declaring, resolved.return_type, resolved.parameter_types)
            }
            None => (
                method.id.owner().to_string(),
                method.return_type.clone(),
                method.parameters.iter().map(|p| p.ty.clone()).collect(),
            ),
        };

        let mut output = format_annotations(&method.annotations);
        output.push_str(&strip_common_type_prefixes(&return_type.to_string()));
        output.push(' ');
        output.push_str(&declaring);
        output.push('.');
        output.push_str(&method.name);
        output.push_str(&format_parameters(method, &parameter_types));
        output
    }

    /// Format an injection constructor as `@Ann pkg.Type(ParamType, ...)`
    pub fn format_constructor(&self, constructor: &Member<'_, ConstructorElement>) -> String {
        let mut output = format_annotations(&constructor.annotations);
        output.push_str(&constructor.id.owner().to_string());
        let types: Vec<TypeRef> = constructor.parameters.iter().map(|p| p.ty.clone()).collect();
        output.push_str(&format_parameters(constructor, &types));
        output
    }
}

fn format_annotations(annotations: &[AnnotationInstance]) -> String {
    let mut output = annotations
        .iter()
        .map(|a| strip_common_type_prefixes(&a.to_string()))
        .collect::<Vec<_>>()
        .join(" ");
    if !output.is_empty() {
        output.push(' ');
    }
    output
}

fn format_parameters<T>(executable: &Member<'_, T>, types: &[TypeRef]) -> String
where
    T: HasParameters,
{
    let rendered: Vec<String> = executable
        .element
        .parameter_list()
        .iter()
        .enumerate()
        .map(|(i, parameter)| {
            let ty = types.get(i).unwrap_or(&parameter.ty);
            let ty = strip_common_type_prefixes(&ty.to_string());
            match annotations::single_qualifier(parameter) {
                Some(qualifier) => {
                    format!("{} {ty}", strip_common_type_prefixes(&qualifier.to_string()))
                }
                None => ty,
            }
        })
        .collect();
    format!("({})", rendered.join(", "))
}

trait HasParameters {
    fn parameter_list(&self) -> &[quiver_domain::ParameterElement];
}

impl HasParameters for MethodElement {
    fn parameter_list(&self) -> &[quiver_domain::ParameterElement] {
        &self.parameters
    }
}

impl HasParameters for ConstructorElement {
    fn parameter_list(&self) -> &[quiver_domain::ParameterElement] {
        &self.parameters
    }
}
