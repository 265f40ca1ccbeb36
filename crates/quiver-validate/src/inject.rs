//! Injection-Point Validation
//!
//! Validates `@Inject` and `@AssistedInject` constructors, injected fields,
//! and injected methods, and composes the findings into one report per
//! declared type. Two entry points exist, each memoized per type:
//!
//! - [`InjectValidator::validate`]: provision validation (members injection
//!   plus the injection constructor)
//! - [`InjectValidator::validate_for_members_injection`]: injected fields and
//!   methods, recursing up the superclass chain
//!
//! Policy-graded findings (private and static injection) take their severity
//! from [`ValidatorOptions`], unless a validator obtained through
//! [`InjectValidator::when_generating_code`] forces them to errors.

use crate::accessibility::{is_element_accessible_from_own_package, is_inner_class};
use crate::annotations;
use crate::cache::{CycleDetected, ReportCache};
use crate::config::ValidatorOptions;
use crate::messages::InjectionMessage;
use crate::report::{ValidationReport, ValidationReportBuilder};
use crate::request::DependencyRequestValidator;
use crate::signature::MethodSignatureFormatter;
use quiver_domain::constants::{ASSISTED_INJECT, ERROR, FACTORY_SUFFIX, OBJECT, RUNTIME_EXCEPTION};
use quiver_domain::{
    Annotated, ClassName, ConstructorElement, ElementId, FieldElement, GeneratedArtifactIndex,
    MalformedElement, Member, MethodElement, ParameterElement, Severity, SymbolTable, TypeElement,
    TypeRef,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Name of the factory generated for `ty`'s injection constructor
/// (`com.example.Outer_Inner_Factory`)
pub fn factory_name_for(ty: &ClassName) -> ClassName {
    ClassName::new(
        ty.package.clone(),
        format!("{}{FACTORY_SUFFIX}", ty.simple_names.join("_")),
    )
}

/// Validator for injection points and the types that contain them
pub struct InjectValidator {
    symbols: Arc<dyn SymbolTable>,
    artifacts: Arc<dyn GeneratedArtifactIndex>,
    options: ValidatorOptions,
    request_validator: Arc<DependencyRequestValidator>,
    signatures: MethodSignatureFormatter,
    severity_override: Option<Severity>,
    provision_reports: ReportCache,
    members_injection_reports: ReportCache,
}

impl InjectValidator {
    pub fn new(
        symbols: Arc<dyn SymbolTable>,
        artifacts: Arc<dyn GeneratedArtifactIndex>,
        options: ValidatorOptions,
    ) -> Self {
        let request_validator = Arc::new(DependencyRequestValidator::new(Arc::clone(&symbols)));
        Self::with_override(symbols, artifacts, options, request_validator, None)
    }

    fn with_override(
        symbols: Arc<dyn SymbolTable>,
        artifacts: Arc<dyn GeneratedArtifactIndex>,
        options: ValidatorOptions,
        request_validator: Arc<DependencyRequestValidator>,
        severity_override: Option<Severity>,
    ) -> Self {
        Self {
            signatures: MethodSignatureFormatter::new(Arc::clone(&symbols)),
            symbols,
            artifacts,
            options,
            request_validator,
            severity_override,
            provision_reports: ReportCache::new("provision"),
            members_injection_reports: ReportCache::new("members_injection"),
        }
    }

    /// A validator that reports private and static injection as errors,
    /// unless `ignore_private_and_static_injection_for_component` is set, in
    /// which case this validator is returned unchanged
    ///
    /// The returned validator has its own, initially empty, caches.
    pub fn when_generating_code(self: &Arc<Self>) -> Arc<Self> {
        if self.options.ignore_private_and_static_injection_for_component {
            return Arc::clone(self);
        }
        Arc::new(Self::with_override(
            Arc::clone(&self.symbols),
            Arc::clone(&self.artifacts),
            self.options.clone(),
            Arc::clone(&self.request_validator),
            Some(Severity::Error),
        ))
    }

    /// Drop both report caches
    pub fn clear_cache(&self) {
        self.provision_reports.clear();
        self.members_injection_reports.clear();
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Severity of private-member and private-class findings
    pub fn private_member_severity(&self) -> Severity {
        self.severity_override
            .unwrap_or(self.options.private_member_validation)
    }

    /// Severity of static-member findings
    pub fn static_member_severity(&self) -> Severity {
        self.severity_override
            .unwrap_or(self.options.static_member_validation)
    }

    /// Provision report for `ty`: its members-injection report plus its
    /// injection constructor, if it has exactly one
    pub fn validate(&self, ty: &TypeElement) -> Arc<ValidationReport> {
        self.provision_reports
            .get_or_compute(&ty.name, || self.validate_uncached(ty))
            .unwrap_or_else(|cycle| cyclic_report(ty, &cycle))
    }

    fn validate_uncached(&self, ty: &TypeElement) -> ValidationReport {
        let mut builder = ValidationReport::about(ty.id());
        builder.add_subreport(self.validate_for_members_injection(ty));

        let inject_constructors: Vec<_> = ty
            .constructors()
            .filter(|c| annotations::is_inject(c.element) || annotations::is_assisted_inject(c.element))
            .collect();
        match inject_constructors.as_slice() {
            [] => {}
            [constructor] => {
                builder.add_subreport(Arc::new(self.validate_constructor(ty, constructor)));
            }
            _ => {
                builder.add_error(InjectionMessage::MultipleInjectedConstructors {});
            }
        }

        let report = builder.build();
        debug!(
            ty = %ty.name,
            clean = report.is_clean(),
            "provision validation finished"
        );
        report
    }

    fn validate_constructor(
        &self,
        ty: &TypeElement,
        constructor: &Member<'_, ConstructorElement>,
    ) -> ValidationReport {
        let mut builder = ValidationReport::about(ty.id());
        if let Err(malformed) = self.symbols.check_well_formed(&constructor.id) {
            add_element_has_errors(&mut builder, &malformed);
            return builder.build();
        }

        if annotations::is_inject(constructor.element)
            && annotations::is_assisted_inject(constructor.element)
        {
            builder.add_error_at(InjectionMessage::InjectAndAssistedInject {}, &constructor.id, None);
        }

        let Some(injection) = annotations::injection_annotation(constructor.element) else {
            return builder.build();
        };
        let annotation = injection.simple_name().to_string();
        let is_assisted = injection.is(ASSISTED_INJECT);
        debug!(
            constructor = %self.signatures.format_constructor(constructor),
            "validating injection constructor"
        );

        if constructor.modifiers.is_private() {
            builder.add_error_at(InjectionMessage::PrivateConstructor {}, &constructor.id, None);
        }

        // Annotation shapes were already checked when the factory was generated.
        if !self.processed_in_previous_round(ty) {
            for qualifier in annotations::qualifiers(constructor.element) {
                builder.add_error_at(
                    InjectionMessage::QualifierOnConstructor {
                        annotation: annotation.clone(),
                    },
                    &constructor.id,
                    Some(qualifier),
                );
            }
            for scope in annotations::scopes(constructor.element) {
                let message = if is_assisted {
                    InjectionMessage::ScopeOnAssistedInjectConstructor {}
                } else {
                    InjectionMessage::ScopeOnInjectConstructor {}
                };
                builder.add_error_at(message, &constructor.id, Some(scope));
            }
        }

        for parameter in constructor.parameters() {
            self.validate_parameter(&mut builder, &parameter);
        }

        if self.throws_checked_exceptions(&constructor.thrown_types) {
            builder.add_item(
                InjectionMessage::CheckedExceptionOnConstructor {
                    annotation: annotation.clone(),
                },
                self.private_member_severity(),
                &constructor.id,
                None,
            );
        }

        self.check_inject_into_private_class(ty, &constructor.id, &mut builder);

        if ty.modifiers.is_abstract {
            builder.add_error_at(
                InjectionMessage::AbstractClassConstructor {
                    annotation: annotation.clone(),
                },
                &constructor.id,
                None,
            );
        }

        if is_inner_class(ty) {
            builder.add_error_at(
                InjectionMessage::InnerClassConstructor { annotation },
                &constructor.id,
                None,
            );
        }

        let type_id = ty.id();
        let scopes = annotations::scopes(constructor.element);
        if is_assisted {
            for scope in scopes {
                builder.add_error_at(InjectionMessage::AssistedInjectTypeScoped {}, &type_id, Some(scope));
            }
        } else if scopes.len() > 1 {
            for scope in scopes {
                builder.add_error_at(InjectionMessage::MultipleScopes {}, &type_id, Some(scope));
            }
        }

        builder.build()
    }

    /// Members-injection report for `ty`: its injected fields and methods,
    /// with its superclass's members-injection report as a subreport
    pub fn validate_for_members_injection(&self, ty: &TypeElement) -> Arc<ValidationReport> {
        self.members_injection_reports
            .get_or_compute(&ty.name, || self.validate_for_members_injection_uncached(ty))
            .unwrap_or_else(|cycle| cyclic_report(ty, &cycle))
    }

    fn validate_for_members_injection_uncached(&self, ty: &TypeElement) -> ValidationReport {
        let type_id = ty.id();
        let mut builder = ValidationReport::about(type_id.clone());

        match self.symbols.check_well_formed(&type_id) {
            Err(malformed) => add_element_has_errors(&mut builder, &malformed),
            Ok(()) => {
                let mut has_injected_members = false;
                for field in ty.fields().filter(|f| annotations::is_inject(f.element)) {
                    has_injected_members = true;
                    let report = self.validate_field(&field);
                    if !report.is_clean() {
                        builder.add_subreport(Arc::new(report));
                    }
                }
                for method in ty.methods().filter(|m| annotations::is_inject(m.element)) {
                    has_injected_members = true;
                    let report = self.validate_method(&method);
                    if !report.is_clean() {
                        builder.add_subreport(Arc::new(report));
                    }
                }

                if has_injected_members {
                    self.check_inject_into_private_class(ty, &type_id, &mut builder);
                    if ty.is_kotlin_object() {
                        builder.add_error(InjectionMessage::KotlinObject {});
                    }
                }
            }
        }

        if let Some(superclass) = ty.superclass.as_ref().filter(|s| !s.is_declared(OBJECT)) {
            match self.resolve_type(superclass) {
                Some(element) => {
                    builder.add_subreport(self.validate_for_members_injection(element));
                }
                None => {
                    builder.add_error(InjectionMessage::ElementHasErrors {
                        element: superclass.to_string(),
                    });
                }
            }
        }

        let report = builder.build();
        debug!(
            ty = %ty.name,
            clean = report.is_clean(),
            "members-injection validation finished"
        );
        report
    }

    fn validate_field(&self, field: &Member<'_, FieldElement>) -> ValidationReport {
        let mut builder = ValidationReport::about(field.id.clone());
        if let Err(malformed) = self.symbols.check_well_formed(&field.id) {
            add_element_has_errors(&mut builder, &malformed);
            return builder.build();
        }

        if field.modifiers.is_final {
            builder.add_error(InjectionMessage::FinalField {});
        }
        if field.modifiers.is_private() {
            builder.add_item(
                InjectionMessage::PrivateField {},
                self.private_member_severity(),
                &field.id,
                None,
            );
        }
        if field.modifiers.is_static {
            builder.add_item(
                InjectionMessage::StaticField {},
                self.static_member_severity(),
                &field.id,
                None,
            );
        }

        self.validate_request_site(&mut builder, field, &field.ty);
        builder.build()
    }

    fn validate_method(&self, method: &Member<'_, MethodElement>) -> ValidationReport {
        let mut builder = ValidationReport::about(method.id.clone());
        if let Err(malformed) = self.symbols.check_well_formed(&method.id) {
            add_element_has_errors(&mut builder, &malformed);
            return builder.build();
        }

        if method.modifiers.is_abstract {
            builder.add_error(InjectionMessage::AbstractMethod {});
        }
        if method.modifiers.is_private() {
            builder.add_item(
                InjectionMessage::PrivateMethod {},
                self.private_member_severity(),
                &method.id,
                None,
            );
        }
        if method.modifiers.is_static {
            builder.add_item(
                InjectionMessage::StaticMethod {},
                self.static_member_severity(),
                &method.id,
                None,
            );
        }
        if !method.type_parameters.is_empty() {
            builder.add_error(InjectionMessage::GenericMethod {});
        }
        if !method.thrown_types.is_empty() {
            builder.add_error(InjectionMessage::MethodThrows {});
        }

        for parameter in method.parameters() {
            self.validate_parameter(&mut builder, &parameter);
        }
        builder.build()
    }

    fn validate_parameter(
        &self,
        builder: &mut ValidationReportBuilder,
        parameter: &Member<'_, ParameterElement>,
    ) {
        match self.symbols.check_well_formed(&parameter.id) {
            Ok(()) => self.validate_request_site(builder, parameter, &parameter.ty),
            Err(malformed) => add_element_has_errors(builder, &malformed),
        }
    }

    fn validate_request_site<T: Annotated>(
        &self,
        builder: &mut ValidationReportBuilder,
        site: &Member<'_, T>,
        ty: &TypeRef,
    ) {
        self.request_validator
            .validate_dependency_request(builder, site, ty);
        self.request_validator.check_not_producer(builder, site, ty);
    }

    /// Whether any thrown type is neither a `RuntimeException` nor an `Error`
    fn throws_checked_exceptions(&self, thrown_types: &[TypeRef]) -> bool {
        let runtime_exception = TypeRef::declared(RUNTIME_EXCEPTION);
        let error = TypeRef::declared(ERROR);
        !thrown_types.iter().all(|thrown| {
            self.symbols.is_subtype(thrown, &runtime_exception)
                || self.symbols.is_subtype(thrown, &error)
        })
    }

    fn check_inject_into_private_class(
        &self,
        ty: &TypeElement,
        element: &ElementId,
        builder: &mut ValidationReportBuilder,
    ) {
        if !is_element_accessible_from_own_package(self.symbols.as_ref(), ty) {
            builder.add_item(
                InjectionMessage::PrivateClass {},
                self.private_member_severity(),
                element,
                None,
            );
        }
    }

    fn processed_in_previous_round(&self, ty: &TypeElement) -> bool {
        self.artifacts.artifact_exists(&factory_name_for(&ty.name))
    }

    fn resolve_type(&self, ty: &TypeRef) -> Option<&TypeElement> {
        if ty.is_erroneous() {
            return None;
        }
        ty.class_name().and_then(|name| self.symbols.type_element(name))
    }
}

fn add_element_has_errors(builder: &mut ValidationReportBuilder, malformed: &MalformedElement) {
    debug!(
        element = %malformed.element,
        reason = %malformed.reason,
        "skipping structural checks for malformed element"
    );
    builder.add_error_at(
        InjectionMessage::ElementHasErrors {
            element: malformed.element.to_string(),
        },
        &malformed.element,
        None,
    );
}

/// Uncached report for a type whose validation re-entered itself
fn cyclic_report(ty: &TypeElement, cycle: &CycleDetected) -> Arc<ValidationReport> {
    warn!(ty = %ty.name, "{cycle}");
    let mut builder = ValidationReport::about(ty.id());
    builder.add_error(InjectionMessage::CyclicValidation {
        element: ty.name.to_string(),
    });
    Arc::new(builder.build())
}
