//! Binding Validation for Quiver
//!
//! This crate validates annotated declarations against the injection rule
//! set and assembles binding declarations for graph resolution:
//! - Injection points (constructors, fields, methods) and their types
//! - Dependency request shapes (framework wrappers, qualifiers)
//! - Delegate and multibinding declarations built from module methods
//! - Multibinding annotation placement
//! - Bind-value fields on test roots
//!
//! Findings are collected into immutable [`ValidationReport`]s; only caller
//! contract violations surface as [`quiver_domain::Error`].
//!
//! ```ignore
//! use quiver_validate::{ConfigLoader, InjectValidator};
//!
//! let config = ConfigLoader::new().load()?;
//! let validator = InjectValidator::new(symbols, artifacts, config.validator);
//! let report = validator.validate(&type_element);
//! report.print_messages_to(&messager);
//! ```

// === Diagnostics ===
#[macro_use]
pub mod message_macro;
pub mod messages;
pub mod report;

// === Configuration and logging ===
pub mod config;
pub mod constants;
pub mod logging;

// === Declaration helpers ===
pub mod accessibility;
pub mod annotations;
pub mod key;
pub mod signature;

// === Validators ===
pub mod bind_value;
pub mod cache;
pub mod inject;
pub mod multibinding;
pub mod request;

// === Binding declarations ===
pub mod declarations;

pub use bind_value::{BindValueElement, BindValueKind, BindValueMetadata};
pub use cache::{CycleDetected, ReportCache};
pub use config::{ConfigLoader, LoggingConfig, QuiverConfig, ValidatorOptions};
pub use declarations::{
    BindingDeclaration, ContributionType, DelegateDeclaration, DelegateDeclarationFactory,
    HasContributionType, MultibindingDeclaration, MultibindingDeclarationFactory,
};
pub use inject::{InjectValidator, factory_name_for};
pub use key::DefaultKeyFactory;
pub use messages::DiagnosticMessage;
pub use multibinding::{AnyBindingMethodRecognizer, MultibindingAnnotationsChecker};
pub use report::{Item, ValidationReport, ValidationReportBuilder};
pub use request::{DependencyRequestFactory, DependencyRequestValidator};
pub use signature::MethodSignatureFormatter;
