//! Validation Reports
//!
//! A report collects the diagnostics found while validating one declaration
//! together with the reports of the declarations it depends on. Reports are
//! built once through [`ValidationReportBuilder`] and never change afterwards,
//! so they can be cached and shared behind an `Arc`.
//!
//! Output formats:
//! - Diagnostic sink ([`Messager`]) for the host compiler
//! - JSON for tooling
//! - Human-readable tree for logs

use crate::messages::DiagnosticMessage;
use quiver_domain::{AnnotationInstance, ElementId, Messager, Result, Severity};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// One diagnostic attached to a report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Item {
    /// Stable message id (e.g., "INJ001")
    pub id: &'static str,
    pub message: String,
    pub kind: Severity,
    /// Declaration the diagnostic is reported on
    pub element: ElementId,
    /// Annotation occurrence on `element` the diagnostic points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<AnnotationInstance>,
}

/// Immutable tree of diagnostics about a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub subject: ElementId,
    pub items: Vec<Item>,
    pub subreports: Vec<Arc<ValidationReport>>,
    clean: bool,
}

impl ValidationReport {
    /// Start building a report about `subject`
    pub fn about(subject: ElementId) -> ValidationReportBuilder {
        ValidationReportBuilder {
            subject,
            items: Vec::new(),
            subreports: Vec::new(),
        }
    }

    /// Whether neither this report nor any subreport holds an error
    ///
    /// Warnings and notes never make a report unclean.
    pub fn is_clean(&self) -> bool {
        self.clean
    }

    /// Items of this report and all subreports, breadth first
    ///
    /// A subreport reachable along several paths contributes its items once.
    pub fn all_items(&self) -> Vec<&Item> {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        let mut queue = std::collections::VecDeque::from([self]);
        while let Some(report) = queue.pop_front() {
            for item in &report.items {
                if seen.insert(item) {
                    items.push(item);
                }
            }
            queue.extend(report.subreports.iter().map(Arc::as_ref));
        }
        items
    }

    /// Errors of this report and all subreports
    pub fn errors(&self) -> Vec<&Item> {
        self.all_items()
            .into_iter()
            .filter(|item| item.kind == Severity::Error)
            .collect()
    }

    /// Send every item to the host's diagnostic sink
    pub fn print_messages_to(&self, messager: &dyn Messager) {
        for item in self.all_items() {
            messager.print_message(
                item.kind,
                &item.message,
                &item.element,
                item.annotation.as_ref(),
            );
        }
    }

    /// Generate JSON export
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Generate human-readable report
    pub fn to_human_readable(&self) -> String {
        let mut output = String::new();
        self.write_tree(&mut output, 0);
        output
    }

    fn write_tree(&self, output: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let status = if self.clean { "clean" } else { "FAILED" };
        output.push_str(&format!("{indent}{} [{status}]\n", self.subject));
        for item in &self.items {
            output.push_str(&format!("{indent}  [{}] {}: {}", item.kind, item.id, item.message));
            if item.element != self.subject {
                output.push_str(&format!(" (on {})", item.element));
            }
            if let Some(annotation) = &item.annotation {
                output.push_str(&format!(" at {annotation}"));
            }
            output.push('\n');
        }
        for subreport in &self.subreports {
            subreport.write_tree(output, depth + 1);
        }
    }
}

/// Accumulates items and subreports for a [`ValidationReport`]
#[derive(Debug)]
pub struct ValidationReportBuilder {
    subject: ElementId,
    items: Vec<Item>,
    subreports: Vec<Arc<ValidationReport>>,
}

impl ValidationReportBuilder {
    pub fn subject(&self) -> &ElementId {
        &self.subject
    }

    /// Error reported on the subject itself
    pub fn add_error<M: DiagnosticMessage>(&mut self, message: M) -> &mut Self {
        let element = self.subject.clone();
        self.push(message, Severity::Error, element, None)
    }

    /// Error reported on `element`, optionally at one of its annotations
    pub fn add_error_at<M: DiagnosticMessage>(
        &mut self,
        message: M,
        element: &ElementId,
        annotation: Option<&AnnotationInstance>,
    ) -> &mut Self {
        self.push(message, Severity::Error, element.clone(), annotation.cloned())
    }

    /// Item with an explicit severity
    pub fn add_item<M: DiagnosticMessage>(
        &mut self,
        message: M,
        kind: Severity,
        element: &ElementId,
        annotation: Option<&AnnotationInstance>,
    ) -> &mut Self {
        self.push(message, kind, element.clone(), annotation.cloned())
    }

    pub fn add_subreport(&mut self, report: Arc<ValidationReport>) -> &mut Self {
        self.subreports.push(report);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|item| item.kind == Severity::Error)
    }

    pub fn build(self) -> ValidationReport {
        let clean = !self.has_errors()
            && self.subreports.iter().all(|report| report.is_clean());
        ValidationReport {
            subject: self.subject,
            items: self.items,
            subreports: self.subreports,
            clean,
        }
    }

    fn push<M: DiagnosticMessage>(
        &mut self,
        message: M,
        kind: Severity,
        element: ElementId,
        annotation: Option<AnnotationInstance>,
    ) -> &mut Self {
        self.items.push(Item {
            id: message.id(),
            message: message.to_string(),
            kind,
            element,
            annotation,
        });
        self
    }
}
