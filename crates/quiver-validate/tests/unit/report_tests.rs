//! Tests for validation report composition and output

use crate::test_utils::{RecordingMessager, class, singleton};
use quiver_domain::{ElementId, Severity};
use quiver_validate::ValidationReport;
use quiver_validate::messages::{InjectionMessage, MultibindingMessage};
use std::sync::Arc;

fn field(owner: &str) -> ElementId {
    ElementId::Field {
        owner: class(owner).name,
        name: "dep".to_string(),
    }
}

#[test]
fn test_empty_report_is_clean() {
    let report = ValidationReport::about(class("Foo").id()).build();

    assert!(report.is_clean());
    assert!(report.all_items().is_empty());
}

#[test]
fn test_warnings_and_notes_keep_report_clean() {
    let subject = class("Foo").id();
    let mut builder = ValidationReport::about(subject.clone());
    builder
        .add_item(InjectionMessage::PrivateField {}, Severity::Warning, &subject, None)
        .add_item(InjectionMessage::StaticField {}, Severity::Note, &subject, None);

    let report = builder.build();

    assert!(report.is_clean());
    assert_eq!(report.all_items().len(), 2);
    assert!(report.errors().is_empty());
}

#[test]
fn test_error_makes_report_unclean() {
    let mut builder = ValidationReport::about(class("Foo").id());
    builder.add_error(InjectionMessage::MultipleInjectedConstructors {});

    let report = builder.build();

    assert!(!report.is_clean());
    let item = &report.items[0];
    assert_eq!(item.id, "INJ001");
    assert_eq!(item.kind, Severity::Error);
    assert_eq!(item.element, class("Foo").id());
}

#[test]
fn test_unclean_subreport_propagates() {
    let mut child = ValidationReport::about(field("Foo"));
    child.add_error(InjectionMessage::FinalField {});
    let mut parent = ValidationReport::about(class("Foo").id());
    parent.add_subreport(Arc::new(child.build()));

    let report = parent.build();

    assert!(!report.is_clean());
    assert!(report.items.is_empty());
    assert_eq!(report.errors().len(), 1);
}

#[test]
fn test_shared_subreport_items_are_reported_once() {
    let mut shared = ValidationReport::about(class("Base").id());
    shared.add_error(InjectionMessage::KotlinObject {});
    let shared = Arc::new(shared.build());

    let mut left = ValidationReport::about(class("Left").id());
    left.add_subreport(Arc::clone(&shared));
    let mut right = ValidationReport::about(class("Right").id());
    right.add_subreport(Arc::clone(&shared));
    let mut root = ValidationReport::about(class("Root").id());
    root.add_subreport(Arc::new(left.build()))
        .add_subreport(Arc::new(right.build()));

    assert_eq!(root.build().all_items().len(), 1);
}

#[test]
fn test_print_messages_forwards_annotation() {
    let subject = class("Foo").id();
    let mut builder = ValidationReport::about(subject.clone());
    builder.add_error_at(MultibindingMessage::NotOnBindingMethod {}, &subject, Some(&singleton()));
    let report = builder.build();
    let messager = RecordingMessager::default();

    report.print_messages_to(&messager);

    let messages = messager.messages.borrow();
    assert_eq!(messages.len(), 1);
    let (kind, text, element, annotation) = &messages[0];
    assert_eq!(*kind, Severity::Error);
    assert_eq!(
        text,
        "Multibinding annotations may only be on @Provides, @Produces, or @Binds methods"
    );
    assert_eq!(element, &subject);
    assert_eq!(annotation.as_ref(), Some(&singleton()));
}

#[test]
fn test_json_export() {
    let mut builder = ValidationReport::about(class("Foo").id());
    builder.add_error(InjectionMessage::MultipleScopes {});

    let json = builder.build().to_json().expect("serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["items"][0]["id"], "INJ011");
    assert_eq!(value["items"][0]["kind"], "error");
    assert_eq!(value["clean"], false);
}

#[test]
fn test_human_readable_tree() {
    let mut child = ValidationReport::about(field("Foo"));
    child.add_error(InjectionMessage::FinalField {});
    let mut parent = ValidationReport::about(class("Foo").id());
    parent.add_subreport(Arc::new(child.build()));

    let text = parent.build().to_human_readable();

    assert!(text.starts_with("test.Foo [FAILED]\n"));
    assert!(text.contains("  test.Foo.dep [FAILED]\n"));
    assert!(text.contains("[ERROR] INJ012: @Inject fields may not be final"));
}
