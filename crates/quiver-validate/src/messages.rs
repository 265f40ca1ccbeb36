//! Diagnostic message catalogue
//!
//! Every finding the validators can report, with a stable id per message.
//! Severity is decided where the message is reported, since some findings
//! are graded by configuration.

use std::fmt::Display;

/// A reportable message with a stable identifier
pub trait DiagnosticMessage: Display {
    /// Unique message ID (e.g., "INJ001", "REQ002")
    fn id(&self) -> &'static str;
}

define_messages! {
    pub enum InjectionMessage {
        #[message(id = "INJ001", text = "Types may only contain one injected constructor")]
        MultipleInjectedConstructors {},

        #[message(id = "INJ002", text = "Constructors cannot be annotated with both @Inject and @AssistedInject")]
        InjectAndAssistedInject {},

        #[message(id = "INJ003", text = "Injection into private constructors is not supported")]
        PrivateConstructor {},

        #[message(id = "INJ004", text = "@Qualifier annotations are not allowed on @{annotation} constructors")]
        QualifierOnConstructor { annotation: String },

        #[message(id = "INJ005", text = "@Scope annotations are not allowed on @Inject constructors; annotate the class instead")]
        ScopeOnInjectConstructor {},

        #[message(id = "INJ006", text = "@Scope annotations are not allowed on @AssistedInject constructors")]
        ScopeOnAssistedInjectConstructor {},

        #[message(id = "INJ007", text = "Checked exceptions are not supported on @{annotation} constructors")]
        CheckedExceptionOnConstructor { annotation: String },

        #[message(id = "INJ008", text = "@{annotation} is nonsense on the constructor of an abstract class")]
        AbstractClassConstructor { annotation: String },

        #[message(id = "INJ009", text = "@{annotation} constructors are invalid on inner classes. Did you mean to make the class static?")]
        InnerClassConstructor { annotation: String },

        #[message(id = "INJ010", text = "A type with an @AssistedInject-annotated constructor cannot be scoped")]
        AssistedInjectTypeScoped {},

        #[message(id = "INJ011", text = "A single binding may not declare more than one @Scope")]
        MultipleScopes {},

        #[message(id = "INJ012", text = "@Inject fields may not be final")]
        FinalField {},

        #[message(id = "INJ013", text = "Injection into private fields is not supported")]
        PrivateField {},

        #[message(id = "INJ014", text = "Injection into static fields is not supported")]
        StaticField {},

        #[message(id = "INJ015", text = "Methods with @Inject may not be abstract")]
        AbstractMethod {},

        #[message(id = "INJ016", text = "Injection into private methods is not supported")]
        PrivateMethod {},

        #[message(id = "INJ017", text = "Injection into static methods is not supported")]
        StaticMethod {},

        #[message(id = "INJ018", text = "Methods with @Inject may not declare type parameters")]
        GenericMethod {},

        #[message(id = "INJ019", text = "Methods with @Inject may not throw checked exceptions. Please wrap your exceptions in a RuntimeException instead.")]
        MethodThrows {},

        #[message(id = "INJ020", text = "Injection into private classes is not supported")]
        PrivateClass {},

        #[message(id = "INJ021", text = "Injection into Kotlin objects is not supported")]
        KotlinObject {},

        #[message(id = "INJ022", text = "{element} has errors")]
        ElementHasErrors { element: String },

        #[message(id = "INJ023", text = "Cyclic members-injection chain detected while validating {element}")]
        CyclicValidation { element: String },
    }
}

define_messages! {
    pub enum RequestMessage {
        #[message(id = "REQ001", text = "A single dependency request may not use more than one @Qualifier")]
        MultipleQualifiers {},

        #[message(id = "REQ002", text = "Injecting the raw type {ty} is not supported")]
        RawFrameworkType { ty: String },

        #[message(id = "REQ003", text = "Injecting Provider<T>, Lazy<T>, Producer<T>, or Produced<T> when T is a wildcard type such as {ty} is not supported")]
        WildcardFrameworkArgument { ty: String },

        #[message(id = "REQ004", text = "{ty} is not a valid request: {outer} may not wrap {inner}")]
        NestedFrameworkType { ty: String, outer: String, inner: String },

        #[message(id = "REQ005", text = "Injecting @AssistedInject type {ty} is not supported. Did you mean to inject its assisted factory type instead?")]
        AssistedInjectionType { ty: String },

        #[message(id = "REQ006", text = "{framework} may only be injected in @Produces methods")]
        ProducerInNonProducer { framework: String },
    }
}

define_messages! {
    pub enum MultibindingMessage {
        #[message(id = "MB001", text = "Multibinding annotations may only be on @Provides, @Produces, or @Binds methods")]
        NotOnBindingMethod {},
    }
}

define_messages! {
    pub enum BindValueMessage {
        #[message(id = "BV001", text = "Fields can be annotated with only one of @BindValue, @BindValueIntoMap, @BindElementsIntoSet, @BindValueIntoSet. Found: {found}")]
        MultipleBindValueAnnotations { found: String },

        #[message(id = "BV002", text = "@{annotation} can only be used with fields. Found: {element}")]
        NotAField { annotation: String, element: String },

        #[message(id = "BV003", text = "@{annotation} field getter cannot be private. Found: {element}")]
        PrivateGetter { annotation: String, element: String },

        #[message(id = "BV004", text = "@{annotation} fields cannot be private. Found: {element}")]
        PrivateField { annotation: String, element: String },

        #[message(id = "BV005", text = "@{annotation} fields cannot be used with @Inject annotation. Found {element}")]
        WithInject { annotation: String, element: String },

        #[message(id = "BV006", text = "@{annotation} fields cannot have more than one qualifier. Found {found}")]
        MultipleQualifiers { annotation: String, found: String },

        #[message(id = "BV007", text = "@BindValueIntoMap fields must have exactly one @MapKey. Found {found}")]
        MapKeyCount { found: String },

        #[message(id = "BV008", text = "@MapKey can only be used on @BindValueIntoMap fields, not @{annotation} fields")]
        UnexpectedMapKey { annotation: String },

        #[message(id = "BV009", text = "@{annotation} fields cannot be scoped. Found {found}")]
        Scoped { annotation: String, found: String },
    }
}
