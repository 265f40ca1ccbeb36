//! Well-known qualified names
//!
//! Annotation and framework type names recognized by the validation core.
//! Names are canonical (nested types joined with `.`).

// Injection points
pub const INJECT_ANNOTATIONS: &[&str] = &["javax.inject.Inject", "jakarta.inject.Inject"];
pub const ASSISTED_INJECT: &str = "dagger.assisted.AssistedInject";

// Binding methods
pub const PROVIDES: &str = "dagger.Provides";
pub const PRODUCES: &str = "dagger.producers.Produces";
pub const BINDS: &str = "dagger.Binds";
pub const MULTIBINDS: &str = "dagger.multibindings.Multibinds";
pub const BINDS_OPTIONAL_OF: &str = "dagger.BindsOptionalOf";
pub const BINDING_METHOD_ANNOTATIONS: &[&str] =
    &[PROVIDES, PRODUCES, BINDS, MULTIBINDS, BINDS_OPTIONAL_OF];

// Multibinding contributions
pub const INTO_SET: &str = "dagger.multibindings.IntoSet";
pub const ELEMENTS_INTO_SET: &str = "dagger.multibindings.ElementsIntoSet";
pub const INTO_MAP: &str = "dagger.multibindings.IntoMap";
pub const MULTIBINDING_ANNOTATIONS: &[&str] = &[INTO_SET, ELEMENTS_INTO_SET, INTO_MAP];

// Test-root value bindings
pub const BIND_VALUE: &str = "dagger.hilt.android.testing.BindValue";
pub const BIND_VALUE_INTO_SET: &str = "dagger.hilt.android.testing.BindValueIntoSet";
pub const BIND_ELEMENTS_INTO_SET: &str = "dagger.hilt.android.testing.BindElementsIntoSet";
pub const BIND_VALUE_INTO_MAP: &str = "dagger.hilt.android.testing.BindValueIntoMap";

// Framework types
pub const PROVIDER: &str = "javax.inject.Provider";
pub const PROVIDER_TYPES: &[&str] = &[PROVIDER, "jakarta.inject.Provider"];
pub const LAZY: &str = "dagger.Lazy";
pub const PRODUCER: &str = "dagger.producers.Producer";
pub const PRODUCED: &str = "dagger.producers.Produced";
pub const MEMBERS_INJECTOR: &str = "dagger.MembersInjector";
pub const LISTENABLE_FUTURE: &str = "com.google.common.util.concurrent.ListenableFuture";

// Core library types
pub const OBJECT: &str = "java.lang.Object";
pub const RUNTIME_EXCEPTION: &str = "java.lang.RuntimeException";
pub const ERROR: &str = "java.lang.Error";
pub const STRING: &str = "java.lang.String";
pub const CLASS: &str = "java.lang.Class";
pub const SET: &str = "java.util.Set";
pub const MAP: &str = "java.util.Map";

/// Suffix appended to the flattened class name of a generated factory
pub const FACTORY_SUFFIX: &str = "_Factory";
