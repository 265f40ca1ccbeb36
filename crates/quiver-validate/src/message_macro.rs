//! Message Definition Macro
//!
//! Provides a declarative macro for defining diagnostic message enums with
//! automatic trait implementations.
//!
//! # Example
//!
//! ```ignore
//! define_messages! {
//!     pub enum FieldMessage {
//!         #[message(id = "FLD001", text = "@{annotation} fields may not be final")]
//!         FinalField { annotation: String },
//!     }
//! }
//! ```

/// Macro to define message enums with automatic trait implementations
///
/// This macro generates:
/// - The enum with all variants
/// - `Display` implementation rendering the message text
/// - `DiagnosticMessage` implementation returning the stable id
///
/// Every field of a variant must appear in its `text` as a `{field}`
/// placeholder.
#[macro_export]
macro_rules! define_messages {
    (
        $vis:vis enum $name:ident {
            $(
                #[message(id = $id:literal, text = $text:literal)]
                $variant:ident {
                    $( $field:ident : $field_ty:ty ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis enum $name {
            $( $variant { $( $field: $field_ty ),* } ),*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            write!(f, $text $(, $field = $field)*)
                        }
                    ),*
                }
            }
        }

        impl $crate::messages::DiagnosticMessage for $name {
            fn id(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $id ),*
                }
            }
        }
    };
}
