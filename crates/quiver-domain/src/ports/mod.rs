//! Ports
//!
//! Interfaces to the host compiler. The validation core only ever talks to
//! the symbol table, the output namespace, and the diagnostic sink through
//! these traits.

pub mod bindings;
pub mod keys;
pub mod messager;
pub mod symbols;

pub use bindings::BindingMethodRecognizer;
pub use keys::KeyFactory;
pub use messager::Messager;
pub use symbols::{GeneratedArtifactIndex, MalformedElement, NoGeneratedArtifacts, SymbolTable};
