//! Metadata resolution: from declarations to services, operations and bindings.
//!
//! ```text
//! SymbolTable ──select──▶ &TypeDecl ──build──▶ ServiceDeclaration
//!                                     │
//!                    per method:  resolve_verb   (verb + route template)
//!                    per param:   resolve_binding (Body/Header/Query/Path)
//! ```
//!
//! Everything in here is a pure function of the declaration snapshot and the
//! resolved marker catalog.

mod binding;
mod build;
mod select;
mod template;
mod types;
mod verb;

pub use binding::*;
pub use build::*;
pub use select::*;
pub use template::*;
pub use types::*;
pub use verb::*;
