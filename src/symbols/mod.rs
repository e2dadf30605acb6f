//! Declaration snapshot handed over by the host front-end.
//!
//! The generator never talks to a compiler directly. It reads a read-only
//! [`SymbolTable`]: type declarations with their visibility, base-type chain,
//! markers and member methods. [`DeclarationSet`] is the in-memory table,
//! loaded from YAML or JSON by [`load_declarations`].

mod load;
mod table;
mod types;

pub use load::*;
pub use table::*;
pub use types::*;
