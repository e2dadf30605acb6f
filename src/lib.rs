//! # ifacegen
//!
//! **ifacegen** derives RestEase client interfaces from annotated ASP.NET
//! controller declarations, so a client library and the service it talks to
//! share one source of truth.
//!
//! ## Overview
//!
//! The input is a static declaration graph: types with their base types,
//! markers (attributes), methods and parameters. It arrives as a YAML or JSON
//! snapshot or through any front-end that implements [`symbols::SymbolTable`].
//! For every public `*Controller` class deriving from `ControllerBase`, one
//! `I<Name>.generated.cs` interface is written.
//!
//! ## Architecture
//!
//! - **[`symbols`]** - Declaration model, the `SymbolTable` trait and the snapshot loader
//! - **[`markers`]** - Marker catalog and its resolution against a table
//! - **[`resolve`]** - Service selection, verb/route resolution and parameter binding
//! - **[`generator`]** - Interface synthesis (Askama) and the output writer
//! - **[`linter`]** - Diagnostics over the same resolvers
//! - **[`config`]** - `ifacegen.toml` and `IFACEGEN_*` overrides
//! - **[`logging`]** - `tracing` subscriber setup for the binary
//! - **[`cli`]** - The `ifacegen` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as ifacegen generate
//!     participant Load as symbols::load_declarations
//!     participant Markers as MarkerCatalog::resolve
//!     participant Resolve as resolve::build_services
//!     participant Synth as generator::synthesize
//!     participant FS as File System
//!
//!     CLI->>Load: snapshot.yaml
//!     Load-->>CLI: DeclarationSet
//!     CLI->>Markers: catalog + table
//!     Markers-->>CLI: ResolvedMarkers (+ config issues)
//!     CLI->>Resolve: table, markers, suffix
//!     Resolve->>Resolve: select → verb → bindings (rayon fan-out)
//!     Resolve-->>CLI: Vec<ServiceDeclaration>
//!     CLI->>Synth: each service
//!     Synth-->>CLI: InterfaceArtifact
//!     CLI->>FS: I<Name>.generated.cs (skip unchanged)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use ifacegen::config::GeneratorConfig;
//! use ifacegen::generator::{generate_interfaces, GenerationOptions};
//! use ifacegen::symbols::load_declarations;
//!
//! let table = load_declarations("snapshot.yaml".as_ref())?;
//! let options = GenerationOptions {
//!     output_dir: "generated".into(),
//!     ..Default::default()
//! };
//! let report = generate_interfaces(&table, &GeneratorConfig::default(), &options)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod linter;
pub mod logging;
pub mod markers;
pub mod resolve;
pub mod symbols;

pub use config::GeneratorConfig;
pub use error::ConfigError;
pub use generator::{generate_interfaces, GenerationOptions, GenerationReport};
pub use symbols::{load_declarations, DeclarationSet, SymbolTable};
