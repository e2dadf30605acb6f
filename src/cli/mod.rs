//! # CLI Module
//!
//! Command-line surface of the `ifacegen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! ```bash
//! ifacegen generate --input snapshot.yaml --output src/Client/Generated
//! ```
//!
//! Options:
//! - `--input <FILE>` - Declaration snapshot, YAML or JSON (required)
//! - `--output <DIR>` - Output directory (default: `generated/` next to the input)
//! - `--config <FILE>` - Generator config (default: `ifacegen.toml` next to the input)
//! - `--force` - Overwrite interface files whose content differs
//! - `--dry-run` - Report what would be written
//! - `--strict` - Fail when a marker type cannot be resolved
//! - `--no-parallel` - Resolve declarations on one thread
//!
//! ### `inspect`
//!
//! Print resolved services, operations and parameter bindings, as text or
//! with `--json`.
//!
//! ### `lint`
//!
//! Report ambiguous, ignored or unresolvable markers. `--fail-on-error`
//! turns error-level issues into a non-zero exit code.

mod commands;


pub use commands::{execute, inspect_services, Cli, CommandStatus, Commands, InspectedService};
