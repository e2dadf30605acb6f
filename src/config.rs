//! # Generator Configuration
//!
//! Naming conventions and marker types the generator works with.
//!
//! ## Sources
//!
//! Values are layered, later sources winning:
//!
//! 1. built-in defaults ([`GeneratorConfig::default`])
//! 2. `ifacegen.toml` (explicit `--config`, or auto-detected next to the
//!    declaration snapshot)
//! 3. environment variables
//! 4. CLI flags
//!
//! ## File format
//!
//! ```toml
//! service_suffix = "Controller"
//! interface_prefix = "I"
//! using_namespace = "RestEase"
//! strict = true
//!
//! [markers]
//! service_base = "Microsoft.AspNetCore.Mvc.ControllerBase"
//! ```
//!
//! ## Environment Variables
//!
//! | variable | field |
//! |----------|-------|
//! | `IFACEGEN_SERVICE_SUFFIX` | `service_suffix` |
//! | `IFACEGEN_INTERFACE_PREFIX` | `interface_prefix` |
//! | `IFACEGEN_USING_NAMESPACE` | `using_namespace` |
//! | `IFACEGEN_STRICT` | `strict` |
//! | `IFACEGEN_PARALLEL` | `parallel` |

use crate::error::ConfigError;
use crate::markers::MarkerCatalog;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// File name looked up next to the declaration snapshot.
pub const CONFIG_FILE_NAME: &str = "ifacegen.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Suffix a service declaration's simple name must end with.
    pub service_suffix: String,
    /// Prefix of the generated interface name.
    pub interface_prefix: String,
    /// Token in the service route replaced by the name without its suffix.
    pub controller_placeholder: String,
    /// Namespace imported at the top of each artifact.
    pub using_namespace: String,
    /// Appended to the interface name to form the artifact file name.
    pub file_suffix: String,
    /// Serialization-mode hint attached to every query marker.
    pub query_serialization: String,
    /// Treat configuration issues (unresolvable marker types) as fatal.
    pub strict: bool,
    /// Resolve service declarations on the rayon pool.
    pub parallel: bool,
    pub markers: MarkerCatalog,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            service_suffix: "Controller".to_string(),
            interface_prefix: "I".to_string(),
            controller_placeholder: "[controller]".to_string(),
            using_namespace: "RestEase".to_string(),
            file_suffix: ".generated.cs".to_string(),
            query_serialization: "Serialized".to_string(),
            strict: false,
            parallel: true,
            markers: MarkerCatalog::default(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(key, format!("expected a boolean, got `{other}`"))),
    }
}

impl GeneratorConfig {
    /// Read a TOML configuration file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path:?}"))?;
        let config: GeneratorConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {path:?}"))?;
        Ok(config)
    }

    /// `ifacegen.toml` in the directory holding `input`, if present.
    pub fn detect(input: &Path) -> Option<PathBuf> {
        let dir = input.parent().unwrap_or_else(|| Path::new("."));
        let candidate = dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Defaults, then the config file (explicit or detected), then the
    /// process environment. The result is validated.
    pub fn load(explicit: Option<&Path>, input: &Path) -> anyhow::Result<Self> {
        let file = explicit.map(Path::to_path_buf).or_else(|| Self::detect(input));
        let mut config = match &file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading generator config");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_env_from(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `IFACEGEN_*` overrides read through `lookup`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("IFACEGEN_SERVICE_SUFFIX") {
            self.service_suffix = v;
        }
        if let Some(v) = lookup("IFACEGEN_INTERFACE_PREFIX") {
            self.interface_prefix = v;
        }
        if let Some(v) = lookup("IFACEGEN_USING_NAMESPACE") {
            self.using_namespace = v;
        }
        if let Some(v) = lookup("IFACEGEN_STRICT") {
            self.strict = parse_bool("IFACEGEN_STRICT", &v)?;
        }
        if let Some(v) = lookup("IFACEGEN_PARALLEL") {
            self.parallel = parse_bool("IFACEGEN_PARALLEL", &v)?;
        }
        Ok(())
    }

    /// Reject values that would make the selector or the output meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_suffix.is_empty() {
            return Err(ConfigError::invalid("service_suffix", "must not be empty"));
        }
        if self.file_suffix.contains(['/', '\\']) {
            return Err(ConfigError::invalid(
                "file_suffix",
                "must not contain path separators",
            ));
        }
        if !self
            .interface_prefix
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(ConfigError::invalid(
                "interface_prefix",
                "must contain only identifier characters",
            ));
        }
        if self.query_serialization.trim().is_empty() {
            return Err(ConfigError::invalid("query_serialization", "must not be empty"));
        }
        if self.controller_placeholder.is_empty() {
            return Err(ConfigError::invalid("controller_placeholder", "must not be empty"));
        }
        if self.using_namespace.trim().is_empty() {
            return Err(ConfigError::invalid("using_namespace", "must not be empty"));
        }
        Ok(())
    }
}
