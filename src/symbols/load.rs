use super::table::DeclarationSet;
use anyhow::Context;
use std::path::Path;

/// Encoding of a declaration snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Yaml,
    Json,
}

impl SnapshotFormat {
    /// `.yaml` / `.yml` are YAML, everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => SnapshotFormat::Yaml,
            _ => SnapshotFormat::Json,
        }
    }
}

/// Parse a declaration snapshot from a string.
pub fn parse_declarations(content: &str, format: SnapshotFormat) -> anyhow::Result<DeclarationSet> {
    let set = match format {
        SnapshotFormat::Yaml => serde_yaml::from_str(content)?,
        SnapshotFormat::Json => serde_json::from_str(content)?,
    };
    Ok(set)
}

/// Load a declaration snapshot from a YAML or JSON file.
pub fn load_declarations(path: &Path) -> anyhow::Result<DeclarationSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read declaration snapshot {path:?}"))?;
    let set = parse_declarations(&content, SnapshotFormat::from_path(path))
        .with_context(|| format!("Failed to parse declaration snapshot {path:?}"))?;
    tracing::debug!(
        path = %path.display(),
        declarations = set.declarations().len(),
        references = set.references().len(),
        "loaded declaration snapshot"
    );
    Ok(set)
}
