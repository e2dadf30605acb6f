use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use super::synth::{synthesize, InterfaceArtifact};
use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::resolve::{build_services, ServiceDeclaration};
use crate::symbols::SymbolTable;

/// Where and how artifacts are written.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub output_dir: PathBuf,
    /// Overwrite artifacts that already exist with different content
    pub force: bool,
    /// Report what would be written without touching the filesystem
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Written,
    /// Content on disk already matches
    Unchanged,
    /// File exists with other content and `force` is off
    Skipped,
    DryRun,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
    pub artifact: InterfaceArtifact,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub files: Vec<GeneratedFile>,
    #[serde(serialize_with = "serialize_issues")]
    pub issues: Vec<ConfigError>,
    /// Public handler methods dropped for lack of a verb marker
    pub dropped_handlers: usize,
}

fn serialize_issues<S: serde::Serializer>(
    issues: &[ConfigError],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(issues.iter().map(ToString::to_string))
}

impl GenerationReport {
    pub fn count(&self, outcome: WriteOutcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }

    pub fn paths(&self, outcome: WriteOutcome) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(move |f| f.outcome == outcome)
            .map(|f| f.path.as_path())
    }
}

/// Render every artifact without writing anything.
///
/// Configuration issues are logged and returned; in strict mode the first
/// one becomes the error.
pub fn synthesize_all<T: SymbolTable + ?Sized>(
    table: &T,
    config: &GeneratorConfig,
) -> anyhow::Result<(Vec<InterfaceArtifact>, Vec<ConfigError>, usize)> {
    let markers = config.markers.resolve(table);
    if config.strict {
        if let Some(issue) = markers.issues().first() {
            return Err(issue.clone()).context("strict mode: configuration is incomplete");
        }
    }

    let services = build_services(table, &markers, &config.service_suffix, config.parallel);
    let dropped = services.iter().map(|s| s.dropped.len()).sum();
    let artifacts = services
        .iter()
        .map(|svc| {
            synthesize(svc, config)
                .with_context(|| format!("Failed to render interface for {}", svc.name))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    ensure_unique_file_names(&services, &artifacts)?;
    Ok((artifacts, markers.issues().to_vec(), dropped))
}

fn qualified_name(service: &ServiceDeclaration) -> String {
    match service.namespace.as_deref().filter(|ns| !ns.is_empty()) {
        Some(ns) => format!("{ns}.{}", service.name),
        None => service.name.clone(),
    }
}

/// Two services rendering to the same file name would overwrite each other.
fn ensure_unique_file_names(
    services: &[ServiceDeclaration],
    artifacts: &[InterfaceArtifact],
) -> anyhow::Result<()> {
    let mut seen: HashMap<&str, &ServiceDeclaration> = HashMap::new();
    for (service, artifact) in services.iter().zip(artifacts) {
        if let Some(first) = seen.insert(&artifact.file_name, service) {
            anyhow::bail!(
                "{} and {} both generate {}; rename one of them",
                qualified_name(first),
                qualified_name(service),
                artifact.file_name
            );
        }
    }
    Ok(())
}

fn write_artifact(
    path: &Path,
    artifact: &InterfaceArtifact,
    options: &GenerationOptions,
) -> anyhow::Result<WriteOutcome> {
    if options.dry_run {
        tracing::info!(path = %path.display(), "dry run: would write interface");
        return Ok(WriteOutcome::DryRun);
    }
    if path.exists() {
        let existing = fs::read(path)
            .with_context(|| format!("Failed to read existing artifact {path:?}"))?;
        if existing == artifact.source.as_bytes() {
            tracing::debug!(path = %path.display(), "interface unchanged");
            return Ok(WriteOutcome::Unchanged);
        }
        if !options.force {
            tracing::warn!(
                path = %path.display(),
                "skipping existing interface file (use --force to overwrite)"
            );
            return Ok(WriteOutcome::Skipped);
        }
    }
    fs::write(path, &artifact.source)
        .with_context(|| format!("Failed to write interface {path:?}"))?;
    tracing::info!(
        path = %path.display(),
        interface = %artifact.interface_name,
        "generated interface"
    );
    Ok(WriteOutcome::Written)
}

/// Generate one client interface file per service declaration in `table`.
///
/// Artifacts land in `options.output_dir` (created when needed) in discovery
/// order.
pub fn generate_interfaces<T: SymbolTable + ?Sized>(
    table: &T,
    config: &GeneratorConfig,
    options: &GenerationOptions,
) -> anyhow::Result<GenerationReport> {
    let (artifacts, issues, dropped_handlers) = synthesize_all(table, config)?;

    if !options.dry_run && !artifacts.is_empty() {
        fs::create_dir_all(&options.output_dir).with_context(|| {
            format!("Failed to create output directory {:?}", options.output_dir)
        })?;
    }

    let mut files = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = options.output_dir.join(&artifact.file_name);
        let outcome = write_artifact(&path, &artifact, options)?;
        files.push(GeneratedFile {
            path,
            outcome,
            artifact,
        });
    }

    Ok(GenerationReport {
        files,
        issues,
        dropped_handlers,
    })
}
