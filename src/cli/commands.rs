use crate::config::GeneratorConfig;
use crate::generator::{derive_base_path, generate_interfaces, GenerationOptions, WriteOutcome};
use crate::linter::{has_errors, lint_declarations, print_lint_issues, LintSeverity};
use crate::resolve::{build_services, BindingKind, ServiceDeclaration};
use crate::symbols::{load_declarations, DeclarationSet};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Command-line interface for ifacegen
///
/// Derives client interfaces from a declaration snapshot of annotated
/// controllers.
#[derive(Parser)]
#[command(name = "ifacegen")]
#[command(about = "Generate RestEase client interfaces from controller declarations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log at debug level (overrides IFACEGEN_LOG_LEVEL)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write one interface file per service declaration
    Generate {
        /// Declaration snapshot (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (default: `generated/` next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generator config (default: ifacegen.toml next to the input, if any)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite existing files whose content differs
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Show what would be written without touching the filesystem
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Fail when a marker type cannot be resolved
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Resolve declarations on a single thread
        #[arg(long, default_value_t = false)]
        no_parallel: bool,
    },
    /// Print the resolved services and operations
    Inspect {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Report ambiguous, ignored or unresolvable markers
    Lint {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Exit non-zero if any error-level issue is found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Only report error-level issues
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// How a successful command run should end the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// `lint --fail-on-error` found error-level issues
    LintFailed,
}

/// A resolved service as shown by `inspect`.
#[derive(Debug, Serialize)]
pub struct InspectedService {
    pub interface: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(flatten)]
    pub service: ServiceDeclaration,
}

/// Services in `table` with their derived interface name and base path.
pub fn inspect_services(table: &DeclarationSet, config: &GeneratorConfig) -> Vec<InspectedService> {
    let markers = config.markers.resolve(table);
    build_services(table, &markers, &config.service_suffix, config.parallel)
        .into_iter()
        .map(|service| InspectedService {
            interface: format!("{}{}", config.interface_prefix, service.name),
            base_path: service
                .base_route
                .as_deref()
                .map(|route| derive_base_path(&service.name, route, config)),
            service,
        })
        .collect()
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("generated")
}

fn load(input: &Path, config: Option<&Path>) -> anyhow::Result<(DeclarationSet, GeneratorConfig)> {
    let table = load_declarations(input)?;
    let config = GeneratorConfig::load(config, input)
        .with_context(|| format!("Failed to load generator config for {input:?}"))?;
    Ok((table, config))
}

fn print_inspection(services: &[InspectedService]) {
    if services.is_empty() {
        println!("No service declarations found.");
        return;
    }
    for svc in services {
        match &svc.base_path {
            Some(base) => println!("{} → {} [BasePath: {base}]", svc.service.name, svc.interface),
            None => println!("{} → {}", svc.service.name, svc.interface),
        }
        for op in &svc.service.operations {
            let route = op.route.as_ref().map(|r| r.as_str()).unwrap_or("");
            println!("  {:<7} {:<24} {}", op.verb.as_method().as_str(), route, op.name);
            for p in &op.parameters {
                let binding = match (&p.binding, &p.override_name) {
                    (BindingKind::Unclassified, _) => "-".to_string(),
                    (kind, Some(name)) => format!("{kind}({name})"),
                    (kind, None) => kind.to_string(),
                };
                println!("          {:<12} {} {}", binding, p.type_name, p.name);
            }
        }
        for dropped in &svc.service.dropped {
            println!("  (dropped) {dropped}");
        }
    }
}

/// Run one parsed command.
pub fn execute(cli: &Cli) -> anyhow::Result<CommandStatus> {
    match &cli.command {
        Commands::Generate {
            input,
            output,
            config,
            force,
            dry_run,
            strict,
            no_parallel,
        } => {
            let (table, mut config) = load(input, config.as_deref())?;
            if *strict {
                config.strict = true;
            }
            if *no_parallel {
                config.parallel = false;
            }
            let options = GenerationOptions {
                output_dir: output.clone().unwrap_or_else(|| default_output_dir(input)),
                force: *force,
                dry_run: *dry_run,
            };
            let report = generate_interfaces(&table, &config, &options)?;

            for file in &report.files {
                match file.outcome {
                    WriteOutcome::Written => println!("✅ Generated interface: {:?}", file.path),
                    WriteOutcome::Unchanged => println!("ℹ️  Unchanged: {:?}", file.path),
                    WriteOutcome::Skipped => println!(
                        "⚠️  Skipping existing interface file: {:?} (use --force to overwrite)",
                        file.path
                    ),
                    WriteOutcome::DryRun => println!("📝 Would write: {:?}", file.path),
                }
            }
            if report.files.is_empty() {
                println!("No service declarations found in {input:?}");
            }
            if report.dropped_handlers > 0 {
                println!(
                    "ℹ️  {} public method(s) without a verb marker left out (run `ifacegen lint` for details)",
                    report.dropped_handlers
                );
            }
            for issue in &report.issues {
                eprintln!("⚠️  {issue}");
            }
            Ok(CommandStatus::Success)
        }
        Commands::Inspect {
            input,
            config,
            json,
        } => {
            let (table, config) = load(input, config.as_deref())?;
            let services = inspect_services(&table, &config);
            if *json {
                println!("{}", serde_json::to_string_pretty(&services)?);
            } else {
                print_inspection(&services);
            }
            Ok(CommandStatus::Success)
        }
        Commands::Lint {
            input,
            config,
            fail_on_error,
            errors_only,
        } => {
            let (table, config) = load(input, config.as_deref())?;
            let mut issues = lint_declarations(&table, &config);
            if *errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);
            if *fail_on_error && has_errors(&issues) {
                return Ok(CommandStatus::LintFailed);
            }
            Ok(CommandStatus::Success)
        }
    }
}
