//! # Declaration Linter
//!
//! Reports markers the generator will ignore, settle by precedence, or fail
//! to see. Linting never changes what is generated.
//!
//! ## Checks Performed
//!
//! | kind | severity | condition |
//! |------|----------|-----------|
//! | `unresolved_marker` | Error | a catalog entry is not visible in the snapshot |
//! | `ambiguous_verb` | Warning | handler carries more than one verb marker |
//! | `ambiguous_binding` | Warning | parameter carries more than one binding marker |
//! | `unmapped_handler` | Info | public method without a verb marker (dropped) |
//! | `unmatched_route_override` | Warning | path marker `Name` missing from the route |
//! | `unbound_placeholder` | Warning | route placeholder bound to no parameter |
//! | `header_without_name` | Info | header marker without `Name` |
//! | `invalid_placeholder` | Warning | placeholder text is not a plain identifier |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ifacegen::linter::{lint_declarations, print_lint_issues};
//!
//! let issues = lint_declarations(&table, &config);
//! print_lint_issues(&issues);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::config::GeneratorConfig;
use crate::markers::{MarkerRole, ResolvedMarkers};
use crate::resolve::{
    build_operation, resolve_binding, select_services, verb_candidates,
    BindingKind, Operation, NAME_ARGUMENT,
};
use crate::symbols::{MethodDecl, SymbolTable, TypeDecl};

#[cfg(test)]
mod tests;

#[allow(clippy::expect_used)]
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    /// Generation is missing information it needs
    Error,
    /// Something is silently ignored or settled by precedence
    Warning,
    /// Expected behavior worth knowing about
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => f.write_str("error"),
            LintSeverity::Warning => f.write_str("warning"),
            LintSeverity::Info => f.write_str("info"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LintIssue {
    /// Where the issue occurred (e.g. `EmployeesController.GetEmployee(id)`)
    pub location: String,
    pub severity: LintSeverity,
    /// Check that produced the issue (e.g. `ambiguous_verb`)
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint every service declaration `generate` would pick up from `table`.
pub fn lint_declarations<T: SymbolTable + ?Sized>(
    table: &T,
    config: &GeneratorConfig,
) -> Vec<LintIssue> {
    let markers = config.markers.resolve(table);
    let mut issues: Vec<LintIssue> = markers
        .issues()
        .iter()
        .map(|issue| {
            LintIssue::new("config:markers", LintSeverity::Error, "unresolved_marker", issue.to_string())
                .with_suggestion("add the marker type to the snapshot's references or fix markers.* in ifacegen.toml")
        })
        .collect();

    for decl in select_services(table, &markers, &config.service_suffix) {
        lint_service(&mut issues, decl, &markers);
    }
    issues
}

fn lint_service(issues: &mut Vec<LintIssue>, decl: &TypeDecl, markers: &ResolvedMarkers) {
    for method in decl.methods.iter().filter(|m| m.is_handler_candidate()) {
        let location = format!("{}.{}", decl.name, method.name);
        let verbs = verb_candidates(method, markers);
        if verbs.len() > 1 {
            let listed: Vec<&str> = verbs.iter().map(|v| v.as_str()).collect();
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Warning,
                "ambiguous_verb",
                format!(
                    "handler carries {} verb markers; only {} is honored",
                    listed.join(", "),
                    verbs[0]
                ),
            ));
        }
        match build_operation(method, markers) {
            Some(op) => lint_operation(issues, &location, method, &op, markers),
            None => issues.push(LintIssue::new(
                &location,
                LintSeverity::Info,
                "unmapped_handler",
                "public method has no verb marker and is left out of the interface",
            )),
        }
    }
}

fn lint_operation(
    issues: &mut Vec<LintIssue>,
    location: &str,
    method: &MethodDecl,
    op: &Operation,
    markers: &ResolvedMarkers,
) {
    let route = op.route.as_ref();
    let mut bound: HashSet<String> = HashSet::new();

    for param in &method.parameters {
        let at = format!("{location}({})", param.name);
        let binding = resolve_binding(param, route, markers);

        let marker_roles = [
            MarkerRole::Body,
            MarkerRole::Header,
            MarkerRole::Query,
            MarkerRole::Path,
        ];
        let attached = marker_roles
            .iter()
            .filter(|role| markers.has(**role, &param.markers))
            .count();
        if attached > 1 {
            issues.push(LintIssue::new(
                &at,
                LintSeverity::Warning,
                "ambiguous_binding",
                format!("parameter carries {attached} binding markers; bound as {}", binding.kind),
            ));
        }

        if binding.kind == BindingKind::Header && binding.override_name.is_none() {
            issues.push(LintIssue::new(
                &at,
                LintSeverity::Info,
                "header_without_name",
                format!("header marker has no Name; the header is sent as \"{}\"", param.name),
            ));
        }

        let path_name = markers
            .find(MarkerRole::Path, &param.markers)
            .and_then(|m| m.named_arg(NAME_ARGUMENT))
            .map(|v| v.to_string());
        if let Some(name) = &path_name {
            if !route.is_some_and(|r| r.contains_placeholder(name)) {
                issues.push(LintIssue::new(
                    &at,
                    LintSeverity::Warning,
                    "unmatched_route_override",
                    format!(
                        "path marker names {{{name}}} but the route is `{}`; bound as {}",
                        route.map(|r| r.as_str()).unwrap_or(""),
                        binding.kind
                    ),
                ));
            }
        }

        if binding.kind == BindingKind::Path {
            bound.insert(param.name.clone());
            if let Some(name) = path_name {
                bound.insert(name);
            }
        }
    }

    let Some(route) = route else { return };
    for placeholder in route.placeholders() {
        if !IDENTIFIER.is_match(placeholder) {
            issues.push(
                LintIssue::new(
                    location,
                    LintSeverity::Warning,
                    "invalid_placeholder",
                    format!("placeholder {{{placeholder}}} is not a plain identifier and binds by exact text only"),
                )
                .with_suggestion("name the parameter after the placeholder or drop the constraint"),
            );
        }
        if !bound.contains(placeholder) {
            issues.push(LintIssue::new(
                location,
                LintSeverity::Warning,
                "unbound_placeholder",
                format!("route placeholder {{{placeholder}}} is not bound to any parameter"),
            ));
        }
    }
}

pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let count = |s: LintSeverity| issues.iter().filter(|i| i.severity == s).count();
    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    );

    let groups = [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info:"),
    ];
    for (severity, heading) in groups {
        let group: Vec<_> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        println!("{heading}");
        for issue in group {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {suggestion}");
            }
        }
        println!();
    }
}
