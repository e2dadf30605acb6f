#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the declaration linter

use crate::config::GeneratorConfig;
use crate::linter::{has_errors, lint_declarations, LintIssue, LintSeverity};
use crate::resolve::test_support::{method, mvc, param, reference_table};
use crate::symbols::{DeclarationSet, Marker, MethodDecl, TypeDecl, Visibility};

fn controller(methods: Vec<MethodDecl>) -> TypeDecl {
    TypeDecl {
        namespace: Some("App".into()),
        name: "OrdersController".into(),
        kind: Default::default(),
        visibility: Visibility::Public,
        base: Some(mvc("ControllerBase")),
        markers: vec![],
        methods,
    }
}

fn lint(methods: Vec<MethodDecl>) -> Vec<LintIssue> {
    lint_declarations(&reference_table(vec![controller(methods)]), &GeneratorConfig::default())
}

fn kinds<'a>(issues: &'a [LintIssue], kind: &str) -> Vec<&'a LintIssue> {
    issues.iter().filter(|i| i.kind == kind).collect()
}

fn get(route: &str) -> Marker {
    Marker::new(mvc("HttpGetAttribute")).with_arg(route)
}

#[test]
fn test_clean_controller_has_no_issues() {
    let mut m = method("GetOrder", vec![get("{id}")]);
    m.parameters = vec![param("id", vec![])];
    assert!(lint(vec![m]).is_empty());
}

#[test]
fn test_unresolved_marker_is_an_error() {
    let table = DeclarationSet::new(vec![], vec![controller(vec![])]);
    let issues = lint_declarations(&table, &GeneratorConfig::default());
    assert_eq!(kinds(&issues, "unresolved_marker").len(), 13);
    assert!(has_errors(&issues));
}

#[test]
fn test_ambiguous_verb_names_the_honored_verb() {
    let m = method(
        "Save",
        vec![
            Marker::new(mvc("HttpPutAttribute")),
            Marker::new(mvc("HttpPostAttribute")),
        ],
    );
    let issues = lint(vec![m]);
    let found = kinds(&issues, "ambiguous_verb");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, LintSeverity::Warning);
    assert!(found[0].message.contains("only POST is honored"));
    assert_eq!(found[0].location, "OrdersController.Save");
}

#[test]
fn test_unmapped_handler_is_info() {
    let issues = lint(vec![method("Helper", vec![])]);
    let found = kinds(&issues, "unmapped_handler");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, LintSeverity::Info);
    assert!(!has_errors(&issues));
}

#[test]
fn test_ambiguous_binding() {
    let mut m = method("Find", vec![get("search")]);
    m.parameters = vec![param(
        "q",
        vec![
            Marker::new(mvc("FromQueryAttribute")),
            Marker::new(mvc("FromBodyAttribute")),
        ],
    )];
    let issues = lint(vec![m]);
    let found = kinds(&issues, "ambiguous_binding");
    assert_eq!(found.len(), 1);
    assert!(found[0].message.contains("bound as Body"));
    assert_eq!(found[0].location, "OrdersController.Find(q)");
}

#[test]
fn test_header_without_name() {
    let mut m = method("Get", vec![get("")]);
    m.parameters = vec![param("token", vec![Marker::new(mvc("FromHeaderAttribute"))])];
    let issues = lint(vec![m]);
    assert_eq!(kinds(&issues, "header_without_name").len(), 1);
}

#[test]
fn test_unmatched_route_override() {
    let mut m = method("Get", vec![get("{id}")]);
    m.parameters = vec![param(
        "orderId",
        vec![Marker::new(mvc("FromRouteAttribute")).with_named("Name", "key")],
    )];
    let issues = lint(vec![m]);
    assert_eq!(kinds(&issues, "unmatched_route_override").len(), 1);
    assert_eq!(kinds(&issues, "unbound_placeholder").len(), 1);
}

#[test]
fn test_override_binds_placeholder() {
    let mut m = method("Get", vec![get("{key}")]);
    m.parameters = vec![param(
        "orderId",
        vec![Marker::new(mvc("FromRouteAttribute")).with_named("Name", "key")],
    )];
    assert!(lint(vec![m]).is_empty());
}

#[test]
fn test_constrained_placeholder_is_flagged() {
    let mut m = method("Get", vec![get("{id:int}")]);
    m.parameters = vec![param("id", vec![])];
    let issues = lint(vec![m]);
    assert_eq!(kinds(&issues, "invalid_placeholder").len(), 1);
    assert_eq!(kinds(&issues, "unbound_placeholder").len(), 1);
}

#[test]
fn test_non_service_declarations_are_not_linted() {
    let mut decl = controller(vec![method("Helper", vec![])]);
    decl.visibility = Visibility::Internal;
    let issues = lint_declarations(&reference_table(vec![decl]), &GeneratorConfig::default());
    assert!(issues.is_empty());
}
