use super::binding::resolve_binding;
use super::select::select_services;
use super::types::{Operation, Parameter, ServiceDeclaration};
use super::verb::{resolve_verb, route_argument};
use crate::markers::{MarkerRole, ResolvedMarkers};
use crate::symbols::{MethodDecl, SymbolTable, TypeDecl};
use rayon::prelude::*;

/// Resolve one handler method. `None` when it carries no verb marker.
pub fn build_operation(method: &MethodDecl, markers: &ResolvedMarkers) -> Option<Operation> {
    let resolution = resolve_verb(method, markers)?;
    let parameters = method
        .parameters
        .iter()
        .map(|p| {
            let binding = resolve_binding(p, resolution.route.as_ref(), markers);
            Parameter {
                name: p.name.clone(),
                type_name: p.ty.to_string(),
                binding: binding.kind,
                override_name: binding.override_name,
            }
        })
        .collect();

    Some(Operation {
        name: method.name.clone(),
        verb: resolution.verb,
        route: resolution.route,
        return_type: method.returns.to_string(),
        parameters,
    })
}

/// Resolve a selected declaration into a [`ServiceDeclaration`].
///
/// Public ordinary methods are visited in declaration order; those without a
/// verb marker are recorded in `dropped` and produce no operation.
pub fn build_service(decl: &TypeDecl, markers: &ResolvedMarkers) -> ServiceDeclaration {
    let base_route = markers
        .find(MarkerRole::Route, &decl.markers)
        .and_then(route_argument);

    let mut operations = Vec::new();
    let mut dropped = Vec::new();
    for method in decl.methods.iter().filter(|m| m.is_handler_candidate()) {
        match build_operation(method, markers) {
            Some(op) => {
                tracing::debug!(
                    service = %decl.name,
                    operation = %op.name,
                    verb = %op.verb,
                    route = op.route.as_ref().map(|r| r.as_str()).unwrap_or(""),
                    "resolved operation"
                );
                operations.push(op);
            }
            None => {
                tracing::debug!(
                    service = %decl.name,
                    method = %method.name,
                    "dropping handler without a verb marker"
                );
                dropped.push(method.name.clone());
            }
        }
    }

    ServiceDeclaration {
        name: decl.name.clone(),
        namespace: decl.namespace.clone().filter(|ns| !ns.is_empty()),
        base_route,
        operations,
        dropped,
    }
}

/// Select the service declarations in `table` and resolve each of them.
///
/// Declarations are independent, so with `parallel` they are resolved on the
/// rayon pool. The result keeps discovery order either way.
pub fn build_services<T: SymbolTable + ?Sized>(
    table: &T,
    markers: &ResolvedMarkers,
    suffix: &str,
    parallel: bool,
) -> Vec<ServiceDeclaration> {
    let selected = select_services(table, markers, suffix);
    tracing::debug!(count = selected.len(), parallel, "selected service declarations");
    if parallel {
        selected
            .par_iter()
            .map(|decl| build_service(decl, markers))
            .collect()
    } else {
        selected
            .iter()
            .map(|decl| build_service(decl, markers))
            .collect()
    }
}
