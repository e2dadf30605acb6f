//! Parameter binding classification.
//!
//! A parameter is classified by walking [`BINDING_RULES`] in order and
//! stopping at the first rule that matches:
//!
//! 1. body marker → `Body`
//! 2. header marker → `Header`, with the marker's `Name` if given
//! 3. query marker → `Query`, with the marker's `Name` if given
//! 4. route template holds `{name}` → `Path`; otherwise a path marker whose
//!    `Name` appears as `{Name}` in the template → `Path` with that name
//! 5. nothing matched → `Unclassified`
//!
//! The result depends only on the parameter's markers, its name and the
//! operation's route template.

use super::template::RouteTemplate;
use super::types::BindingKind;
use crate::markers::{MarkerRole, ResolvedMarkers};
use crate::symbols::{Marker, ParamDecl};

/// Named argument that carries an explicit wire name.
pub const NAME_ARGUMENT: &str = "Name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub kind: BindingKind,
    /// Literal expression of the explicit wire name, e.g. `"filter"`.
    pub override_name: Option<String>,
}

impl Binding {
    fn new(kind: BindingKind, override_name: Option<String>) -> Self {
        Binding {
            kind,
            override_name,
        }
    }

    pub fn unclassified() -> Self {
        Binding::new(BindingKind::Unclassified, None)
    }
}

/// Inputs a binding rule may look at.
pub struct BindingContext<'a> {
    pub parameter: &'a ParamDecl,
    pub route: Option<&'a RouteTemplate>,
    pub markers: &'a ResolvedMarkers,
}

impl BindingContext<'_> {
    fn marker(&self, role: MarkerRole) -> Option<&Marker> {
        self.markers.find(role, &self.parameter.markers)
    }
}

pub type BindingRule = fn(&BindingContext<'_>) -> Option<Binding>;

/// Classification rules, highest precedence first.
pub const BINDING_RULES: [(BindingKind, BindingRule); 4] = [
    (BindingKind::Body, body_rule),
    (BindingKind::Header, header_rule),
    (BindingKind::Query, query_rule),
    (BindingKind::Path, path_rule),
];

fn name_literal(marker: &Marker) -> Option<String> {
    marker.named_arg(NAME_ARGUMENT).map(|v| v.to_literal())
}

fn body_rule(ctx: &BindingContext<'_>) -> Option<Binding> {
    ctx.marker(MarkerRole::Body)
        .map(|_| Binding::new(BindingKind::Body, None))
}

fn header_rule(ctx: &BindingContext<'_>) -> Option<Binding> {
    ctx.marker(MarkerRole::Header)
        .map(|m| Binding::new(BindingKind::Header, name_literal(m)))
}

fn query_rule(ctx: &BindingContext<'_>) -> Option<Binding> {
    ctx.marker(MarkerRole::Query)
        .map(|m| Binding::new(BindingKind::Query, name_literal(m)))
}

fn path_rule(ctx: &BindingContext<'_>) -> Option<Binding> {
    let route = ctx.route?;
    if route.contains_placeholder(&ctx.parameter.name) {
        return Some(Binding::new(BindingKind::Path, None));
    }
    let name = ctx.marker(MarkerRole::Path)?.named_arg(NAME_ARGUMENT)?;
    route
        .contains_placeholder(&name.to_string())
        .then(|| Binding::new(BindingKind::Path, Some(name.to_literal())))
}

/// Classify one parameter of an operation whose route template is `route`.
pub fn resolve_binding(
    parameter: &ParamDecl,
    route: Option<&RouteTemplate>,
    markers: &ResolvedMarkers,
) -> Binding {
    let ctx = BindingContext {
        parameter,
        route,
        markers,
    };
    BINDING_RULES
        .iter()
        .find_map(|(_, rule)| rule(&ctx))
        .unwrap_or_else(Binding::unclassified)
}

/// Every rule that would match the parameter, in precedence order. The first
/// entry, if any, is what [`resolve_binding`] picks.
pub fn binding_candidates(
    parameter: &ParamDecl,
    route: Option<&RouteTemplate>,
    markers: &ResolvedMarkers,
) -> Vec<BindingKind> {
    let ctx = BindingContext {
        parameter,
        route,
        markers,
    };
    BINDING_RULES
        .iter()
        .filter(|(_, rule)| rule(&ctx).is_some())
        .map(|(kind, _)| *kind)
        .collect()
}
