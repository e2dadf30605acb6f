use super::template::RouteTemplate;
use super::types::HttpVerb;
use crate::markers::{MarkerRole, ResolvedMarkers};
use crate::symbols::{Marker, MethodDecl};

/// Verb and optional route template of one handler method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbResolution {
    pub verb: HttpVerb,
    pub route: Option<RouteTemplate>,
}

/// Route template carried by a verb or route marker: the first positional
/// argument, rendered as raw text.
pub fn route_argument(marker: &Marker) -> Option<String> {
    marker.first_arg().map(|v| v.to_string())
}

/// Pick the verb of a handler method.
///
/// Verb markers are probed in [`HttpVerb::PRIORITY`] order and the first one
/// present wins; any other verb markers on the method are ignored. Returns
/// `None` when the method carries no verb marker, in which case it is not an
/// operation.
pub fn resolve_verb(method: &MethodDecl, markers: &ResolvedMarkers) -> Option<VerbResolution> {
    HttpVerb::PRIORITY.iter().find_map(|&verb| {
        markers
            .find(MarkerRole::Verb(verb), &method.markers)
            .map(|marker| VerbResolution {
                verb,
                route: route_argument(marker).map(RouteTemplate::parse),
            })
    })
}

/// All verb kinds present on a method, in priority order.
pub fn verb_candidates(method: &MethodDecl, markers: &ResolvedMarkers) -> Vec<HttpVerb> {
    HttpVerb::PRIORITY
        .iter()
        .copied()
        .filter(|&verb| markers.has(MarkerRole::Verb(verb), &method.markers))
        .collect()
}
