//! Well-known marker types and their resolution against a symbol table.
//!
//! A [`MarkerCatalog`] names the metadata types that give a declaration its
//! meaning: the base type every service derives from, the service route
//! marker, the seven verb markers and the four binding markers. Resolving the
//! catalog against a [`SymbolTable`] yields [`ResolvedMarkers`]; an entry the
//! table cannot see stays unresolved, matches nothing, and is reported as a
//! [`ConfigError`].

use crate::error::ConfigError;
use crate::resolve::HttpVerb;
use crate::symbols::{Marker, SymbolTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a marker means to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    ServiceBase,
    Route,
    Verb(HttpVerb),
    Body,
    Header,
    Query,
    Path,
}

impl fmt::Display for MarkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerRole::ServiceBase => f.write_str("service base"),
            MarkerRole::Route => f.write_str("route"),
            MarkerRole::Verb(verb) => write!(f, "HTTP {verb}"),
            MarkerRole::Body => f.write_str("body"),
            MarkerRole::Header => f.write_str("header"),
            MarkerRole::Query => f.write_str("query"),
            MarkerRole::Path => f.write_str("path"),
        }
    }
}

/// Metadata names of the marker types. Defaults follow ASP.NET Core MVC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerCatalog {
    pub service_base: String,
    pub route: String,
    pub http_get: String,
    pub http_post: String,
    pub http_put: String,
    pub http_delete: String,
    pub http_patch: String,
    pub http_options: String,
    pub http_head: String,
    pub from_body: String,
    pub from_header: String,
    pub from_query: String,
    pub from_route: String,
}

const MVC: &str = "Microsoft.AspNetCore.Mvc";

impl Default for MarkerCatalog {
    fn default() -> Self {
        let mvc = |name: &str| format!("{MVC}.{name}");
        MarkerCatalog {
            service_base: mvc("ControllerBase"),
            route: mvc("RouteAttribute"),
            http_get: mvc("HttpGetAttribute"),
            http_post: mvc("HttpPostAttribute"),
            http_put: mvc("HttpPutAttribute"),
            http_delete: mvc("HttpDeleteAttribute"),
            http_patch: mvc("HttpPatchAttribute"),
            http_options: mvc("HttpOptionsAttribute"),
            http_head: mvc("HttpHeadAttribute"),
            from_body: mvc("FromBodyAttribute"),
            from_header: mvc("FromHeaderAttribute"),
            from_query: mvc("FromQueryAttribute"),
            from_route: mvc("FromRouteAttribute"),
        }
    }
}

impl MarkerCatalog {
    /// Metadata name configured for `role`.
    pub fn name_for(&self, role: MarkerRole) -> &str {
        match role {
            MarkerRole::ServiceBase => &self.service_base,
            MarkerRole::Route => &self.route,
            MarkerRole::Verb(HttpVerb::Get) => &self.http_get,
            MarkerRole::Verb(HttpVerb::Post) => &self.http_post,
            MarkerRole::Verb(HttpVerb::Put) => &self.http_put,
            MarkerRole::Verb(HttpVerb::Delete) => &self.http_delete,
            MarkerRole::Verb(HttpVerb::Patch) => &self.http_patch,
            MarkerRole::Verb(HttpVerb::Options) => &self.http_options,
            MarkerRole::Verb(HttpVerb::Head) => &self.http_head,
            MarkerRole::Body => &self.from_body,
            MarkerRole::Header => &self.from_header,
            MarkerRole::Query => &self.from_query,
            MarkerRole::Path => &self.from_route,
        }
    }

    /// Every role, service base first.
    pub fn roles() -> impl Iterator<Item = MarkerRole> {
        [MarkerRole::ServiceBase, MarkerRole::Route]
            .into_iter()
            .chain(HttpVerb::PRIORITY.into_iter().map(MarkerRole::Verb))
            .chain([
                MarkerRole::Body,
                MarkerRole::Header,
                MarkerRole::Query,
                MarkerRole::Path,
            ])
    }

    /// Resolve every entry against `table`.
    pub fn resolve<T: SymbolTable + ?Sized>(&self, table: &T) -> ResolvedMarkers {
        let mut entries = Vec::with_capacity(13);
        let mut issues = Vec::new();
        for role in Self::roles() {
            let name = self.name_for(role);
            let resolved = table.type_by_metadata_name(name).map(|t| t.metadata_name());
            if resolved.is_none() {
                let issue = match role {
                    MarkerRole::ServiceBase => ConfigError::UnresolvedBaseType {
                        name: name.to_string(),
                    },
                    _ => ConfigError::UnresolvedMarker {
                        role,
                        name: name.to_string(),
                    },
                };
                tracing::warn!(%role, marker = name, "{issue}");
                issues.push(issue);
            }
            entries.push((role, resolved));
        }
        ResolvedMarkers { entries, issues }
    }
}

/// Marker catalog after resolution against a symbol table.
#[derive(Debug, Clone)]
pub struct ResolvedMarkers {
    entries: Vec<(MarkerRole, Option<String>)>,
    issues: Vec<ConfigError>,
}

impl ResolvedMarkers {
    /// Resolved metadata name for `role`, `None` when the table could not see it.
    pub fn resolved(&self, role: MarkerRole) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .and_then(|(_, name)| name.as_deref())
    }

    pub fn service_base(&self) -> Option<&str> {
        self.resolved(MarkerRole::ServiceBase)
    }

    /// First marker in `markers` of the given role. Never matches an
    /// unresolved role.
    pub fn find<'m>(&self, role: MarkerRole, markers: &'m [Marker]) -> Option<&'m Marker> {
        let name = self.resolved(role)?;
        markers.iter().find(|m| m.type_name == name)
    }

    pub fn has(&self, role: MarkerRole, markers: &[Marker]) -> bool {
        self.find(role, markers).is_some()
    }

    /// Configuration problems found while resolving.
    pub fn issues(&self) -> &[ConfigError] {
        &self.issues
    }
}
