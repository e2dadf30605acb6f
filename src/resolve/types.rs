use super::template::RouteTemplate;
use serde::Serialize;
use std::fmt;

/// HTTP verb of a handler, in marker priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpVerb {
    /// When a handler carries several verb markers, the earliest entry wins.
    pub const PRIORITY: [HttpVerb; 7] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Delete,
        HttpVerb::Patch,
        HttpVerb::Options,
        HttpVerb::Head,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Options => "OPTIONS",
            HttpVerb::Head => "HEAD",
        }
    }

    /// Name of the client-side verb marker (`[Get]`, `[Post]`, ...).
    pub fn marker_name(&self) -> &'static str {
        match self {
            HttpVerb::Get => "Get",
            HttpVerb::Post => "Post",
            HttpVerb::Put => "Put",
            HttpVerb::Delete => "Delete",
            HttpVerb::Patch => "Patch",
            HttpVerb::Options => "Options",
            HttpVerb::Head => "Head",
        }
    }

    pub fn as_method(&self) -> http::Method {
        match self {
            HttpVerb::Get => http::Method::GET,
            HttpVerb::Post => http::Method::POST,
            HttpVerb::Put => http::Method::PUT,
            HttpVerb::Delete => http::Method::DELETE,
            HttpVerb::Patch => http::Method::PATCH,
            HttpVerb::Options => http::Method::OPTIONS,
            HttpVerb::Head => http::Method::HEAD,
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parameter's value comes from on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BindingKind {
    Body,
    Header,
    Query,
    Path,
    /// No marker is emitted; the client library's default applies.
    Unclassified,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKind::Body => write!(f, "Body"),
            BindingKind::Header => write!(f, "Header"),
            BindingKind::Query => write!(f, "Query"),
            BindingKind::Path => write!(f, "Path"),
            BindingKind::Unclassified => write!(f, "Unclassified"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    /// Fully qualified type name, as it is emitted.
    pub type_name: String,
    pub binding: BindingKind,
    /// Explicit wire name for Header/Query/Path, kept as the literal
    /// expression written at the declaration site (e.g. `"filter"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub name: String,
    pub verb: HttpVerb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteTemplate>,
    /// Fully qualified, nullability-oblivious return type.
    pub return_type: String,
    pub parameters: Vec<Parameter>,
}

/// A qualifying service declaration with its handler methods resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDeclaration {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Template of the service-level route marker, before placeholder substitution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_route: Option<String>,
    pub operations: Vec<Operation>,
    /// Public ordinary methods that carried no verb marker.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<String>,
}
