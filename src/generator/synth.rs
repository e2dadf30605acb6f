//! Interface synthesis: one [`ServiceDeclaration`] in, one artifact out.

use super::templates::{InterfaceTemplateData, MethodSignature};
use crate::config::GeneratorConfig;
use crate::resolve::{BindingKind, Operation, Parameter, ServiceDeclaration};
use crate::symbols::string_literal;
use askama::Template;
use serde::Serialize;

/// Rendered client interface for one service declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceArtifact {
    pub interface_name: String,
    /// `<interface_name><file_suffix>`
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip)]
    pub source: String,
}

/// Service base path: the service route with the controller placeholder
/// replaced by the service name minus its suffix.
///
/// `("EmployeesController", "[controller]")` gives `Employees`.
pub fn derive_base_path(service_name: &str, base_route: &str, config: &GeneratorConfig) -> String {
    let prefix = service_name
        .strip_suffix(config.service_suffix.as_str())
        .unwrap_or(service_name);
    base_route.replace(config.controller_placeholder.as_str(), prefix)
}

pub fn render_verb_marker(op: &Operation) -> String {
    match &op.route {
        Some(route) => format!(
            "[{}({})]",
            op.verb.marker_name(),
            string_literal(route.as_str())
        ),
        None => format!("[{}]", op.verb.marker_name()),
    }
}

/// Binding marker for `param`, `None` for unclassified parameters.
pub fn render_binding_marker(param: &Parameter, config: &GeneratorConfig) -> Option<String> {
    let marker = match param.binding {
        BindingKind::Body => "[Body]".to_string(),
        BindingKind::Header => {
            let name = param
                .override_name
                .clone()
                .unwrap_or_else(|| string_literal(&param.name));
            format!("[Header({name})]")
        }
        BindingKind::Query => {
            let hint = format!("QuerySerializationMethod.{}", config.query_serialization);
            match &param.override_name {
                Some(name) => format!("[Query({name}, {hint})]"),
                None => format!("[Query({hint})]"),
            }
        }
        BindingKind::Path => match &param.override_name {
            Some(name) => format!("[Path({name})]"),
            None => "[Path]".to_string(),
        },
        BindingKind::Unclassified => return None,
    };
    Some(marker)
}

pub fn render_parameter(param: &Parameter, config: &GeneratorConfig) -> String {
    match render_binding_marker(param, config) {
        Some(marker) => format!("{marker} {} {}", param.type_name, param.name),
        None => format!("{} {}", param.type_name, param.name),
    }
}

fn signature(op: &Operation, config: &GeneratorConfig) -> MethodSignature {
    MethodSignature {
        verb_marker: render_verb_marker(op),
        return_type: op.return_type.clone(),
        name: op.name.clone(),
        parameters: op
            .parameters
            .iter()
            .map(|p| render_parameter(p, config))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Render the client interface for `service`.
///
/// The output depends only on `service` and `config`; rendering the same
/// input twice gives byte-identical text.
pub fn synthesize(
    service: &ServiceDeclaration,
    config: &GeneratorConfig,
) -> anyhow::Result<InterfaceArtifact> {
    let interface_name = format!("{}{}", config.interface_prefix, service.name);
    let base_path_marker = service.base_route.as_deref().map(|route| {
        let base = derive_base_path(&service.name, route, config);
        format!("[BasePath({})]", string_literal(&base))
    });

    let data = InterfaceTemplateData::new(
        config.using_namespace.clone(),
        service.namespace.clone(),
        base_path_marker,
        interface_name.clone(),
        service
            .operations
            .iter()
            .map(|op| signature(op, config))
            .collect(),
    );
    let mut source = data.render()?;
    if !source.ends_with('\n') {
        source.push('\n');
    }

    Ok(InterfaceArtifact {
        file_name: format!("{interface_name}{}", config.file_suffix),
        interface_name,
        namespace: service.namespace.clone(),
        source,
    })
}
