use askama::Template;

/// One rendered method signature of a client interface.
#[derive(Debug, Clone)]
pub struct MethodSignature {
    /// Verb marker, e.g. `[Get("{id}")]`
    pub verb_marker: String,
    /// Fully qualified return type
    pub return_type: String,
    /// Method name
    pub name: String,
    /// Comma-separated parameter list, binding markers included
    pub parameters: String,
}

/// Template data for one client interface artifact.
///
/// Without a namespace the interface is emitted at file scope and nothing is
/// indented.
#[derive(Template)]
#[template(path = "interface.cs.txt", escape = "none")]
pub struct InterfaceTemplateData {
    /// Namespace imported at the top of the file
    pub using_namespace: String,
    /// Namespace the interface lives in
    pub namespace: Option<String>,
    /// `[BasePath(...)]` marker, if the service carries a route
    pub base_path_marker: Option<String>,
    /// Interface name (prefix + service name)
    pub interface_name: String,
    /// Signatures in handler declaration order
    pub methods: Vec<MethodSignature>,
    /// Indentation of the interface block
    pub indent: &'static str,
}

impl InterfaceTemplateData {
    pub fn new(
        using_namespace: String,
        namespace: Option<String>,
        base_path_marker: Option<String>,
        interface_name: String,
        methods: Vec<MethodSignature>,
    ) -> Self {
        let indent = if namespace.is_some() { "\t" } else { "" };
        InterfaceTemplateData {
            using_namespace,
            namespace,
            base_path_marker,
            interface_name,
            methods,
            indent,
        }
    }
}
