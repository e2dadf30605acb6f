use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared accessibility of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Internal,
    Protected,
    Private,
}

/// Kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Struct,
    Enum,
    Record,
}

/// Kind of a member method. Only `Ordinary` methods can be handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    Accessor,
    Operator,
}

/// A constant carried by a marker argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Null,
}

impl MarkerValue {
    /// The string payload, if this is a string constant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MarkerValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, MarkerValue::Null)
    }

    /// Render the constant as a C# literal expression, the form it had at the
    /// declaration site. Strings come back quoted and escaped.
    pub fn to_literal(&self) -> String {
        match self {
            MarkerValue::Bool(b) => b.to_string(),
            MarkerValue::Int(i) => i.to_string(),
            MarkerValue::Str(s) => string_literal(s),
            MarkerValue::Null => "null".to_string(),
        }
    }
}

/// Raw text of the constant (no quoting).
impl fmt::Display for MarkerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerValue::Bool(b) => write!(f, "{b}"),
            MarkerValue::Int(i) => write!(f, "{i}"),
            MarkerValue::Str(s) => f.write_str(s),
            MarkerValue::Null => Ok(()),
        }
    }
}

impl From<&str> for MarkerValue {
    fn from(s: &str) -> Self {
        MarkerValue::Str(s.to_string())
    }
}

/// Quote and escape `s` as a regular C# string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// A declarative annotation attached to a type, method or parameter.
///
/// `args` are the constructor-style positional values, `named` the
/// property-style overrides (`Name = "filter"`), in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<MarkerValue>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub named: IndexMap<String, MarkerValue>,
}

impl Marker {
    pub fn new(type_name: impl Into<String>) -> Self {
        Marker {
            type_name: type_name.into(),
            args: Vec::new(),
            named: IndexMap::new(),
        }
    }

    pub fn with_arg(mut self, value: impl Into<MarkerValue>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn with_named(mut self, key: impl Into<String>, value: impl Into<MarkerValue>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    /// First positional argument, ignoring an explicit `null`.
    pub fn first_arg(&self) -> Option<&MarkerValue> {
        self.args.first().filter(|v| !v.is_null())
    }

    pub fn named_arg(&self, key: &str) -> Option<&MarkerValue> {
        self.named.get(key)
    }
}

/// Reference to a type as it appears in a signature.
///
/// A plain string is taken verbatim (`int`, `string`, or an already
/// qualified name). The structured form is rendered fully qualified with the
/// `global::` alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    Named {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
        name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<TypeRef>,
    },
    Verbatim(String),
}

impl TypeRef {
    pub fn verbatim(s: impl Into<String>) -> Self {
        TypeRef::Verbatim(s.into())
    }

    pub fn named(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef::Named {
            namespace: Some(namespace.into()),
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(self, type_args: Vec<TypeRef>) -> Self {
        match self {
            TypeRef::Named {
                namespace, name, ..
            } => TypeRef::Named {
                namespace,
                name,
                args: type_args,
            },
            verbatim => verbatim,
        }
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::Verbatim("void".to_string())
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Verbatim(s) => f.write_str(s),
            TypeRef::Named {
                namespace,
                name,
                args,
            } => {
                f.write_str("global::")?;
                if let Some(ns) = namespace.as_deref().filter(|ns| !ns.is_empty()) {
                    write!(f, "{ns}.")?;
                }
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub kind: MethodKind,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub returns: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParamDecl>,
}

impl MethodDecl {
    /// Public ordinary methods are the only handler candidates.
    pub fn is_handler_candidate(&self) -> bool {
        self.kind == MethodKind::Ordinary && self.visibility == Visibility::Public
    }
}

/// One type declaration as seen by the host front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub visibility: Visibility,
    /// Metadata name of the direct base type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodDecl>,
}

impl TypeDecl {
    /// `Namespace.Name`, or the bare name in the global namespace.
    pub fn metadata_name(&self) -> String {
        match self.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            Some(ns) => format!("{ns}.{}", self.name),
            None => self.name.clone(),
        }
    }
}
