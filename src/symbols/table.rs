use super::types::TypeDecl;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Read-only view of a static declaration graph.
///
/// Any compiler front-end can feed the generator by implementing this trait:
/// it only needs to enumerate the source declarations in discovery order and
/// look types up by metadata name (`Namespace.Name`), including types that
/// come from referenced libraries.
pub trait SymbolTable: Sync {
    /// Source declarations, in discovery order.
    fn source_types(&self) -> Box<dyn Iterator<Item = &TypeDecl> + '_>;

    /// Look up a source or referenced type by metadata name.
    fn type_by_metadata_name(&self, name: &str) -> Option<&TypeDecl>;

    /// Whether `decl` derives, directly or transitively, from the type named
    /// `base`. The declaration itself does not count. Walks the base chain
    /// through the table and stops at the first type the table cannot see.
    fn inherits_from(&self, decl: &TypeDecl, base: &str) -> bool {
        let mut seen = HashSet::new();
        let mut next = decl.base.as_deref();
        while let Some(name) = next {
            if name == base {
                return true;
            }
            if !seen.insert(name) {
                return false;
            }
            next = self
                .type_by_metadata_name(name)
                .and_then(|t| t.base.as_deref());
        }
        false
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Source(usize),
    Reference(usize),
}

/// In-memory [`SymbolTable`] built from a declaration snapshot.
///
/// `references` are types visible from referenced libraries (base classes,
/// marker types); `declarations` are the source types, kept in discovery
/// order. A source declaration shadows a reference with the same name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "SnapshotFile", into = "SnapshotFile")]
pub struct DeclarationSet {
    references: Vec<TypeDecl>,
    declarations: Vec<TypeDecl>,
    index: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    references: Vec<TypeDecl>,
    #[serde(default)]
    declarations: Vec<TypeDecl>,
}

impl From<SnapshotFile> for DeclarationSet {
    fn from(file: SnapshotFile) -> Self {
        DeclarationSet::new(file.references, file.declarations)
    }
}

impl From<DeclarationSet> for SnapshotFile {
    fn from(set: DeclarationSet) -> Self {
        SnapshotFile {
            references: set.references,
            declarations: set.declarations,
        }
    }
}

impl DeclarationSet {
    pub fn new(references: Vec<TypeDecl>, declarations: Vec<TypeDecl>) -> Self {
        let mut index = HashMap::with_capacity(references.len() + declarations.len());
        for (i, t) in references.iter().enumerate() {
            index.insert(t.metadata_name(), Slot::Reference(i));
        }
        for (i, t) in declarations.iter().enumerate() {
            index.insert(t.metadata_name(), Slot::Source(i));
        }
        DeclarationSet {
            references,
            declarations,
            index,
        }
    }

    pub fn declarations(&self) -> &[TypeDecl] {
        &self.declarations
    }

    pub fn references(&self) -> &[TypeDecl] {
        &self.references
    }
}

impl SymbolTable for DeclarationSet {
    fn source_types(&self) -> Box<dyn Iterator<Item = &TypeDecl> + '_> {
        Box::new(self.declarations.iter())
    }

    fn type_by_metadata_name(&self, name: &str) -> Option<&TypeDecl> {
        match self.index.get(name)? {
            Slot::Source(i) => self.declarations.get(*i),
            Slot::Reference(i) => self.references.get(*i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(ns: &str, name: &str, base: Option<&str>) -> TypeDecl {
        TypeDecl {
            namespace: Some(ns.to_string()),
            name: name.to_string(),
            kind: Default::default(),
            visibility: Default::default(),
            base: base.map(str::to_string),
            markers: vec![],
            methods: vec![],
        }
    }

    #[test]
    fn test_transitive_inheritance() {
        let set = DeclarationSet::new(
            vec![
                decl("Mvc", "ControllerBase", None),
                decl("Mvc", "Controller", Some("Mvc.ControllerBase")),
            ],
            vec![decl("App", "HomeController", Some("Mvc.Controller"))],
        );
        let home = &set.declarations()[0];
        assert!(set.inherits_from(home, "Mvc.ControllerBase"));
        assert!(set.inherits_from(home, "Mvc.Controller"));
        assert!(!set.inherits_from(home, "App.HomeController"));
    }

    #[test]
    fn test_inheritance_stops_at_unknown_type() {
        let set = DeclarationSet::new(
            vec![],
            vec![decl("App", "HomeController", Some("Mvc.Controller"))],
        );
        let home = &set.declarations()[0];
        assert!(!set.inherits_from(home, "Mvc.ControllerBase"));
    }

    #[test]
    fn test_inheritance_cycle_terminates() {
        let set = DeclarationSet::new(
            vec![],
            vec![
                decl("App", "A", Some("App.B")),
                decl("App", "B", Some("App.A")),
            ],
        );
        assert!(!set.inherits_from(&set.declarations()[0], "Mvc.ControllerBase"));
    }

    #[test]
    fn test_source_shadows_reference() {
        let mut shadow = decl("Mvc", "Controller", None);
        shadow.visibility = crate::symbols::Visibility::Public;
        let set = DeclarationSet::new(vec![decl("Mvc", "Controller", None)], vec![shadow]);
        let found = set.type_by_metadata_name("Mvc.Controller").unwrap();
        assert_eq!(found.visibility, crate::symbols::Visibility::Public);
    }
}
