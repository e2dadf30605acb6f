use crate::markers::ResolvedMarkers;
use crate::symbols::{SymbolTable, TypeDecl, TypeKind, Visibility};

/// Pick the service declarations out of the source types, in discovery order.
///
/// A declaration qualifies when it is a public class, its simple name ends
/// with `suffix`, and it derives (transitively) from the resolved service
/// base type. Suffix-matching types that fail the derivation check are
/// skipped quietly. If the base type itself did not resolve, nothing
/// qualifies; that condition is already reported by the marker catalog.
pub fn select_services<'t, T: SymbolTable + ?Sized>(
    table: &'t T,
    markers: &ResolvedMarkers,
    suffix: &str,
) -> Vec<&'t TypeDecl> {
    let Some(base) = markers.service_base() else {
        tracing::debug!("service base type unresolved; selecting no declarations");
        return Vec::new();
    };

    table
        .source_types()
        .filter(|decl| {
            decl.kind == TypeKind::Class
                && decl.visibility == Visibility::Public
                && decl.name.ends_with(suffix)
        })
        .filter(|decl| {
            let derives = table.inherits_from(decl, base);
            if !derives {
                tracing::debug!(
                    declaration = %decl.metadata_name(),
                    base,
                    "skipping declaration that does not derive from the service base"
                );
            }
            derives
        })
        .collect()
}
