use std::collections::HashSet;

use tracing::debug;

use crate::catalog::{EntityCatalog, EntityMetadata};
use crate::error::CleanupError;
use crate::naming::camel_to_snake_case;

/// Where a resolved table name was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Table,
    Entity,
    TypeName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTable {
    pub type_name: String,
    pub name: String,
    pub source: NameSource,
}

/// Resolve the physical table of a single managed type.
///
/// Returns `Ok(None)` for types without a persistence marker. Explicit names are
/// taken verbatim; only names derived from the type identifier are converted.
pub fn resolve_table(metadata: &EntityMetadata) -> Result<Option<ResolvedTable>, CleanupError> {
    if !metadata.is_persistent() {
        return Ok(None);
    }

    let declared_table = metadata
        .table
        .as_ref()
        .map(|t| t.name.as_str())
        .filter(|name| !name.is_empty());
    let declared_entity = metadata
        .entity
        .as_ref()
        .map(|e| e.name.as_str())
        .filter(|name| !name.is_empty());

    let (name, source) = match (declared_table, declared_entity) {
        (Some(table), _) => (table.to_string(), NameSource::Table),
        (None, Some(entity)) => (entity.to_string(), NameSource::Entity),
        (None, None) => (
            camel_to_snake_case(&metadata.type_name),
            NameSource::TypeName,
        ),
    };

    if name.is_empty() {
        return Err(CleanupError::Configuration(
            "persistent type has no type name and no declared table or entity name".to_string(),
        ));
    }

    Ok(Some(ResolvedTable {
        type_name: metadata.type_name.clone(),
        name,
        source,
    }))
}

/// Resolve every persistent type of the catalog, in enumeration order.
///
/// The result holds one entry per distinct table, not one per kept type: when
/// several types map to the same table (shared-table inheritance), only the
/// first type is listed and the rest are logged at debug. The truncation is the
/// same either way since PostgreSQL ignores repeated relations in `TRUNCATE`.
/// A catalog without any persistent type is a configuration error.
pub fn resolve_table_names(catalog: &EntityCatalog) -> Result<Vec<ResolvedTable>, CleanupError> {
    let mut seen = HashSet::new();
    let mut tables = Vec::new();

    for metadata in catalog.managed_types() {
        let Some(resolved) = resolve_table(metadata)? else {
            debug!("Skipping unmarked type {}", metadata.type_name);
            continue;
        };

        if !seen.insert(resolved.name.clone()) {
            debug!(
                "Type {} maps to already listed table {}",
                resolved.type_name, resolved.name
            );
            continue;
        }

        debug!(
            "Resolved table {} for type {} ({:?})",
            resolved.name, resolved.type_name, resolved.source
        );
        tables.push(resolved);
    }

    if tables.is_empty() {
        return Err(CleanupError::Configuration(format!(
            "none of the {} managed types carries a table or entity marker",
            catalog.len()
        )));
    }

    Ok(tables)
}
