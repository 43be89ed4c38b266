//! Module: implicit
//! Responsibility: the callback contract a host uses to ask for implicit names,
//! plus the plain JPA-style strategy used as a fallback.
//! Does not own: prefixing, pluralization, or length limits.
//! Boundary: `FluentNamingStrategy` implements the same trait and delegates
//! here for requests it does not handle.

use crate::source::{
    BasicColumnNameSource, EntityNaming, ForeignKeyNameSource, Identifier, JoinColumnNameSource,
    JoinTableNameSource, KeyNameSource, UniqueKeyNameSource,
};
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Column name used for the value of an element collection.
pub const COLLECTION_ELEMENT_COLUMN: &str = "elt";

const HASHED_NAME_LENGTH: usize = 25;
const DEFAULT_REFERENCED_COLUMN: &str = "id";

///
/// ImplicitNamingStrategy
///
/// Invoked by the host once per schema object while it builds metadata.
/// Implementations must be callable from several threads at once.
///

pub trait ImplicitNamingStrategy: Send + Sync {
    fn determine_primary_table_name(&self, entity: &EntityNaming) -> Identifier;

    fn determine_basic_column_name(&self, source: &BasicColumnNameSource) -> Identifier;

    fn determine_join_column_name(&self, source: &JoinColumnNameSource) -> Identifier;

    fn determine_join_table_name(&self, source: &JoinTableNameSource) -> Identifier;

    fn determine_foreign_key_name(&self, source: &ForeignKeyNameSource) -> Identifier;

    fn determine_unique_key_name(&self, source: &UniqueKeyNameSource) -> Identifier;
}

///
/// JpaCompliantNamingStrategy
///
/// Names straight from the model: entity names for tables, property names
/// for columns, and hashed names for constraints.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct JpaCompliantNamingStrategy;

impl ImplicitNamingStrategy for JpaCompliantNamingStrategy {
    fn determine_primary_table_name(&self, entity: &EntityNaming) -> Identifier {
        Identifier::to_identifier(entity.unqualified())
    }

    fn determine_basic_column_name(&self, source: &BasicColumnNameSource) -> Identifier {
        if source.collection_element {
            return Identifier::to_identifier(COLLECTION_ELEMENT_COLUMN);
        }

        Identifier::to_identifier(source.attribute_path.property())
    }

    fn determine_join_column_name(&self, source: &JoinColumnNameSource) -> Identifier {
        let owner = source
            .attribute_path
            .as_ref()
            .map_or_else(|| source.entity.unqualified(), |path| path.property());
        let referenced = source
            .referenced_column
            .as_ref()
            .map_or(DEFAULT_REFERENCED_COLUMN, Identifier::text);

        Identifier::to_identifier(format!("{owner}_{referenced}"))
    }

    fn determine_join_table_name(&self, source: &JoinTableNameSource) -> Identifier {
        Identifier::to_identifier(format!(
            "{}_{}",
            source.owning_entity.unqualified(),
            source.non_owning_entity.unqualified()
        ))
    }

    fn determine_foreign_key_name(&self, source: &ForeignKeyNameSource) -> Identifier {
        Identifier::to_identifier(hashed_name("FK", source))
    }

    fn determine_unique_key_name(&self, source: &UniqueKeyNameSource) -> Identifier {
        Identifier::to_identifier(hashed_name("UK", source))
    }
}

///
/// Stable constraint name derived from the table and its columns.
///
/// The digest covers `table=<name>` followed by `column=<name>` for each
/// column in order, so the same key always hashes the same way.
///
#[must_use]
pub fn hashed_name(prefix: &str, source: &KeyNameSource) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"table=");
    hasher.update(source.table_name.text().as_bytes());
    for column in &source.column_names {
        hasher.update(b"column=");
        hasher.update(column.text().as_bytes());
    }

    let mut name = String::with_capacity(prefix.len() + HASHED_NAME_LENGTH);
    name.push_str(prefix);
    for byte in hasher.finalize() {
        let _ = write!(name, "{byte:02x}");
    }
    name.truncate(prefix.len() + HASHED_NAME_LENGTH);

    name
}
