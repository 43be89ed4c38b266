//! Module: fluent
//! Responsibility: answer host naming callbacks with the configured strategy.
//! Does not own: the naming rules themselves, which live in the core crate.
//! Boundary: one instance per metadata build; `reset` before reusing it.

use crate::{
    Error,
    implicit::{COLLECTION_ELEMENT_COLUMN, ImplicitNamingStrategy, JpaCompliantNamingStrategy},
    overrides::NameOverrides,
    source::{
        BasicColumnNameSource, EntityNaming, ForeignKeyNameSource, Identifier,
        JoinColumnNameSource, JoinTableNameSource, UniqueKeyNameSource,
    },
};
use fluent_naming_config::{NamingConfig, load_options};
use fluent_naming_core::{
    join_table::JoinTableNames, options::StrategyOptions, strategy::NamingStrategy,
};
use std::{collections::HashMap, path::Path};
use tracing::{debug, info};

///
/// FluentNamingStrategy
///
/// Adapter between the host's implicit-naming callbacks and `NamingStrategy`.
/// Holds the join-table registry for the current build, so callbacks for
/// different associations between the same entities get distinct tables.
///

#[derive(Debug, Default)]
pub struct FluentNamingStrategy {
    naming: NamingStrategy,
    overrides: NameOverrides,
    join_tables: JoinTableNames,
    fallback: JpaCompliantNamingStrategy,
}

impl FluentNamingStrategy {
    #[must_use]
    pub fn new(options: StrategyOptions) -> Self {
        info!(
            table_prefix = ?options.table_prefix(),
            column_prefix = ?options.column_prefix(),
            max_length = options.max_length(),
            "naming strategy configured"
        );

        Self {
            naming: NamingStrategy::new(options),
            ..Self::default()
        }
    }

    /// Build from a parsed `[naming]` table and the host's properties.
    pub fn from_config(
        config: &NamingConfig,
        host_properties: &HashMap<String, String>,
    ) -> Result<Self, Error> {
        Ok(Self::new(config.to_options_with(host_properties)?))
    }

    /// Build from a configuration file and the host's properties.
    pub fn from_config_file(
        path: impl AsRef<Path>,
        host_properties: &HashMap<String, String>,
    ) -> Result<Self, Error> {
        Ok(Self::new(load_options(path, host_properties)?))
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: NameOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    #[must_use]
    pub const fn naming(&self) -> &NamingStrategy {
        &self.naming
    }

    #[must_use]
    pub const fn overrides(&self) -> &NameOverrides {
        &self.overrides
    }

    #[must_use]
    pub const fn join_tables(&self) -> &JoinTableNames {
        &self.join_tables
    }

    /// Forget every join-table name issued so far.
    pub fn reset(&self) {
        debug!(issued = self.join_tables.len(), "resetting join table names");
        self.join_tables.clear();
    }

    fn embedded_column_name(&self, source: &BasicColumnNameSource, parent: &str) -> String {
        let property = source.attribute_path.property();

        match self
            .overrides
            .embedded_prefix(source.entity.unqualified(), parent)
        {
            Some(prefix) => self
                .naming
                .embedded_property_to_column_name(prefix, property, true),
            None => self
                .naming
                .embedded_property_to_column_name(parent, property, false),
        }
    }
}

impl ImplicitNamingStrategy for FluentNamingStrategy {
    fn determine_primary_table_name(&self, entity: &EntityNaming) -> Identifier {
        Identifier::to_identifier(self.naming.class_to_table_name(entity.unqualified()))
    }

    fn determine_basic_column_name(&self, source: &BasicColumnNameSource) -> Identifier {
        if source.collection_element {
            return Identifier::to_identifier(COLLECTION_ELEMENT_COLUMN);
        }

        let path = &source.attribute_path;
        let name = match path.parent() {
            Some(parent) if source.component => {
                self.embedded_column_name(source, parent.property())
            }
            _ => self.naming.property_to_column_name(path.property()),
        };

        Identifier::to_identifier(name)
    }

    fn determine_join_column_name(&self, source: &JoinColumnNameSource) -> Identifier {
        let property = source
            .attribute_path
            .as_ref()
            .map(|path| path.property());

        Identifier::to_identifier(
            self.naming
                .foreign_key_column_name(property, source.entity.unqualified()),
        )
    }

    fn determine_join_table_name(&self, source: &JoinTableNameSource) -> Identifier {
        let property = source
            .owning_attribute_path
            .as_ref()
            .map(|path| path.property());

        Identifier::to_identifier(self.naming.unique_join_table_name(
            &self.join_tables,
            source.owning_entity.unqualified(),
            source.non_owning_entity.unqualified(),
            property,
        ))
    }

    fn determine_foreign_key_name(&self, source: &ForeignKeyNameSource) -> Identifier {
        match source.single_column() {
            Some(column) => Identifier::to_identifier(
                self.naming
                    .foreign_key_name(source.table_name.text(), column.text()),
            ),
            None => {
                debug!(
                    table = %source.table_name,
                    columns = source.column_names.len(),
                    "delegating multi-column foreign key name"
                );
                self.fallback.determine_foreign_key_name(source)
            }
        }
    }

    fn determine_unique_key_name(&self, source: &UniqueKeyNameSource) -> Identifier {
        match source.single_column() {
            Some(column) => Identifier::to_identifier(
                self.naming
                    .unique_key_name(source.table_name.text(), column.text()),
            ),
            None => {
                debug!(
                    table = %source.table_name,
                    columns = source.column_names.len(),
                    "delegating multi-column unique key name"
                );
                self.fallback.determine_unique_key_name(source)
            }
        }
    }
}
