//! The naming strategy: entity and property names in, schema identifiers out.

use crate::{
    ident::{NamePart, NameParts, pluralize, to_snake_case},
    join_table::{JoinTableNames, TableDescription},
    options::StrategyOptions,
};

const JOIN_KEY_SUFFIX: &str = "id";

///
/// NamingStrategy
///
/// Pure functions of their inputs and the options. Every result is capped at
/// `StrategyOptions::max_length`; configured prefixes count toward the cap
/// but are never abbreviated.
///

#[derive(Clone, Debug, Default)]
pub struct NamingStrategy {
    options: StrategyOptions,
}

impl NamingStrategy {
    #[must_use]
    pub const fn new(options: StrategyOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &StrategyOptions {
        &self.options
    }

    /// `CamelCaseClassName` -> `<table_prefix>camel_case_class_names`
    #[must_use]
    pub fn class_to_table_name(&self, class_name: &str) -> String {
        let table = pluralize(&to_snake_case(class_name));

        self.fit(self.options.table_prefix(), [NamePart::new(table)])
    }

    /// `camelCaseField` -> `<column_prefix>camel_case_field`
    #[must_use]
    pub fn property_to_column_name(&self, property_name: &str) -> String {
        self.fit(
            self.options.column_prefix(),
            [NamePart::new(to_snake_case(property_name))],
        )
    }

    ///
    /// Column of a property nested in an embedded value:
    /// `<column_prefix><prefix>_<property>`.
    ///
    /// Over the cap, the prefix is abbreviated before the property name. With
    /// `dont_touch_prefix` the prefix is kept whole and only the property name
    /// is abbreviated.
    ///
    #[must_use]
    pub fn embedded_property_to_column_name(
        &self,
        prefix: &str,
        property_name: &str,
        dont_touch_prefix: bool,
    ) -> String {
        let prefix = to_snake_case(prefix);
        let prefix = if dont_touch_prefix {
            NamePart::fixed(prefix)
        } else {
            NamePart::new(prefix)
        };

        self.fit(
            self.options.column_prefix(),
            [prefix, NamePart::new(to_snake_case(property_name))],
        )
    }

    /// Foreign-key column named after the property, or after the owning
    /// table when there is no property (the owner side of a join table).
    #[must_use]
    pub fn foreign_key_column_name(
        &self,
        property_name: Option<&str>,
        property_table_name: &str,
    ) -> String {
        let source = property_name
            .filter(|name| !name.is_empty())
            .unwrap_or(property_table_name);

        self.fit(
            self.options.foreign_key_column_prefix(),
            [NamePart::new(to_snake_case(source))],
        )
    }

    /// `joinedColumn` -> `joined_column_id`
    #[must_use]
    pub fn join_key_column_name(&self, joined_column: &str, _joined_table: &str) -> String {
        self.fit(
            None,
            [
                NamePart::new(to_snake_case(joined_column)),
                NamePart::fixed(JOIN_KEY_SUFFIX),
            ],
        )
    }

    /// `<table_prefix><owners>_<associateds>`
    #[must_use]
    pub fn join_table_name(&self, owner_entity: &str, associated_entity: &str) -> String {
        self.fit(
            self.options.table_prefix(),
            join_table_parts(owner_entity, associated_entity),
        )
    }

    /// `<table_prefix><owners>_<associateds>_<property>`, used when the plain
    /// join-table name is already taken by another association. The property
    /// is never abbreviated; the entity parts shrink instead.
    #[must_use]
    pub fn join_table_name_for_property(
        &self,
        owner_entity: &str,
        associated_entity: &str,
        owner_property: &str,
    ) -> String {
        let [owner, associated] = join_table_parts(owner_entity, associated_entity);

        self.fit(
            self.options.table_prefix(),
            [owner, associated, NamePart::fixed(to_snake_case(owner_property))],
        )
    }

    ///
    /// Join-table name checked against the names already issued in this build.
    ///
    /// The first association between two entities gets the plain name. A
    /// different association whose plain name is taken gets the owning
    /// property appended; if that is taken too, or there is no owning
    /// property, an ordinal (`_2`, `_3`, ...) is appended until the name is
    /// free. Ordinals are kept whole under the max length.
    ///
    #[must_use]
    pub fn unique_join_table_name(
        &self,
        registry: &JoinTableNames,
        owner_entity: &str,
        associated_entity: &str,
        owner_property: Option<&str>,
    ) -> String {
        let description = TableDescription::new(owner_entity, associated_entity, owner_property);

        registry.resolve(description, |attempt| match (attempt, owner_property) {
            (1, Some(property)) => {
                self.join_table_name_for_property(owner_entity, associated_entity, property)
            }
            (0 | 1, _) => self.join_table_name(owner_entity, associated_entity),
            (ordinal, property) => {
                self.numbered_join_table_name(owner_entity, associated_entity, property, ordinal)
            }
        })
    }

    /// `<fk_constraint_prefix><table>_<column>` for a single-column key.
    #[must_use]
    pub fn foreign_key_name(&self, table_name: &str, column_name: &str) -> String {
        self.fit(
            self.options.foreign_key_constraint_prefix(),
            constraint_parts(table_name, column_name),
        )
    }

    /// `<uk_constraint_prefix><table>_<column>` for a single-column key.
    #[must_use]
    pub fn unique_key_name(&self, table_name: &str, column_name: &str) -> String {
        self.fit(
            self.options.unique_key_constraint_prefix(),
            constraint_parts(table_name, column_name),
        )
    }

    fn numbered_join_table_name(
        &self,
        owner_entity: &str,
        associated_entity: &str,
        owner_property: Option<&str>,
        ordinal: usize,
    ) -> String {
        let [owner, associated] = join_table_parts(owner_entity, associated_entity);
        let mut parts = NameParts::new(self.options.table_prefix())
            .push(owner)
            .push(associated);
        if let Some(property) = owner_property {
            parts = parts.push(NamePart::fixed(to_snake_case(property)));
        }

        parts.fit_with_suffix(self.options.max_length(), &format!("_{ordinal}"))
    }

    fn fit<const N: usize>(&self, prefix: Option<&str>, parts: [NamePart; N]) -> String {
        parts
            .into_iter()
            .fold(NameParts::new(prefix), NameParts::push)
            .fit(self.options.max_length())
    }
}

fn join_table_parts(owner_entity: &str, associated_entity: &str) -> [NamePart; 2] {
    [
        NamePart::new(pluralize(&to_snake_case(owner_entity))),
        NamePart::new(pluralize(&to_snake_case(associated_entity))),
    ]
}

fn constraint_parts(table_name: &str, column_name: &str) -> [NamePart; 2] {
    [
        NamePart::new(to_snake_case(table_name)),
        NamePart::new(to_snake_case(column_name)),
    ]
}
