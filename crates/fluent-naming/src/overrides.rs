use fluent_naming_core::ident::unqualify;
use std::collections::HashMap;

///
/// FluentName
///
/// Per-property naming override. An embedded property carrying one names its
/// columns with `prefix` instead of the property name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FluentName {
    pub prefix: String,
}

impl FluentName {
    #[must_use]
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

///
/// NameOverrides
///
/// Overrides keyed by unqualified entity name, then property name.
///

#[derive(Clone, Debug, Default)]
pub struct NameOverrides {
    entities: HashMap<String, HashMap<String, FluentName>>,
}

impl NameOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix(mut self, entity: &str, property: &str, prefix: &str) -> Self {
        self.insert(entity, property, FluentName::prefix(prefix));
        self
    }

    pub fn insert(&mut self, entity: &str, property: &str, name: FluentName) -> Option<FluentName> {
        self.entities
            .entry(unqualify(entity).to_string())
            .or_default()
            .insert(property.to_string(), name)
    }

    #[must_use]
    pub fn get(&self, entity: &str, property: &str) -> Option<&FluentName> {
        self.entities.get(unqualify(entity))?.get(property)
    }

    /// The override prefix for an embedded property, ignoring blank ones.
    #[must_use]
    pub fn embedded_prefix(&self, entity: &str, property: &str) -> Option<&str> {
        self.get(entity, property)
            .map(|name| name.prefix.as_str())
            .filter(|prefix| !prefix.trim().is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
