//! Module: source
//! Responsibility: the values a host metadata builder hands to a naming strategy.
//! Does not own: how the host discovers entities or properties.
//! Boundary: everything a strategy reads comes through these types.

use fluent_naming_core::ident::unqualify;
use std::fmt;

///
/// Identifier
///
/// A schema identifier as the host sees it. Text wrapped in backticks or
/// double quotes is recorded as quoted with the quotes removed.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Identifier {
    text: String,
    quoted: bool,
}

impl Identifier {
    #[must_use]
    pub fn new(text: impl Into<String>, quoted: bool) -> Self {
        Self {
            text: text.into(),
            quoted,
        }
    }

    /// Build an identifier from its string form, detecting quoting.
    #[must_use]
    pub fn to_identifier(text: impl AsRef<str>) -> Self {
        let text = text.as_ref().trim();

        for quote in ['`', '"'] {
            if let Some(inner) = text
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
            {
                return Self::new(inner, true);
            }
        }

        Self::new(text, false)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "\"{}\"", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

///
/// EntityNaming
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct EntityNaming {
    entity_name: String,
}

impl EntityNaming {
    #[must_use]
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
        }
    }

    /// The name as registered with the host, possibly package-qualified.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    #[must_use]
    pub fn unqualified(&self) -> &str {
        unqualify(&self.entity_name)
    }
}

///
/// AttributePath
///
/// A property and the chain of properties that contain it, innermost last:
/// `homeAddress.street` has property `street` and parent `homeAddress`.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AttributePath {
    property: String,
    parent: Option<Box<Self>>,
}

impl AttributePath {
    #[must_use]
    pub fn root(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            parent: None,
        }
    }

    /// Path to `property` nested under `self`.
    #[must_use]
    pub fn append(&self, property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            parent: Some(Box::new(self.clone())),
        }
    }

    /// Parse a dotted path; `None` for an empty string.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let mut segments = path.split('.').filter(|s| !s.is_empty());
        let first = Self::root(segments.next()?);

        Some(segments.fold(first, |parent, segment| parent.append(segment)))
    }

    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn full_path(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{}.{}", parent.full_path(), self.property),
            None => self.property.clone(),
        }
    }
}

///
/// BasicColumnNameSource
///
/// `component` is set when the property lives inside an embedded value.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasicColumnNameSource {
    pub entity: EntityNaming,
    pub attribute_path: AttributePath,
    pub collection_element: bool,
    pub component: bool,
}

impl BasicColumnNameSource {
    #[must_use]
    pub const fn new(entity: EntityNaming, attribute_path: AttributePath) -> Self {
        Self {
            entity,
            attribute_path,
            collection_element: false,
            component: false,
        }
    }

    #[must_use]
    pub const fn in_component(mut self) -> Self {
        self.component = true;
        self
    }

    #[must_use]
    pub const fn as_collection_element(mut self) -> Self {
        self.collection_element = true;
        self
    }
}

///
/// JoinColumnNameSource
///
/// `attribute_path` is absent for the owner-side key column of a join table.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JoinColumnNameSource {
    pub entity: EntityNaming,
    pub attribute_path: Option<AttributePath>,
    pub referenced_column: Option<Identifier>,
}

///
/// JoinTableNameSource
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JoinTableNameSource {
    pub owning_entity: EntityNaming,
    pub non_owning_entity: EntityNaming,
    pub owning_attribute_path: Option<AttributePath>,
}

///
/// KeyNameSource
///
/// Table and columns of a foreign-key or unique-key constraint.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyNameSource {
    pub table_name: Identifier,
    pub column_names: Vec<Identifier>,
}

impl KeyNameSource {
    #[must_use]
    pub fn new(table_name: Identifier, column_names: Vec<Identifier>) -> Self {
        Self {
            table_name,
            column_names,
        }
    }

    /// The only column, for single-column constraints.
    #[must_use]
    pub fn single_column(&self) -> Option<&Identifier> {
        match self.column_names.as_slice() {
            [column] => Some(column),
            _ => None,
        }
    }
}

pub type ForeignKeyNameSource = KeyNameSource;
pub type UniqueKeyNameSource = KeyNameSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_identifiers_lose_their_quotes() {
        let backticked = Identifier::to_identifier("`order`");
        let double = Identifier::to_identifier("\"user\"");
        let plain = Identifier::to_identifier("f_name");

        assert_eq!(backticked, Identifier::new("order", true));
        assert_eq!(double.text(), "user");
        assert!(!plain.is_quoted());
        assert_eq!(double.to_string(), "\"user\"");
        assert_eq!(plain.to_string(), "f_name");
    }

    #[test]
    fn a_lone_quote_is_not_quoting() {
        let id = Identifier::to_identifier("`");

        assert_eq!(id, Identifier::new("`", false));
    }

    #[test]
    fn attribute_paths_parse_from_dotted_strings() {
        let path = AttributePath::parse("customer.homeAddress.street").unwrap();

        assert_eq!(path.property(), "street");
        assert_eq!(path.parent().map(AttributePath::property), Some("homeAddress"));
        assert_eq!(path.full_path(), "customer.homeAddress.street");
        assert!(!path.is_root());
        assert!(AttributePath::parse("").is_none());
        assert!(AttributePath::parse("name").unwrap().is_root());
    }

    #[test]
    fn entity_names_unqualify() {
        let entity = EntityNaming::new("com.example.persistent.Customer");

        assert_eq!(entity.unqualified(), "Customer");
        assert_eq!(entity.entity_name(), "com.example.persistent.Customer");
    }

    #[test]
    fn single_column_only_for_one_column() {
        let one = KeyNameSource::new(
            Identifier::to_identifier("t"),
            vec![Identifier::to_identifier("c")],
        );
        let two = KeyNameSource::new(
            Identifier::to_identifier("t"),
            vec![Identifier::to_identifier("a"), Identifier::to_identifier("b")],
        );

        assert_eq!(one.single_column().map(Identifier::text), Some("c"));
        assert!(two.single_column().is_none());
    }
}
