//! Case conversion for class and property names.

use convert_case::{Case, Casing};

///
/// Convert a camel-case or Pascal-case identifier to snake_case.
///
/// Words split on underscores, hyphens and spaces, at lowercase-to-uppercase
/// steps, at the last capital of an uppercase run followed by a lowercase
/// letter, and at letter/digit steps. `HTMLParser` becomes `html_parser`.
///
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Strip a package or module qualifier, keeping the part after the last `.`.
#[must_use]
pub fn unqualify(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map_or(qualified_name, |(_, name)| name)
}
