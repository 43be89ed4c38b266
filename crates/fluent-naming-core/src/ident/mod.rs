//! Identifier transformation primitives.
//!
//! Pure string functions with no knowledge of entities, options or the host
//! framework. Everything in `strategy` is composed from these.

pub mod abbrev;
pub mod case;
pub mod plural;

pub use abbrev::{NamePart, NameParts, abbreviate_segment, truncate};
pub use case::{to_snake_case, unqualify};
pub use plural::{pluralize, pluralize_word};
