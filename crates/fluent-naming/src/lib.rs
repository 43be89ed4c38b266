//! Naming strategy adapter for ORM schema generation.
//!
//! `FluentNamingStrategy` answers the host's implicit-naming callbacks with
//! prefixed, pluralized, snake_case identifiers capped to the database's
//! identifier length. The naming rules live in `fluent_naming_core`; the
//! `[naming]` configuration table is read by `fluent_naming_config`.
//!
//! Also here: `restriction` builders for simple query requests and a
//! `ResultTransformer` that maps projected tuples onto nested types.

pub mod error;
pub mod fluent;
pub mod implicit;
pub mod overrides;
pub mod restriction;
pub mod source;
pub mod transform;

pub use error::Error;
pub use fluent_naming_config as config;
pub use fluent_naming_core as core;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::Error,
        fluent::FluentNamingStrategy,
        implicit::{ImplicitNamingStrategy, JpaCompliantNamingStrategy},
        overrides::{FluentName, NameOverrides},
        restriction::{Restriction, eq, in_list},
        source::{
            AttributePath, BasicColumnNameSource, EntityNaming, ForeignKeyNameSource, Identifier,
            JoinColumnNameSource, JoinTableNameSource, KeyNameSource, UniqueKeyNameSource,
        },
        transform::{ResultTransformer, TransformError},
    };
    pub use fluent_naming_core::prelude::*;
}
