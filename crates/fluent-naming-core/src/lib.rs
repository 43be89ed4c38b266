//! ## Crate layout
//! - `ident`: pure string transforms (snake_case, pluralization, abbreviation).
//! - `options`: immutable `StrategyOptions` and their builder.
//! - `dialect`: identifier length limits per database family.
//! - `strategy`: `NamingStrategy`, the identifier-producing function set.
//! - `join_table`: per-build registry used to keep join-table names distinct.
//!
//! Nothing here performs I/O or knows about a host ORM; adapters feed plain
//! strings in and convert the plain strings that come back.

pub mod dialect;
pub mod error;
pub mod ident;
pub mod join_table;
pub mod options;
pub mod strategy;

pub use error::ConfigError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        dialect::{DialectFamily, detect_max_length},
        error::ConfigError,
        join_table::{JoinTableNames, TableDescription},
        options::{StrategyOptions, StrategyOptionsBuilder},
        strategy::NamingStrategy,
    };
}
