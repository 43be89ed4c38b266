//! Configuration surface for the naming strategy.
//!
//! Reads a `[naming]` TOML table into `NamingConfig` and resolves it into
//! immutable `StrategyOptions`, running max-length autodetection against the
//! configured dialect or the host's dialect property.

pub mod error;
pub mod load;
pub mod model;

pub use error::LoadError;
pub use load::{from_path, from_toml_str, load_options};
pub use model::{ConfigFile, DIALECT_PROPERTY, NamingConfig};
