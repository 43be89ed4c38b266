use crate::{
    error::LoadError,
    model::{ConfigFile, NamingConfig},
};
use fluent_naming_core::options::StrategyOptions;
use std::{collections::HashMap, fs, path::Path};
use tracing::info;

/// Parse a configuration document.
pub fn from_toml_str(source: &str) -> Result<NamingConfig, LoadError> {
    let file: ConfigFile = toml::from_str(source)?;

    Ok(file.naming)
}

/// Read and parse a configuration file.
pub fn from_path(path: impl AsRef<Path>) -> Result<NamingConfig, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    from_toml_str(&source)
}

///
/// Load a configuration file and resolve it into options in one step.
///
/// `host_properties` is consulted for the dialect when autodetection is on
/// and the file does not name one.
///
pub fn load_options(
    path: impl AsRef<Path>,
    host_properties: &HashMap<String, String>,
) -> Result<StrategyOptions, LoadError> {
    let path = path.as_ref();
    let options = from_path(path)?.to_options_with(host_properties)?;

    info!(
        path = %path.display(),
        max_length = options.max_length(),
        autodetected = options.is_autodetected(),
        "loaded naming options"
    );

    Ok(options)
}
