use fluent_naming_core::error::ConfigError;
use std::path::PathBuf;
use thiserror::Error as ThisError;

///
/// LoadError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read naming config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid naming config: {0}")]
    Parse(#[from] toml::de::Error),
}
