use crate::transform::TransformError;
use fluent_naming_config::LoadError;
use fluent_naming_core::ConfigError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure the crate can surface, wrapping the error of the layer
/// that produced it.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}
