use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Raised while building `StrategyOptions`. Always fatal for the build that
/// requested it: the caller has to supply an explicit max length or a dialect
/// the detector knows.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("can't autodetect a max length: no dialect is set")]
    MissingDialect,

    #[error("can't autodetect a max length for dialect '{0}'; specify max_length explicitly")]
    UnknownDialect(String),
}
