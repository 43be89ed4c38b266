//! Identifier length limits per database dialect family.

use crate::{error::ConfigError, ident::unqualify};
use derive_more::Display;
use tracing::info;

///
/// DialectFamily
///
/// Matched by substring against the unqualified dialect name, so
/// `org.hibernate.dialect.PostgreSQL95Dialect` and `PostgreSQL` both resolve
/// to `PostgreSql`.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[remain::sorted]
pub enum DialectFamily {
    H2,
    MySql,
    Oracle,
    PostgreSql,
}

impl DialectFamily {
    // checked in order; the first marker found wins
    const MARKERS: [(&'static str, Self); 4] = [
        ("H2", Self::H2),
        ("MySQL", Self::MySql),
        ("Oracle", Self::Oracle),
        ("PostgreSQL", Self::PostgreSql),
    ];

    /// Detect the family from a dialect class or product name.
    pub fn detect(dialect: &str) -> Result<Self, ConfigError> {
        let dialect = dialect.trim();
        if dialect.is_empty() {
            return Err(ConfigError::MissingDialect);
        }

        let short_name = unqualify(dialect);

        Self::MARKERS
            .iter()
            .find(|(marker, _)| short_name.contains(marker))
            .map(|(_, family)| *family)
            .ok_or_else(|| ConfigError::UnknownDialect(dialect.to_string()))
    }

    /// Longest identifier the family accepts; `0` means no limit.
    #[must_use]
    pub const fn max_identifier_length(self) -> usize {
        match self {
            Self::H2 => 0,
            Self::MySql => 64,
            Self::Oracle => 30,
            Self::PostgreSql => 63,
        }
    }
}

/// Resolve the identifier length cap for an optional dialect name.
pub fn detect_max_length(dialect: Option<&str>) -> Result<usize, ConfigError> {
    let family = DialectFamily::detect(dialect.unwrap_or_default())?;
    let max_length = family.max_identifier_length();

    info!(%family, max_length, "autodetected identifier max length");

    Ok(max_length)
}
