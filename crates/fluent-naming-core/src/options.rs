//! Configuration consumed by `NamingStrategy`.

use crate::{dialect::detect_max_length, error::ConfigError};

pub const DEFAULT_COLUMN_PREFIX: &str = "f_";
pub const DEFAULT_FOREIGN_KEY_COLUMN_PREFIX: &str = "fk_";
pub const DEFAULT_FOREIGN_KEY_CONSTRAINT_PREFIX: &str = "fk_";
pub const DEFAULT_UNIQUE_KEY_CONSTRAINT_PREFIX: &str = "uk_";

/// Cap applied when neither a length nor autodetection is requested.
/// Matches the shortest limit among the known dialects.
pub const DEFAULT_MAX_LENGTH: usize = 30;

///
/// StrategyOptions
///
/// Immutable once built. Autodetection of the max length is resolved by the
/// builder, so `max_length` is always concrete here; `0` means no limit.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyOptions {
    table_prefix: Option<String>,
    column_prefix: Option<String>,
    foreign_key_column_prefix: Option<String>,
    foreign_key_constraint_prefix: Option<String>,
    unique_key_constraint_prefix: Option<String>,
    max_length: usize,
    autodetected: bool,
}

impl StrategyOptions {
    #[must_use]
    pub fn builder() -> StrategyOptionsBuilder {
        StrategyOptionsBuilder::default()
    }

    #[must_use]
    pub fn table_prefix(&self) -> Option<&str> {
        self.table_prefix.as_deref()
    }

    #[must_use]
    pub fn column_prefix(&self) -> Option<&str> {
        self.column_prefix.as_deref()
    }

    #[must_use]
    pub fn foreign_key_column_prefix(&self) -> Option<&str> {
        self.foreign_key_column_prefix.as_deref()
    }

    #[must_use]
    pub fn foreign_key_constraint_prefix(&self) -> Option<&str> {
        self.foreign_key_constraint_prefix.as_deref()
    }

    #[must_use]
    pub fn unique_key_constraint_prefix(&self) -> Option<&str> {
        self.unique_key_constraint_prefix.as_deref()
    }

    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// True when `max_length` came from dialect autodetection.
    #[must_use]
    pub const fn is_autodetected(&self) -> bool {
        self.autodetected
    }
}

impl Default for StrategyOptions {
    fn default() -> Self {
        Self {
            table_prefix: None,
            column_prefix: Some(DEFAULT_COLUMN_PREFIX.to_string()),
            foreign_key_column_prefix: Some(DEFAULT_FOREIGN_KEY_COLUMN_PREFIX.to_string()),
            foreign_key_constraint_prefix: Some(DEFAULT_FOREIGN_KEY_CONSTRAINT_PREFIX.to_string()),
            unique_key_constraint_prefix: Some(DEFAULT_UNIQUE_KEY_CONSTRAINT_PREFIX.to_string()),
            max_length: DEFAULT_MAX_LENGTH,
            autodetected: false,
        }
    }
}

///
/// MaxLength
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MaxLength {
    Limit(usize),
    Autodetect,
}

impl Default for MaxLength {
    fn default() -> Self {
        Self::Limit(DEFAULT_MAX_LENGTH)
    }
}

///
/// StrategyOptionsBuilder
///
/// Empty prefixes are treated as unset.
///

#[derive(Clone, Debug)]
pub struct StrategyOptionsBuilder {
    options: StrategyOptions,
    max_length: MaxLength,
    dialect: Option<String>,
}

impl Default for StrategyOptionsBuilder {
    fn default() -> Self {
        Self {
            options: StrategyOptions::default(),
            max_length: MaxLength::default(),
            dialect: None,
        }
    }
}

impl StrategyOptionsBuilder {
    #[must_use]
    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.table_prefix = non_empty(prefix.into());
        self
    }

    #[must_use]
    pub fn no_table_prefix(mut self) -> Self {
        self.options.table_prefix = None;
        self
    }

    #[must_use]
    pub fn column_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.column_prefix = non_empty(prefix.into());
        self
    }

    #[must_use]
    pub fn no_column_prefix(mut self) -> Self {
        self.options.column_prefix = None;
        self
    }

    #[must_use]
    pub fn foreign_key_column_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.foreign_key_column_prefix = non_empty(prefix.into());
        self
    }

    #[must_use]
    pub fn no_foreign_key_column_prefix(mut self) -> Self {
        self.options.foreign_key_column_prefix = None;
        self
    }

    #[must_use]
    pub fn foreign_key_constraint_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.foreign_key_constraint_prefix = non_empty(prefix.into());
        self
    }

    #[must_use]
    pub fn no_foreign_key_constraint_prefix(mut self) -> Self {
        self.options.foreign_key_constraint_prefix = None;
        self
    }

    #[must_use]
    pub fn unique_key_constraint_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.unique_key_constraint_prefix = non_empty(prefix.into());
        self
    }

    #[must_use]
    pub fn no_unique_key_constraint_prefix(mut self) -> Self {
        self.options.unique_key_constraint_prefix = None;
        self
    }

    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = MaxLength::Limit(max_length);
        self
    }

    #[must_use]
    pub fn dont_restrict_length(self) -> Self {
        self.max_length(0)
    }

    /// Resolve the max length from the dialect at build time.
    #[must_use]
    pub fn autodetect_max_length(mut self) -> Self {
        self.max_length = MaxLength::Autodetect;
        self
    }

    /// Dialect name used for autodetection; ignored otherwise.
    #[must_use]
    pub fn dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = non_empty(dialect.into());
        self
    }

    pub fn build(self) -> Result<StrategyOptions, ConfigError> {
        let mut options = self.options;

        match self.max_length {
            MaxLength::Limit(max_length) => options.max_length = max_length,
            MaxLength::Autodetect => {
                options.max_length = detect_max_length(self.dialect.as_deref())?;
                options.autodetected = true;
            }
        }

        Ok(options)
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_prefixes() {
        let options = StrategyOptions::builder().build().unwrap();

        assert_eq!(options.table_prefix(), None);
        assert_eq!(options.column_prefix(), Some("f_"));
        assert_eq!(options.foreign_key_column_prefix(), Some("fk_"));
        assert_eq!(options.foreign_key_constraint_prefix(), Some("fk_"));
        assert_eq!(options.unique_key_constraint_prefix(), Some("uk_"));
        assert_eq!(options.max_length(), DEFAULT_MAX_LENGTH);
        assert!(!options.is_autodetected());
    }

    #[test]
    fn empty_prefix_means_unset() {
        let options = StrategyOptions::builder()
            .table_prefix("")
            .column_prefix("")
            .build()
            .unwrap();

        assert_eq!(options.table_prefix(), None);
        assert_eq!(options.column_prefix(), None);
    }

    #[test]
    fn autodetect_resolves_once_at_build() {
        let options = StrategyOptions::builder()
            .autodetect_max_length()
            .dialect("org.hibernate.dialect.MySQL8Dialect")
            .build()
            .unwrap();

        assert_eq!(options.max_length(), 64);
        assert!(options.is_autodetected());
    }

    #[test]
    fn autodetect_without_dialect_fails() {
        let err = StrategyOptions::builder()
            .autodetect_max_length()
            .build()
            .unwrap_err();

        assert_eq!(err, ConfigError::MissingDialect);
    }

    #[test]
    fn dialect_is_ignored_for_explicit_lengths() {
        let options = StrategyOptions::builder()
            .dialect("SomethingUnknown")
            .max_length(40)
            .build()
            .unwrap();

        assert_eq!(options.max_length(), 40);
    }
}
