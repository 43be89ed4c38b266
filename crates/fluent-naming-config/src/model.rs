use fluent_naming_core::{
    error::ConfigError,
    options::{StrategyOptions, StrategyOptionsBuilder},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Host property carrying the dialect class name.
pub const DIALECT_PROPERTY: &str = "hibernate.dialect";

///
/// ConfigFile
///
/// Root of a naming configuration file; everything lives under `[naming]`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub naming: NamingConfig,
}

///
/// NamingConfig
///
/// Serialized form of `StrategyOptions`. An absent prefix keeps the default,
/// an empty string turns the prefix off.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key_column_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key_constraint_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_key_constraint_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    pub autodetect_max_length: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
}

impl NamingConfig {
    /// Build options without host properties.
    pub fn to_options(&self) -> Result<StrategyOptions, ConfigError> {
        self.to_options_with(&HashMap::new())
    }

    ///
    /// Build options, taking the dialect from `host_properties` when the
    /// configuration does not name one.
    ///
    pub fn to_options_with(
        &self,
        host_properties: &HashMap<String, String>,
    ) -> Result<StrategyOptions, ConfigError> {
        let mut builder = self.prefixes(StrategyOptions::builder());

        if self.autodetect_max_length {
            if let Some(max_length) = self.max_length {
                warn!(max_length, "max_length is ignored when autodetect_max_length is set");
            }

            let dialect = self
                .dialect
                .as_deref()
                .or_else(|| host_properties.get(DIALECT_PROPERTY).map(String::as_str));
            debug!(dialect = ?dialect, "autodetecting max length");

            builder = builder.autodetect_max_length();
            if let Some(dialect) = dialect {
                builder = builder.dialect(dialect);
            }
        } else if let Some(max_length) = self.max_length {
            builder = builder.max_length(max_length);
        }

        builder.build()
    }

    fn prefixes(&self, mut builder: StrategyOptionsBuilder) -> StrategyOptionsBuilder {
        if let Some(prefix) = &self.table_prefix {
            builder = builder.table_prefix(prefix.as_str());
        }
        if let Some(prefix) = &self.column_prefix {
            builder = builder.column_prefix(prefix.as_str());
        }
        if let Some(prefix) = &self.foreign_key_column_prefix {
            builder = builder.foreign_key_column_prefix(prefix.as_str());
        }
        if let Some(prefix) = &self.foreign_key_constraint_prefix {
            builder = builder.foreign_key_constraint_prefix(prefix.as_str());
        }
        if let Some(prefix) = &self.unique_key_constraint_prefix {
            builder = builder.unique_key_constraint_prefix(prefix.as_str());
        }

        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_gives_default_options() {
        let options = NamingConfig::default().to_options().unwrap();

        assert_eq!(options, StrategyOptions::default());
    }

    #[test]
    fn empty_string_disables_a_prefix() {
        let config = NamingConfig {
            column_prefix: Some(String::new()),
            table_prefix: Some("app_".to_string()),
            ..NamingConfig::default()
        };
        let options = config.to_options().unwrap();

        assert_eq!(options.column_prefix(), None);
        assert_eq!(options.table_prefix(), Some("app_"));
        assert_eq!(options.foreign_key_column_prefix(), Some("fk_"));
    }

    #[test]
    fn host_dialect_is_used_when_config_has_none() {
        let config = NamingConfig {
            autodetect_max_length: true,
            ..NamingConfig::default()
        };
        let host = HashMap::from([(
            DIALECT_PROPERTY.to_string(),
            "org.hibernate.dialect.PostgreSQL10Dialect".to_string(),
        )]);

        let options = config.to_options_with(&host).unwrap();

        assert_eq!(options.max_length(), 63);
        assert!(options.is_autodetected());
    }

    #[test]
    fn configured_dialect_wins_over_host() {
        let config = NamingConfig {
            autodetect_max_length: true,
            dialect: Some("Oracle".to_string()),
            ..NamingConfig::default()
        };
        let host = HashMap::from([(DIALECT_PROPERTY.to_string(), "MySQL".to_string())]);

        assert_eq!(config.to_options_with(&host).unwrap().max_length(), 30);
    }

    #[test]
    fn autodetect_without_any_dialect_fails() {
        let config = NamingConfig {
            autodetect_max_length: true,
            ..NamingConfig::default()
        };

        assert_eq!(config.to_options(), Err(ConfigError::MissingDialect));
    }
}
