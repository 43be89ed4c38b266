//! Module: transform
//! Responsibility: turn projected query tuples into typed values.
//! Does not own: running the query or choosing the aliases.
//! Boundary: aliases are dotted property paths into the target type.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::{marker::PhantomData, sync::OnceLock};
use thiserror::Error as ThisError;

///
/// TransformError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum TransformError {
    #[error("expected {expected} values for the aliases, got {actual}")]
    AliasCountMismatch { expected: usize, actual: usize },

    #[error("alias '{0}' conflicts with another alias")]
    ConflictingAlias(String),

    #[error(transparent)]
    Deserialize(#[from] serde_json::Error),

    #[error("alias '{0}' has an empty segment")]
    EmptyAlias(String),
}

///
/// ResultTransformer
///
/// Each alias names a property path in `T`; `customer.name` sets `name` on
/// the nested `customer` value. Alias paths are parsed on the first tuple
/// and reused for every later one.
///

pub struct ResultTransformer<T> {
    paths: OnceLock<Vec<Vec<String>>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> ResultTransformer<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            paths: OnceLock::new(),
            _marker: PhantomData,
        }
    }

    pub fn transform_tuple(&self, tuple: Vec<Value>, aliases: &[&str]) -> Result<T, TransformError> {
        let paths = self.paths(aliases)?;
        if tuple.len() != paths.len() {
            return Err(TransformError::AliasCountMismatch {
                expected: paths.len(),
                actual: tuple.len(),
            });
        }

        let mut root = Map::new();
        for (path, value) in paths.iter().zip(tuple) {
            insert_nested(&mut root, path, value)?;
        }

        Ok(serde_json::from_value(Value::Object(root))?)
    }

    pub fn transform_list<I>(&self, rows: I, aliases: &[&str]) -> Result<Vec<T>, TransformError>
    where
        I: IntoIterator<Item = Vec<Value>>,
    {
        rows.into_iter()
            .map(|row| self.transform_tuple(row, aliases))
            .collect()
    }

    fn paths(&self, aliases: &[&str]) -> Result<&[Vec<String>], TransformError> {
        if let Some(paths) = self.paths.get() {
            if paths.len() != aliases.len() {
                return Err(TransformError::AliasCountMismatch {
                    expected: paths.len(),
                    actual: aliases.len(),
                });
            }
            return Ok(paths);
        }

        let parsed = aliases
            .iter()
            .map(|alias| parse_alias(alias))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.paths.get_or_init(|| parsed))
    }
}

impl<T: DeserializeOwned> Default for ResultTransformer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ResultTransformer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultTransformer")
            .field("paths", &self.paths.get())
            .finish()
    }
}

fn parse_alias(alias: &str) -> Result<Vec<String>, TransformError> {
    let segments: Vec<String> = alias.split('.').map(str::to_string).collect();
    if segments.iter().any(String::is_empty) {
        return Err(TransformError::EmptyAlias(alias.to_string()));
    }

    Ok(segments)
}

fn insert_nested(
    root: &mut Map<String, Value>,
    path: &[String],
    value: Value,
) -> Result<(), TransformError> {
    let conflict = || TransformError::ConflictingAlias(path.join("."));
    let Some((leaf, parents)) = path.split_last() else {
        return Err(conflict());
    };

    let mut current = root;
    for segment in parents {
        let entry = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        current = match entry {
            Value::Object(map) => map,
            _ => return Err(conflict()),
        };
    }

    if current.contains_key(leaf) {
        return Err(conflict());
    }
    current.insert(leaf.clone(), value);

    Ok(())
}
