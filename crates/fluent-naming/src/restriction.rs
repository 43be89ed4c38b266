//! Module: restriction
//! Responsibility: small, schema-agnostic restriction trees for query requests.
//! Does not own: translation into a query language or execution.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, ops::BitAnd};

///
/// Restriction
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Restriction {
    And(Vec<Self>),
    Eq { property: String, value: Value },
    In { property: String, values: Vec<Value> },
}

impl Restriction {
    /// Conjunction of `self` and `other`, flattening nested conjunctions.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let mut restrictions = self.into_conjuncts();
        restrictions.extend(other.into_conjuncts());

        Self::And(restrictions)
    }

    /// Property paths referenced by this restriction, in order of appearance.
    #[must_use]
    pub fn properties(&self) -> Vec<&str> {
        match self {
            Self::And(restrictions) => restrictions.iter().flat_map(Self::properties).collect(),
            Self::Eq { property, .. } | Self::In { property, .. } => vec![property.as_str()],
        }
    }

    fn into_conjuncts(self) -> Vec<Self> {
        match self {
            Self::And(restrictions) => restrictions,
            other => vec![other],
        }
    }
}

impl BitAnd for Restriction {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(restrictions) => {
                for (i, restriction) in restrictions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" and ")?;
                    }
                    write!(f, "{restriction}")?;
                }
                Ok(())
            }
            Self::Eq { property, value } => write!(f, "{property} = {value}"),
            Self::In { property, values } => {
                write!(f, "{property} in (")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// `property = value`
#[must_use]
pub fn eq(property: impl Into<String>, value: impl Into<Value>) -> Restriction {
    Restriction::Eq {
        property: property.into(),
        value: value.into(),
    }
}

/// `property in (values...)`
#[must_use]
pub fn in_list<I, V>(property: impl Into<String>, values: I) -> Restriction
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Restriction::In {
        property: property.into(),
        values: values.into_iter().map(Into::into).collect(),
    }
}
