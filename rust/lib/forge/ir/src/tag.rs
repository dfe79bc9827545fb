//! Metadata tag kinds and their raw parameters.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of metadata tags understood by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TagKind {
    /// Type-level, no parameters. Marks a type for builder generation.
    BuilderTarget,
    /// Type-level. `name` (required) is the table name.
    Table,
    /// Field-level. `name` (required), `primaryKey` (default false),
    /// `nullable` (default true).
    Column,
}

impl TagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::BuilderTarget => "BuilderTarget",
            TagKind::Table => "Table",
            TagKind::Column => "Column",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tag parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Text(String),
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s.as_str()),
            ParamValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            ParamValue::Text(_) => None,
        }
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Bool(_) => ParamKind::Bool,
            ParamValue::Text(_) => ParamKind::Text,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

/// Declared kind of a tag parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamKind {
    Text,
    Bool,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Text => f.write_str("a string"),
            ParamKind::Bool => f.write_str("a bool"),
        }
    }
}

/// Named tag parameters, ordered by name.
pub type ParameterMap = BTreeMap<String, ParamValue>;

/// Tags attached to a type or a field.
pub type TagMap = BTreeMap<TagKind, ParameterMap>;

/// Build a [`ParameterMap`] from `(name, value)` pairs.
///
/// ```
/// use forge_ir::params;
/// let p = params([("name", "people".into()), ("nullable", false.into())]);
/// assert_eq!(p.len(), 2);
/// ```
pub fn params<const N: usize>(pairs: [(&str, ParamValue); N]) -> ParameterMap {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
