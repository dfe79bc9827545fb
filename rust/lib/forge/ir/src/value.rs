//! Runtime field values and the introspection seam.
//!
//! The generators never inspect live objects themselves. A type publishes
//! its shape through [`Introspect`] and exposes current field values
//! through [`FieldAccess`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::descriptor::TypeDescriptor;
use crate::error::FieldReadError;

/// The current value of one field on a live instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Null,
    Text(String),
    Int(i64),
    /// Unsigned integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl FieldValue {
    /// Textual values are quoted when embedded in SQL.
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldValue::Text(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Plain textual form: `NULL`, the raw string, or the number/bool as written.
/// Non-finite floats have no SQL literal and render as `NULL`.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("NULL"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(x) if !x.is_finite() => f.write_str("NULL"),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        i64::try_from(u)
            .map(FieldValue::Int)
            .unwrap_or(FieldValue::UInt(u))
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Types that can publish a descriptor of themselves.
///
/// Implementations must return fields in the same, declaration-consistent
/// order on every call.
pub trait Introspect {
    fn descriptor() -> TypeDescriptor;
}

/// Read access to the current field values of a live instance.
pub trait FieldAccess {
    fn read_field(&self, name: &str) -> Result<FieldValue, FieldReadError>;
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn read_field(&self, name: &str) -> Result<FieldValue, FieldReadError> {
        (**self).read_field(name)
    }
}

/// Map-backed instance. Useful when values arrive as loose key/value data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    values: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.remove(name)
    }
}

impl FieldAccess for Record {
    fn read_field(&self, name: &str) -> Result<FieldValue, FieldReadError> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| FieldReadError::Missing(name.to_string()))
    }
}

/// JSON objects act as instances: each top-level key is a field.
impl FieldAccess for serde_json::Value {
    fn read_field(&self, name: &str) -> Result<FieldValue, FieldReadError> {
        let obj = self.as_object().ok_or_else(|| FieldReadError::Inaccessible {
            field: name.to_string(),
            reason: "instance is not a JSON object".into(),
        })?;
        let value = obj
            .get(name)
            .ok_or_else(|| FieldReadError::Missing(name.to_string()))?;

        match value {
            serde_json::Value::Null => Ok(FieldValue::Null),
            serde_json::Value::Bool(b) => Ok(FieldValue::Bool(*b)),
            serde_json::Value::String(s) => Ok(FieldValue::Text(s.clone())),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Ok(FieldValue::Int(i)),
                (None, Some(u)) => Ok(FieldValue::UInt(u)),
                (None, None) => n.as_f64().map(FieldValue::Float).ok_or_else(|| {
                    FieldReadError::Unsupported {
                        field: name.to_string(),
                        kind: "number".into(),
                    }
                }),
            },
            serde_json::Value::Array(_) => Err(FieldReadError::Unsupported {
                field: name.to_string(),
                kind: "array".into(),
            }),
            serde_json::Value::Object(_) => Err(FieldReadError::Unsupported {
                field: name.to_string(),
                kind: "object".into(),
            }),
        }
    }
}
