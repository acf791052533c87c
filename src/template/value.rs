//! The bound-data model: values a template can be rendered against
//!
//! A data set is an ordered map from key to [`Value`]. Values are scalars,
//! sequences (repeating sections when the elements are maps), or nested maps
//! (sub-scopes). Data sets can be built programmatically or deserialized
//! from TOML.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// A bound data set: ordered mapping from key to value
pub type Data = BTreeMap<String, Value>;

/// Errors that can occur when loading a data file
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse data TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A value bound under a template key
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// Ordered sequence; a sequence of maps drives block repetition
    List(Vec<Value>),
    /// Nested mapping, used as a sub-scope
    Map(Data),
}

impl Value {
    /// Count semantics for the `{#name}` query: numbers pass through,
    /// strings count characters, aggregates count elements, anything else
    /// is zero.
    pub fn count(&self) -> String {
        match self {
            Value::Int(_) | Value::Float(_) => self.to_string(),
            Value::Str(s) => s.chars().count().to_string(),
            Value::List(items) => items.len().to_string(),
            Value::Map(fields) => fields.len().to_string(),
            Value::Bool(_) => "0".to_string(),
        }
    }

    /// Truthiness for existence gates: empty strings, zero numbers, `false`,
    /// and empty aggregates are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0,
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Map(fields) => !fields.is_empty(),
        }
    }
}

impl fmt::Display for Value {
    /// Scalars render as themselves; the engine does not invent a
    /// stringification for aggregates, which render empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => f.write_str(s),
            Value::List(_) | Value::Map(_) => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Data> for Value {
    fn from(fields: Data) -> Self {
        Value::Map(fields)
    }
}

impl From<Vec<Data>> for Value {
    /// A sequence of mappings, the shape that drives block repetition
    fn from(rows: Vec<Data>) -> Self {
        Value::List(rows.into_iter().map(Value::Map).collect())
    }
}

/// Load a data set from a TOML file
pub fn load_data(path: &Path) -> Result<Data, DataError> {
    let content = std::fs::read_to_string(path)?;
    parse_data(&content)
}

/// Parse a data set from a TOML string
pub fn parse_data(content: &str) -> Result<Data, DataError> {
    Ok(toml::from_str(content)?)
}
