//! Per-item inputs.

use crate::error::{Error, Result};
use crate::value::{from_json, Map, Value};
use std::borrow::Cow;

/// Input is one side of a comparison as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Nothing was supplied. Compares as an empty map.
    Missing,
    /// An already structured value.
    Structured(Value),
    /// JSON text, parsed before comparing. Empty text is a parse error.
    Text(String),
}

impl Input {
    /// Picks the input kind for a field value: strings are JSON text, any
    /// other value is used as is, and an absent field is missing.
    pub fn from_field(value: Option<&Value>) -> Self {
        match value {
            None => Input::Missing,
            Some(Value::String(text)) => Input::Text(text.clone()),
            Some(other) => Input::Structured(other.clone()),
        }
    }

    /// Resolves the input into a value. `name` identifies the input in
    /// parse errors.
    pub fn resolve(&self, name: &str) -> Result<Cow<'_, Value>> {
        match self {
            Input::Missing => Ok(Cow::Owned(Value::Map(Map::new()))),
            Input::Structured(value) => Ok(Cow::Borrowed(value)),
            Input::Text(text) => from_json(text)
                .map(Cow::Owned)
                .map_err(|e| Error::parse(name, e)),
        }
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Structured(value)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}
