//! Candidate name input.
//!
//! Callers fed by loosely typed sources (JSON manifests, CLI bridges) can hand
//! over "no value", "nothing provided" and non-text values; each gets its own
//! verdict instead of being coerced into a string.

use serde_json::Value;

/// Kind of a non-textual input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Boolean,
    Object,
    Array,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        };
        f.write_str(kind)
    }
}

/// A candidate package name as handed to the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInput {
    /// Explicit "no value".
    Null,

    /// No value was provided at all.
    Undefined,

    /// A value that is not text.
    NotAString(ValueKind),

    /// The candidate name.
    Text(String),
}

impl NameInput {
    /// The candidate text, if the input is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(name) => Some(name),
            _ => None,
        }
    }

    /// Input from an optional JSON field; a missing key is [`NameInput::Undefined`].
    pub fn from_field(value: Option<&Value>) -> Self {
        value.map_or(Self::Undefined, Self::from)
    }
}

impl From<&str> for NameInput {
    fn from(name: &str) -> Self {
        Self::Text(name.to_string())
    }
}

impl From<String> for NameInput {
    fn from(name: String) -> Self {
        Self::Text(name)
    }
}

impl From<&String> for NameInput {
    fn from(name: &String) -> Self {
        Self::Text(name.clone())
    }
}

impl<T: Into<String>> From<Option<T>> for NameInput {
    /// `None` means nothing was provided.
    fn from(name: Option<T>) -> Self {
        match name {
            Some(name) => Self::Text(name.into()),
            None => Self::Undefined,
        }
    }
}

impl From<&Value> for NameInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(name) => Self::Text(name.clone()),
            Value::Number(_) => Self::NotAString(ValueKind::Number),
            Value::Bool(_) => Self::NotAString(ValueKind::Boolean),
            Value::Object(_) => Self::NotAString(ValueKind::Object),
            Value::Array(_) => Self::NotAString(ValueKind::Array),
        }
    }
}

impl From<Value> for NameInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => Self::Text(name),
            other => Self::from(&other),
        }
    }
}
