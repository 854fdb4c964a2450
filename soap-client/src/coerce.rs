//! Scalar coercion of response field values
//!
//! TR-064 encodes booleans as `"0"` and `"1"`. Only those two literals are
//! turned into booleans; everything else, including other digits, is kept
//! as the original string.

use std::fmt;

/// A response field value after coercion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Text(String),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Bool(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Coercion rule declared for a response field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coercion {
    /// `"0"` / `"1"` become booleans, anything else stays a string
    #[default]
    Boolean,
    /// Keep the raw string
    Verbatim,
}

impl Coercion {
    pub fn apply(&self, raw: &str) -> Value {
        match self {
            Coercion::Boolean => coerce(raw),
            Coercion::Verbatim => Value::Text(raw.to_string()),
        }
    }
}

/// Apply the boolean rule to a raw field value
///
/// The comparison is made on the trimmed value, but a value that is not
/// coerced is returned exactly as given.
pub fn coerce(value: &str) -> Value {
    match value.trim() {
        "0" => Value::Bool(false),
        "1" => Value::Bool(true),
        _ => Value::Text(value.to_string()),
    }
}
