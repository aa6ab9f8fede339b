//! Node kinds and runtime type tags.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The structural kind a schema node describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// UTF-8 string
    String,
    /// Number (integer or float)
    Number,
    /// Boolean
    Boolean,
    /// Nested mapping, optionally described by `properties`
    Object,
    /// Ordered sequence, optionally described by positional `items`
    Array,
}

impl Kind {
    /// All recognized kinds.
    pub const ALL: [Kind; 5] = [
        Kind::String,
        Kind::Number,
        Kind::Boolean,
        Kind::Object,
        Kind::Array,
    ];

    /// Parses a kind tag. Returns `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(Kind::String),
            "number" => Some(Kind::Number),
            "boolean" => Some(Kind::Boolean),
            "object" => Some(Kind::Object),
            "array" => Some(Kind::Array),
            _ => None,
        }
    }

    /// Returns the tag this kind is written as.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Object => "object",
            Kind::Array => "array",
        }
    }

    /// Returns true if the value's runtime type tag is exactly this kind.
    pub fn matches(self, value: &Value) -> bool {
        type_tag(value) == self.as_str()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the runtime type tag of a value.
///
/// Arrays and null have their own tags, so neither satisfies `object`. An
/// `object` node rejects arrays even when it declares no `properties`, which
/// is stricter than a plain `typeof`-style check that lumps them together.
pub fn type_tag(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
