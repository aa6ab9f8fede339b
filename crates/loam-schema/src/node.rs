//! Schema node definitions.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::{Kind, SchemaError};

/// A named collection of schema nodes, one per field.
pub type Schema = BTreeMap<String, SchemaNode>;

/// One typed description unit: a kind tag plus modifiers.
///
/// The kind is kept as its raw tag so that schemas with unrecognized,
/// missing or non-string kinds can still be loaded and then rejected by
/// [`validate_schema`](crate::validate_schema).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// Kind tag (e.g., "string", "object"); `None` when absent
    #[serde(
        rename = "type",
        alias = "kind",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag: Option<Value>,
    /// Optional flag; must be a boolean when present
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub optional: Option<Value>,
    /// Value used by synthesis instead of the kind's placeholder
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<Value>,
    /// Nested fields (object nodes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Schema>,
    /// Positional element schemas (array nodes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SchemaNode>>,
}

/// Keeps an explicit `null` as `Some(Value::Null)` so presence is not lost.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SchemaNode {
    /// Creates a bare node of the given kind.
    pub fn new(kind: Kind) -> Self {
        Self::with_tag(kind.as_str())
    }

    /// Creates a bare node from a raw kind tag, recognized or not.
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(Value::String(tag.into())),
            optional: None,
            default_value: None,
            properties: None,
            items: None,
        }
    }

    /// Creates a string node.
    pub fn string() -> Self {
        Self::new(Kind::String)
    }

    /// Creates a number node.
    pub fn number() -> Self {
        Self::new(Kind::Number)
    }

    /// Creates a boolean node.
    pub fn boolean() -> Self {
        Self::new(Kind::Boolean)
    }

    /// Creates an object node with the given properties.
    pub fn object<K: Into<String>>(properties: impl IntoIterator<Item = (K, SchemaNode)>) -> Self {
        Self::new(Kind::Object).with_properties(schema(properties))
    }

    /// Creates an array node with the given positional items.
    pub fn array(items: Vec<SchemaNode>) -> Self {
        Self::new(Kind::Array).with_items(items)
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_optional(mut self, value: impl Into<Value>) -> Self {
        self.optional = Some(value.into());
        self
    }

    pub fn with_properties(mut self, properties: Schema) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_items(mut self, items: Vec<SchemaNode>) -> Self {
        self.items = Some(items);
        self
    }

    /// Returns the parsed kind, or `None` if the tag is not recognized.
    pub fn kind(&self) -> Option<Kind> {
        self.tag.as_ref().and_then(Value::as_str).and_then(Kind::parse)
    }

    /// Returns the kind tag as written, `<missing>` when absent.
    pub fn tag_label(&self) -> String {
        match &self.tag {
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => other.to_string(),
            None => "<missing>".to_string(),
        }
    }

    /// Returns the parsed kind, or `UnknownKind` at `path`.
    pub(crate) fn kind_at(&self, path: &str) -> Result<Kind, SchemaError> {
        self.kind().ok_or_else(|| SchemaError::UnknownKind {
            path: path.to_string(),
            kind: self.tag_label(),
        })
    }

    /// Returns true if the node is explicitly marked `optional: true`.
    pub fn is_optional(&self) -> bool {
        matches!(self.optional, Some(Value::Bool(true)))
    }
}

/// Builds a schema from `(field, node)` pairs.
pub fn schema<K: Into<String>>(fields: impl IntoIterator<Item = (K, SchemaNode)>) -> Schema {
    fields
        .into_iter()
        .map(|(name, node)| (name.into(), node))
        .collect()
}
