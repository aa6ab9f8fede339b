//! Schema validation.

use tracing::{debug, trace};

use crate::check::check_node_at;
use crate::path::{ROOT, field_path, index_path};
use crate::{Kind, Options, Schema, SchemaError, SchemaNode, type_tag};

/// Validate a schema for internal consistency.
///
/// For every node, in order:
/// - The kind tag must be recognized
/// - `optional`, when present, must be a boolean
/// - `defaultValue`, when present, must satisfy the node itself
/// - Object `properties` and array `items` are validated recursively
///
/// Note: stray modifiers (e.g. `properties` on a string node) are ignored.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    debug!(fields = schema.len(), "validating schema");
    validate_fields(schema, ROOT)
}

fn validate_fields(schema: &Schema, path: &str) -> Result<(), SchemaError> {
    for (name, node) in schema {
        validate_node(node, &field_path(path, name))?;
    }
    Ok(())
}

fn validate_node(node: &SchemaNode, path: &str) -> Result<(), SchemaError> {
    let kind = node.kind_at(path)?;
    trace!(path, %kind, "validating node");

    if let Some(optional) = &node.optional {
        if !optional.is_boolean() {
            return Err(SchemaError::OptionFormat {
                path: path.to_string(),
                found: type_tag(optional),
            });
        }
    }

    if let Some(default) = &node.default_value {
        check_node_at(default, node, path, &Options::default()).map_err(|source| {
            SchemaError::DefaultValueMismatch {
                path: path.to_string(),
                source: Box::new(source),
            }
        })?;
    }

    match kind {
        Kind::Object => {
            if let Some(properties) = &node.properties {
                validate_fields(properties, path)?;
            }
        }
        Kind::Array => {
            if let Some(items) = &node.items {
                for (index, item) in items.iter().enumerate() {
                    validate_node(item, &index_path(path, index))?;
                }
            }
        }
        Kind::String | Kind::Number | Kind::Boolean => {}
    }

    Ok(())
}
