//! Checking values against a schema.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::path::{ROOT, field_path, index_path};
use crate::{Kind, Options, Schema, SchemaError, SchemaNode, type_tag, validate_schema};

/// Check that a value conforms field-by-field to a schema.
///
/// The schema is validated first. Every field the schema names must be
/// present with exactly the declared kind; fields the schema does not name
/// are ignored. A value that is not an object has no fields.
pub fn check_value(value: &Value, schema: &Schema) -> Result<(), SchemaError> {
    check_value_with(value, schema, &Options::default())
}

/// Check a value against a schema with explicit options.
pub fn check_value_with(
    value: &Value,
    schema: &Schema,
    options: &Options,
) -> Result<(), SchemaError> {
    if options.validate_schema {
        validate_schema(schema)?;
    }
    debug!(fields = schema.len(), "checking value");
    check_fields(value, schema, ROOT, options)
}

/// Check that a single value satisfies a single node.
///
/// The node itself is not validated.
pub fn check_node(value: &Value, node: &SchemaNode) -> Result<(), SchemaError> {
    check_node_at(value, node, ROOT, &Options::default())
}

fn check_fields(
    value: &Value,
    schema: &Schema,
    path: &str,
    options: &Options,
) -> Result<(), SchemaError> {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);

    for (name, node) in schema {
        let Some(field) = fields.get(name) else {
            if options.honor_optional && node.is_optional() {
                trace!(path, field = %name, "skipping optional field");
                continue;
            }
            return Err(SchemaError::MissingField {
                path: path.to_string(),
                field: name.clone(),
            });
        };
        check_node_at(field, node, &field_path(path, name), options)?;
    }

    Ok(())
}

pub(crate) fn check_node_at(
    value: &Value,
    node: &SchemaNode,
    path: &str,
    options: &Options,
) -> Result<(), SchemaError> {
    let kind = node.kind_at(path)?;
    trace!(path, %kind, "checking node");

    match kind {
        Kind::String | Kind::Number | Kind::Boolean => expect_kind(value, kind, path),
        Kind::Object => {
            expect_kind(value, kind, path)?;
            match &node.properties {
                Some(properties) => check_fields(value, properties, path, options),
                None => Ok(()),
            }
        }
        Kind::Array => {
            let Value::Array(elements) = value else {
                return Err(mismatch(value, kind, path));
            };
            let Some(items) = &node.items else {
                return Ok(());
            };
            for (index, element) in elements.iter().enumerate() {
                let slot = options
                    .item_indexing
                    .resolve(index, items.len())
                    .ok_or_else(|| SchemaError::ItemOutOfRange {
                        path: path.to_string(),
                        index,
                        items: items.len(),
                    })?;
                check_node_at(element, &items[slot], &index_path(path, index), options)?;
            }
            Ok(())
        }
    }
}

fn expect_kind(value: &Value, kind: Kind, path: &str) -> Result<(), SchemaError> {
    if kind.matches(value) {
        Ok(())
    } else {
        Err(mismatch(value, kind, path))
    }
}

fn mismatch(value: &Value, kind: Kind, path: &str) -> SchemaError {
    SchemaError::TypeMismatch {
        path: path.to_string(),
        expected: kind,
        found: type_tag(value),
    }
}
