//! Synthesizing placeholder values from a schema.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::path::{ROOT, field_path, index_path};
use crate::{Kind, Options, Schema, SchemaError, SchemaNode, validate_schema};

/// Placeholder for string nodes without a default.
pub const STRING_PLACEHOLDER: &str = "stringValue";
/// Placeholder for number nodes without a default.
pub const NUMBER_PLACEHOLDER: i64 = 1;
/// Placeholder for boolean nodes without a default.
pub const BOOLEAN_PLACEHOLDER: bool = true;

/// Build a value that satisfies the schema.
///
/// The schema is validated first. Each field gets its node's `defaultValue`
/// when one is declared, otherwise the placeholder for its kind.
pub fn synthesize(schema: &Schema) -> Result<Value, SchemaError> {
    let mut target = Map::new();
    synthesize_with(schema, &mut target, &Options::default())?;
    Ok(Value::Object(target))
}

/// Synthesize the schema's fields into an existing object.
///
/// Fields already in `target` are kept unless the schema names them, in
/// which case they are overwritten. On error `target` is left unchanged.
pub fn synthesize_with(
    schema: &Schema,
    target: &mut Map<String, Value>,
    options: &Options,
) -> Result<(), SchemaError> {
    if options.validate_schema {
        validate_schema(schema)?;
    }
    debug!(fields = schema.len(), "synthesizing value");
    let mut synthesized = Map::new();
    synthesize_fields(schema, &mut synthesized, ROOT)?;
    target.extend(synthesized);
    Ok(())
}

/// Synthesize a value for a single node. The node is not validated.
pub fn synthesize_node(node: &SchemaNode) -> Result<Value, SchemaError> {
    synthesize_node_at(node, ROOT)
}

fn synthesize_fields(
    schema: &Schema,
    target: &mut Map<String, Value>,
    path: &str,
) -> Result<(), SchemaError> {
    for (name, node) in schema {
        let value = synthesize_node_at(node, &field_path(path, name))?;
        target.insert(name.clone(), value);
    }
    Ok(())
}

fn synthesize_node_at(node: &SchemaNode, path: &str) -> Result<Value, SchemaError> {
    let kind = node.kind_at(path)?;

    if let Some(default) = &node.default_value {
        trace!(path, %kind, "using default value");
        return Ok(default.clone());
    }

    let value = match kind {
        Kind::String => Value::from(STRING_PLACEHOLDER),
        Kind::Number => Value::from(NUMBER_PLACEHOLDER),
        Kind::Boolean => Value::Bool(BOOLEAN_PLACEHOLDER),
        Kind::Object => {
            let mut nested = Map::new();
            if let Some(properties) = &node.properties {
                synthesize_fields(properties, &mut nested, path)?;
            }
            Value::Object(nested)
        }
        Kind::Array => {
            let elements = match &node.items {
                Some(items) => items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| synthesize_node_at(item, &index_path(path, index)))
                    .collect::<Result<Vec<_>, _>>()?,
                None => Vec::new(),
            };
            Value::Array(elements)
        }
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use serde_json::json;

    #[test]
    fn test_placeholders() {
        let fields = schema([
            ("name", SchemaNode::string()),
            ("age", SchemaNode::number()),
            ("admin", SchemaNode::boolean()),
            ("home", SchemaNode::new(Kind::Object)),
            ("tags", SchemaNode::new(Kind::Array)),
        ]);
        assert_eq!(
            synthesize(&fields).unwrap(),
            json!({
                "name": "stringValue",
                "age": 1,
                "admin": true,
                "home": {},
                "tags": [],
            })
        );
    }

    #[test]
    fn test_default_wins() {
        let fields = schema([
            ("name", SchemaNode::string().with_default("Ada")),
            (
                "home",
                SchemaNode::object([("city", SchemaNode::string())])
                    .with_default(json!({ "city": "Oslo" })),
            ),
            (
                "tags",
                SchemaNode::array(vec![SchemaNode::string()]).with_default(json!([])),
            ),
        ]);
        assert_eq!(
            synthesize(&fields).unwrap(),
            json!({ "name": "Ada", "home": { "city": "Oslo" }, "tags": [] })
        );
    }

    #[test]
    fn test_falsy_defaults_win() {
        let fields = schema([
            ("count", SchemaNode::number().with_default(0)),
            ("admin", SchemaNode::boolean().with_default(false)),
            ("nick", SchemaNode::string().with_default("")),
        ]);
        assert_eq!(
            synthesize(&fields).unwrap(),
            json!({ "count": 0, "admin": false, "nick": "" })
        );
    }

    #[test]
    fn test_nested_objects() {
        let fields = schema([(
            "home",
            SchemaNode::object([
                ("city", SchemaNode::string()),
                ("geo", SchemaNode::object([("lat", SchemaNode::number().with_default(59.9))])),
            ]),
        )]);
        assert_eq!(
            synthesize(&fields).unwrap(),
            json!({ "home": { "city": "stringValue", "geo": { "lat": 59.9 } } })
        );
    }

    #[test]
    fn test_array_items_are_positional() {
        let fields = schema([(
            "row",
            SchemaNode::array(vec![
                SchemaNode::string(),
                SchemaNode::number().with_default(7),
                SchemaNode::array(vec![SchemaNode::boolean()]),
                SchemaNode::object([("id", SchemaNode::number())]),
            ]),
        )]);
        assert_eq!(
            synthesize(&fields).unwrap(),
            json!({ "row": ["stringValue", 7, [true], { "id": 1 }] })
        );
    }

    #[test]
    fn test_extends_target() {
        let fields = schema([("name", SchemaNode::string()), ("age", SchemaNode::number())]);
        let mut target = Map::new();
        target.insert("id".to_string(), json!(42));
        target.insert("name".to_string(), json!(null));

        synthesize_with(&fields, &mut target, &Options::default()).unwrap();
        assert_eq!(
            Value::Object(target),
            json!({ "id": 42, "name": "stringValue", "age": 1 })
        );
    }

    #[test]
    fn test_validation_failure_leaves_target_untouched() {
        let fields = schema([
            ("name", SchemaNode::string()),
            ("age", SchemaNode::number().with_default("old")),
        ]);
        let mut target = Map::new();
        let err = synthesize_with(&fields, &mut target, &Options::default()).unwrap_err();
        assert_eq!(err.code(), "default-value-mismatch");
        assert!(target.is_empty());
    }

    #[test]
    fn test_unvalidated_synthesis_uses_bad_defaults() {
        let fields = schema([("age", SchemaNode::number().with_default("old"))]);
        let mut target = Map::new();
        let options = Options::new().with_schema_validation(false);
        synthesize_with(&fields, &mut target, &options).unwrap();
        assert_eq!(target["age"], json!("old"));
    }

    #[test]
    fn test_unknown_kind_fails_without_validation() {
        let fields = schema([("when", SchemaNode::with_tag("date"))]);
        let mut target = Map::new();
        let options = Options::new().with_schema_validation(false);
        let err = synthesize_with(&fields, &mut target, &options).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownKind {
                path: "$.when".to_string(),
                kind: "date".to_string(),
            }
        );
    }

    #[test]
    fn test_unvalidated_failure_leaves_target_untouched() {
        // "a" sorts before "b", so it is synthesized before the failure.
        let fields = schema([
            ("a", SchemaNode::string()),
            ("b", SchemaNode::with_tag("date")),
        ]);
        let mut target = Map::new();
        target.insert("id".to_string(), json!(7));
        let options = Options::new().with_schema_validation(false);

        let err = synthesize_with(&fields, &mut target, &options).unwrap_err();
        assert_eq!(err.code(), "unknown-kind");
        assert_eq!(Value::Object(target), json!({ "id": 7 }));
    }

    #[test]
    fn test_synthesize_node() {
        let node = SchemaNode::array(vec![SchemaNode::number(), SchemaNode::string()]);
        assert_eq!(synthesize_node(&node).unwrap(), json!([1, "stringValue"]));
    }
}
