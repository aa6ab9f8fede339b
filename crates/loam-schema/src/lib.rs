//! Shape descriptions for JSON values.
//!
//! A [`Schema`] maps field names to [`SchemaNode`]s. Each node declares one of
//! five kinds and may carry modifiers:
//!
//! ```json
//! {
//!   "name": { "type": "string" },
//!   "age":  { "type": "number", "defaultValue": 5 },
//!   "tags": { "type": "array", "items": [{ "type": "string" }] },
//!   "home": { "type": "object", "properties": { "city": { "type": "string" } } }
//! }
//! ```
//!
//! Three operations work over a schema:
//! - [`validate_schema`] checks that the schema itself is well-formed
//! - [`synthesize`] builds a placeholder value that satisfies the schema
//! - [`check_value`] checks an existing value against the schema
//!
//! ```
//! use rhizome_loam_schema::{check_value, schema, synthesize, SchemaNode};
//!
//! let schema = schema([
//!     ("name", SchemaNode::string()),
//!     ("age", SchemaNode::number().with_default(5)),
//! ]);
//!
//! let value = synthesize(&schema).unwrap();
//! assert_eq!(value, serde_json::json!({ "name": "stringValue", "age": 5 }));
//! assert!(check_value(&value, &schema).is_ok());
//! ```

mod check;
mod error;
mod kind;
mod node;
mod options;
mod path;
mod synth;
mod validation;

pub use check::{check_node, check_value, check_value_with};
pub use error::SchemaError;
pub use kind::{Kind, type_tag};
pub use node::{Schema, SchemaNode, schema};
pub use options::{ItemIndexing, Options};
pub use synth::{
    BOOLEAN_PLACEHOLDER, NUMBER_PLACEHOLDER, STRING_PLACEHOLDER, synthesize, synthesize_node,
    synthesize_with,
};
pub use validation::validate_schema;
