use crate::json_schema::JsonType;
use crate::json_schema::ObjectSchema;
use crate::json_schema::SchemaNode;

const UNKNOWN_OBJECT_DESCRIPTION: &str = "Unknown object";

/// Maps a well-known scalar name to its JSON Schema node.
///
/// | scalar              | node                                 |
/// |---------------------|--------------------------------------|
/// | `String`, `ID`      | `{"type": "string"}`                 |
/// | `Boolean`           | `{"type": "boolean"}`                |
/// | `Float`             | `{"type": "number"}`                 |
/// | `Int`               | `{"type": "integer"}`                |
/// | `JSON`              | `{"type": "object", "properties": {}}` |
///
/// Any other name yields `None`; the compiler falls back to
/// [`unknown_object()`] for those.
pub fn map_scalar(scalar_name: &str) -> Option<SchemaNode> {
    let json_type = match scalar_name {
        "Boolean" => JsonType::Boolean,
        "Float" => JsonType::Number,
        "ID" | "String" => JsonType::String,
        "Int" => JsonType::Integer,
        "JSON" => return Some(SchemaNode::object(ObjectSchema::default())),
        _ => return None,
    };
    Some(SchemaNode::primitive(json_type))
}

/// The permissive node emitted for scalars [`map_scalar()`] doesn't know.
pub(crate) fn unknown_object() -> SchemaNode {
    SchemaNode::object(ObjectSchema::default())
        .with_description(UNKNOWN_OBJECT_DESCRIPTION)
}
