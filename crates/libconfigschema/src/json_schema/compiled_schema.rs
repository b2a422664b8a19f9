use crate::json_schema::JsonType;
use crate::json_schema::SchemaNode;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

pub const DRAFT_04_SCHEMA_URI: &str = "http://json-schema.org/draft-04/schema#";
const DOCUMENT_TITLE: &str = "Config";

/// The output of [`SchemaCompiler`](crate::json_schema::SchemaCompiler): the
/// root type's properties at the top level plus one `definitions` entry per
/// other object type.
///
/// Serializes as a draft-04 document with keys in this order: `$schema`,
/// `title`, `type`, `properties`, `required` (omitted when empty),
/// `additionalProperties` and `definitions`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompiledSchema {
    pub(crate) definitions: IndexMap<String, SchemaNode>,
    pub(crate) properties: IndexMap<String, SchemaNode>,
    pub(crate) required: Vec<String>,
}
impl CompiledSchema {
    pub fn definitions(&self) -> &IndexMap<String, SchemaNode> {
        &self.definitions
    }

    pub fn properties(&self) -> &IndexMap<String, SchemaNode> {
        &self.properties
    }

    pub fn required(&self) -> &[String] {
        self.required.as_slice()
    }

    /// Two-space indented JSON, as written by the CLI.
    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
impl Serialize for CompiledSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("$schema", DRAFT_04_SCHEMA_URI)?;
        map.serialize_entry("title", DOCUMENT_TITLE)?;
        map.serialize_entry("type", &JsonType::Object)?;
        map.serialize_entry("properties", &self.properties)?;
        if !self.required.is_empty() {
            map.serialize_entry("required", &self.required)?;
        }
        map.serialize_entry("additionalProperties", &false)?;
        map.serialize_entry("definitions", &self.definitions)?;
        map.end()
    }
}
