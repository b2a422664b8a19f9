use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

/// The primitive JSON Schema `type` keywords this compiler emits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum JsonType {
    Array,
    Boolean,
    Integer,
    Number,
    Object,
    String,
}
impl JsonType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
        }
    }
}
impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
impl Serialize for JsonType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The body of an object-typed [`SchemaNode`].
///
/// `title` and `additional_properties` are only set on `definitions`
/// entries; the `JSON` scalar and unknown-object nodes leave them unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectSchema {
    pub additional_properties: Option<bool>,
    pub properties: IndexMap<String, SchemaNode>,
    pub required: Vec<String>,
    pub title: Option<String>,
}

/// One node of an emitted JSON Schema document.
///
/// Every variant may carry a `description`. Serialization writes keys in a
/// fixed order per variant, with `description` always last, so identical
/// nodes always print identically.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaNode {
    /// `{"anyOf": [..]}`. An empty list is legal.
    AnyOf {
        description: Option<String>,
        variants: Vec<SchemaNode>,
    },

    /// `{"type": "array", "items": ..}`.
    Array {
        description: Option<String>,
        items: Box<SchemaNode>,
    },

    /// `{"type": "object", "title": .., "properties": {..}, ..}`.
    Object {
        description: Option<String>,
        schema: ObjectSchema,
    },

    /// `{"type": <json_type>}`, optionally restricted by `enum`.
    Primitive {
        description: Option<String>,
        enum_values: Option<Vec<String>>,
        json_type: JsonType,
    },

    /// `{"$ref": "#/definitions/<type_name>"}`.
    Ref {
        description: Option<String>,
        type_name: String,
    },

    /// `{"$ref": "#"}`: a reference back to the document root, which never
    /// has a `definitions` entry of its own.
    RootRef {
        description: Option<String>,
    },
}
impl SchemaNode {
    pub fn any_of(variants: Vec<SchemaNode>) -> Self {
        Self::AnyOf {
            description: None,
            variants,
        }
    }

    pub fn array(items: SchemaNode) -> Self {
        Self::Array {
            description: None,
            items: Box::new(items),
        }
    }

    /// A `{"type": "string", "enum": [..]}` node.
    pub fn enumeration<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::Primitive {
            description: None,
            enum_values: Some(values.into_iter().map(Into::into).collect()),
            json_type: JsonType::String,
        }
    }

    pub fn object(schema: ObjectSchema) -> Self {
        Self::Object {
            description: None,
            schema,
        }
    }

    pub fn primitive(json_type: JsonType) -> Self {
        Self::Primitive {
            description: None,
            enum_values: None,
            json_type,
        }
    }

    pub fn reference(type_name: impl Into<String>) -> Self {
        Self::Ref {
            description: None,
            type_name: type_name.into(),
        }
    }

    pub fn root_reference() -> Self {
        Self::RootRef { description: None }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        *self.description_mut() = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::AnyOf { description, .. }
            | Self::Array { description, .. }
            | Self::Object { description, .. }
            | Self::Primitive { description, .. }
            | Self::Ref { description, .. }
            | Self::RootRef { description } => description.as_deref(),
        }
    }

    pub(crate) fn description_mut(&mut self) -> &mut Option<String> {
        match self {
            Self::AnyOf { description, .. }
            | Self::Array { description, .. }
            | Self::Object { description, .. }
            | Self::Primitive { description, .. }
            | Self::Ref { description, .. }
            | Self::RootRef { description } => description,
        }
    }

    /// The JSON pointer a [`SchemaNode::Ref`] serializes to.
    pub fn ref_path(type_name: &str) -> String {
        format!("#/definitions/{type_name}")
    }
}
impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let description = match self {
            Self::AnyOf { description, variants } => {
                map.serialize_entry("anyOf", variants)?;
                description
            },

            Self::Array { description, items } => {
                map.serialize_entry("type", &JsonType::Array)?;
                map.serialize_entry("items", items)?;
                description
            },

            Self::Object { description, schema } => {
                map.serialize_entry("type", &JsonType::Object)?;
                serialize_object_schema(&mut map, schema)?;
                description
            },

            Self::Primitive { description, enum_values, json_type } => {
                map.serialize_entry("type", json_type)?;
                if let Some(enum_values) = enum_values {
                    map.serialize_entry("enum", enum_values)?;
                }
                description
            },

            Self::Ref { description, type_name } => {
                map.serialize_entry("$ref", &Self::ref_path(type_name))?;
                description
            },

            Self::RootRef { description } => {
                map.serialize_entry("$ref", "#")?;
                description
            },
        };
        if let Some(description) = description {
            map.serialize_entry("description", description)?;
        }
        map.end()
    }
}

/// Writes `title`, `properties`, `required` and `additionalProperties` in
/// that order. An empty `required` list is left out: draft-04 requires at
/// least one entry when the keyword is present.
fn serialize_object_schema<M: SerializeMap>(
    map: &mut M,
    schema: &ObjectSchema,
) -> Result<(), M::Error> {
    if let Some(title) = &schema.title {
        map.serialize_entry("title", title)?;
    }
    map.serialize_entry("properties", &schema.properties)?;
    if !schema.required.is_empty() {
        map.serialize_entry("required", &schema.required)?;
    }
    if let Some(additional_properties) = schema.additional_properties {
        map.serialize_entry("additionalProperties", &additional_properties)?;
    }
    Ok(())
}
