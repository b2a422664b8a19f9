use crate::directives::KnownDirective;
use crate::json_schema;
use crate::json_schema::CompiledSchema;
use crate::json_schema::ObjectSchema;
use crate::json_schema::SchemaNode;
use crate::types::FieldDefinition;
use crate::types::TypeDefinition;
use crate::types::TypeKind;
use crate::TypeGraph;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, CompileError>;

/// Compile `graph` with `root_type_name` as the document root.
///
/// Shorthand for `SchemaCompiler::new(graph, root_type_name).compile()`.
pub fn compile(graph: &TypeGraph, root_type_name: &str) -> Result<CompiledSchema> {
    SchemaCompiler::new(graph, root_type_name).compile()
}

/// Walks every object type of a [`TypeGraph`] and turns it into JSON Schema.
///
/// The root object's fields become the document's top-level `properties`;
/// every other object type becomes a `definitions` entry. Fields that point
/// at object types are always emitted as `$ref`s into `definitions`, so
/// self-referential and mutually recursive types compile to a finite
/// document. Fields that point back at the root type refer to the document
/// itself (`"#"`), since the root has no `definitions` entry.
#[derive(Clone, Copy, Debug)]
pub struct SchemaCompiler<'graph> {
    graph: &'graph TypeGraph,
    root_type_name: &'graph str,
}
impl<'graph> SchemaCompiler<'graph> {
    pub fn new(graph: &'graph TypeGraph, root_type_name: &'graph str) -> Self {
        Self {
            graph,
            root_type_name,
        }
    }

    pub fn compile(&self) -> Result<CompiledSchema> {
        let root_type_name = self.root_type_name;
        match self.graph.get_type(root_type_name) {
            Some(TypeDefinition::Object(_)) => (),
            Some(other_type) => return Err(CompileError::RootTypeNotObject {
                kind: other_type.kind(),
                type_name: root_type_name.to_string(),
            }),
            None => return Err(CompileError::RootTypeNotFound {
                type_name: root_type_name.to_string(),
            }),
        }

        let mut compiled = CompiledSchema::default();
        for obj_type in self.graph.object_types() {
            let (properties, required) =
                self.compile_fields(obj_type.fields().values())?;

            if obj_type.name() == root_type_name {
                compiled.properties = properties;
                compiled.required = required;
                continue;
            }

            let additional_properties =
                obj_type.has_directive(KnownDirective::WithAdditionalProperties);
            log::trace!(
                "Compiled definition `{}` (additionalProperties: \
                {additional_properties}).",
                obj_type.name(),
            );
            compiled.definitions.insert(
                obj_type.name().to_string(),
                SchemaNode::object(ObjectSchema {
                    additional_properties: Some(additional_properties),
                    properties,
                    required,
                    title: Some(obj_type.name().to_string()),
                }),
            );
        }

        log::debug!(
            "Compiled root type `{root_type_name}` ({} properties, {} \
            definitions).",
            compiled.properties.len(),
            compiled.definitions.len(),
        );
        Ok(compiled)
    }

    /// The node emitted for a single field: the resolved base type, wrapped
    /// in an array when the field is a list, carrying the field's
    /// description.
    ///
    /// When the resolved node already has a description of its own, the two
    /// are merged as `"<field description> (<node description>)"`. For list
    /// fields the array node starts out with the `items` description, and
    /// `items` keeps its own.
    pub fn resolve_field(&self, field: &FieldDefinition) -> Result<SchemaNode> {
        let resolved = field.type_ref().resolve();
        let mut node = self.resolve_type_name(resolved.base_name, &mut vec![])?;
        if resolved.is_list {
            let items_description = node.description().map(str::to_string);
            node = SchemaNode::array(node);
            *node.description_mut() = items_description;
        }

        if let Some(field_description) = field.description() {
            let description = node.description_mut();
            *description = Some(match description.as_deref() {
                Some(node_description) =>
                    format!("{field_description} ({node_description})"),
                None => field_description.to_string(),
            });
        }

        Ok(node)
    }

    fn compile_fields<'a>(
        &self,
        fields: impl Iterator<Item = &'a FieldDefinition>,
    ) -> Result<(IndexMap<String, SchemaNode>, Vec<String>)> {
        let mut properties = IndexMap::new();
        let mut required = vec![];
        for field in fields {
            if field.type_ref().is_required() {
                required.push(field.name().to_string());
            }
            properties.insert(field.name().to_string(), self.resolve_field(field)?);
        }
        Ok((properties, required))
    }

    /// `expanding_unions` holds the unions whose `anyOf` is currently being
    /// built, so a union listing itself (directly or through another union)
    /// is reported instead of recursing forever.
    fn resolve_type_name(
        &self,
        type_name: &str,
        expanding_unions: &mut Vec<String>,
    ) -> Result<SchemaNode> {
        let Some(type_def) = self.graph.get_type(type_name) else {
            return Err(CompileError::UndefinedTypeReference {
                type_name: type_name.to_string(),
            });
        };

        Ok(match type_def {
            TypeDefinition::Enum(enum_type) => {
                let value_names = enum_type.value_names();
                let description =
                    format!("Allowed values: {}", value_names.join(", "));
                SchemaNode::enumeration(value_names).with_description(description)
            },

            TypeDefinition::Interface(_) => {
                let implementors = self.graph.implementors_of(type_name);
                let description = any_of_description(&implementors);
                let variants = implementors.into_iter()
                    .map(|implementor| self.object_reference(implementor))
                    .collect();
                SchemaNode::any_of(variants).with_description(description)
            },

            TypeDefinition::Object(_) => self.object_reference(type_name),

            TypeDefinition::Scalar(_) =>
                json_schema::map_scalar(type_name).unwrap_or_else(|| {
                    log::debug!(
                        "Scalar `{type_name}` has no JSON Schema mapping; \
                        emitting an unknown object.",
                    );
                    json_schema::unknown_object()
                }),

            TypeDefinition::Union(_) => {
                if expanding_unions.iter().any(|name| name == type_name) {
                    return Err(CompileError::CyclicUnion {
                        union_name: type_name.to_string(),
                    });
                }
                expanding_unions.push(type_name.to_string());
                let members = self.graph.members_of(type_name);
                let variants = members.iter()
                    .map(|member_name| {
                        self.resolve_type_name(member_name, expanding_unions)
                    })
                    .collect::<Result<Vec<_>>>()?;
                expanding_unions.pop();
                SchemaNode::any_of(variants)
                    .with_description(any_of_description(&members))
            },
        })
    }

    fn object_reference(&self, type_name: &str) -> SchemaNode {
        if type_name == self.root_type_name {
            SchemaNode::root_reference()
        } else {
            SchemaNode::reference(type_name)
        }
    }
}

fn any_of_description(variant_names: &[&str]) -> String {
    format!("Any of: {}", variant_names.join(", "))
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("Union `{union_name}` contains itself as a member")]
    CyclicUnion {
        union_name: String,
    },

    #[error("Root type `{type_name}` is a {kind} type, not an object type")]
    RootTypeNotObject {
        kind: TypeKind,
        type_name: String,
    },

    #[error("Root type `{type_name}` is not defined in the schema")]
    RootTypeNotFound {
        type_name: String,
    },

    #[error("Reference to undefined type `{type_name}`")]
    UndefinedTypeReference {
        type_name: String,
    },
}
