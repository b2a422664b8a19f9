use crate::ast;
use crate::directives::DirectiveSet;
use crate::loc;
use crate::types::TypeReference;
use std::path::Path;

/// A field declared on an [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: DirectiveSet,
    pub(crate) name: String,
    pub(crate) type_ref: TypeReference,
}
impl FieldDefinition {
    pub fn new(name: impl Into<String>, type_ref: TypeReference) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::BuiltIn,
            description: None,
            directives: DirectiveSet::new(),
            name: name.into(),
            type_ref,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Field arguments are dropped: this library only describes the shape of
    /// output data.
    pub(crate) fn from_ast(file_path: &Path, ast_field: &ast::schema::Field) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(
                file_path,
                ast_field.position,
            ).into(),
            description: ast_field.description.clone(),
            directives: DirectiveSet::from_ast(&ast_field.directives),
            name: ast_field.name.to_string(),
            type_ref: TypeReference::from_ast_type(&ast_field.field_type),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The description of this field as defined in the schema (e.g. in a
    /// """-string immediately before the field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &DirectiveSet {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeReference {
        &self.type_ref
    }
}
