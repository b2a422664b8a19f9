use crate::ast;
use crate::directives::DirectiveDefinition;
use crate::directives::DirectiveSet;
use crate::directives::GRAPHQL_BUILTIN_DIRECTIVE_NAMES;
use crate::directives::KnownDirective;
use crate::file_reader;
use crate::graph::TypeGraphValidator;
use crate::graph::TypeValidationError;
use crate::graph::type_graph;
use crate::loc;
use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeDefinition;
use crate::types::TypeKind;
use crate::types::UnionType;
use crate::TypeGraph;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeGraphBuildError>;

/// Utility for merging one or more SDL sources into a [`TypeGraph`].
///
/// Type definitions are recorded in the order they're loaded. Type
/// extensions (`extend type Foo ...`) are queued and merged into their
/// target type when [`TypeGraphBuilder::build()`] is called, so an extension
/// may be loaded before the type it extends.
#[derive(Debug)]
pub struct TypeGraphBuilder {
    directive_defs: IndexMap<String, DirectiveDefinition>,
    extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    str_load_counter: u16,
    types: IndexMap<String, TypeDefinition>,
}
impl TypeGraphBuilder {
    pub fn new() -> Self {
        Self {
            directive_defs: type_graph::builtin_directive_defs(),
            extensions: vec![],
            str_load_counter: 0,
            types: type_graph::builtin_types(),
        }
    }

    pub fn build(mut self) -> Result<TypeGraph> {
        for (file_path, ext) in std::mem::take(&mut self.extensions) {
            self.merge_type_extension(file_path.as_path(), ext)?;
        }

        let graph = TypeGraph {
            directive_defs: self.directive_defs,
            types: self.types,
        };

        let errors = TypeGraphValidator::new(&graph).validate();
        if !errors.is_empty() {
            return Err(TypeGraphBuildError::TypeValidationErrors { errors });
        }

        log::debug!(
            "Built a type graph with {} types and {} directives.",
            graph.types.len(),
            graph.directive_defs.len(),
        );
        Ok(graph)
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            log::debug!("Loading schema file {file_path:#?}...");
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| TypeGraphBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    /// Parse and merge SDL text. When no `file_path` is given, locations
    /// inside this source are reported as `str://<n>`.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| TypeGraphBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn add_new_type(&mut self, type_def: TypeDefinition) -> Result<()> {
        let type_name = type_def.name();
        if let Some(existing_type) = self.types.get(type_name) {
            if let TypeDefinition::Scalar(scalar_type) = existing_type
                && scalar_type.is_builtin() {
                return Err(TypeGraphBuildError::RedefinitionOfBuiltinScalar {
                    location: type_def.def_location().clone(),
                    type_name: type_name.to_string(),
                });
            }

            return Err(TypeGraphBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: existing_type.def_location().clone(),
                def2: type_def.def_location().clone(),
            });
        }

        log::trace!("Recorded {} type `{type_name}`.", type_def.kind());
        self.types.insert(type_name.to_string(), type_def);
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (ext_name, ext_position, expected_kind) = match &ext {
            TypeExtension::Enum(ext) => (&ext.name, ext.position, TypeKind::Enum),
            TypeExtension::Interface(ext) => (&ext.name, ext.position, TypeKind::Interface),
            TypeExtension::Object(ext) => (&ext.name, ext.position, TypeKind::Object),
            TypeExtension::Scalar(ext) => (&ext.name, ext.position, TypeKind::Scalar),
            TypeExtension::Union(ext) => (&ext.name, ext.position, TypeKind::Union),
            TypeExtension::InputObject(ext) => {
                log::debug!(
                    "Skipping extension of input object type `{}`.",
                    ext.name,
                );
                return Ok(());
            },
        };
        let extension_loc: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, ext_position).into();

        let Some(target_type) = self.types.get_mut(ext_name.as_str()) else {
            return Err(TypeGraphBuildError::ExtensionOfUndefinedType {
                type_name: ext_name.to_string(),
                extension_loc,
            });
        };
        if target_type.kind() != expected_kind {
            return Err(TypeGraphBuildError::InvalidExtensionType {
                extension_kind: expected_kind,
                extension_loc,
                type_kind: target_type.kind(),
                type_name: ext_name.to_string(),
            });
        }

        log::trace!("Merging extension of `{ext_name}` from {file_path:#?}.");
        match (target_type, ext) {
            (TypeDefinition::Enum(enum_type), TypeExtension::Enum(ext)) => {
                enum_type.directives.extend(DirectiveSet::from_ast(&ext.directives));
                append_enum_values(enum_type, file_path, &ext.values)
            },

            (TypeDefinition::Interface(iface_type), TypeExtension::Interface(ext)) => {
                merge_object_or_interface_extension(
                    &mut iface_type.0,
                    file_path,
                    &ext.directives,
                    ext.implements_interfaces,
                    &ext.fields,
                )
            },

            (TypeDefinition::Object(obj_type), TypeExtension::Object(ext)) => {
                merge_object_or_interface_extension(
                    &mut obj_type.0,
                    file_path,
                    &ext.directives,
                    ext.implements_interfaces,
                    &ext.fields,
                )
            },

            (TypeDefinition::Scalar(scalar_type), TypeExtension::Scalar(ext)) => {
                scalar_type.directives.extend(DirectiveSet::from_ast(&ext.directives));
                Ok(())
            },

            (TypeDefinition::Union(union_type), TypeExtension::Union(ext)) => {
                union_type.directives.extend(DirectiveSet::from_ast(&ext.directives));
                append_union_members(union_type, file_path, ext.position, ext.types)
            },

            // Kinds were compared above.
            _ => Ok(()),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),

            Definition::SchemaDefinition(_) => {
                log::debug!(
                    "Ignoring `schema` block in {file_path:#?}: the root type \
                    is chosen explicitly.",
                );
                Ok(())
            },

            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),

            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let location: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, def.position).into();

        if GRAPHQL_BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            return Err(TypeGraphBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location,
            });
        }

        // Schemas may declare the config directives themselves.
        if let Some(known_directive) = KnownDirective::from_name(def.name.as_str()) {
            log::trace!("Accepting explicit declaration of {known_directive}.");
            return Ok(());
        }

        if let Some(existing_def) = self.directive_defs.get(def.name.as_str()) {
            return Err(TypeGraphBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                location1: existing_def.def_location(),
                location2: location,
            });
        }

        self.directive_defs.insert(def.name.to_string(), DirectiveDefinition::Custom {
            def_location: location,
            description: def.description,
            name: def.name,
        });
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition as AstTypeDefinition;
        let type_def = match type_def {
            AstTypeDefinition::Enum(enum_def) => {
                let mut enum_type = EnumType {
                    def_location: loc::FilePosition::from_pos(
                        file_path,
                        enum_def.position,
                    ).into(),
                    description: enum_def.description,
                    directives: DirectiveSet::from_ast(&enum_def.directives),
                    name: enum_def.name,
                    values: vec![],
                };
                append_enum_values(&mut enum_type, file_path, &enum_def.values)?;
                TypeDefinition::Enum(enum_type)
            },

            AstTypeDefinition::InputObject(inputobj_def) => {
                log::debug!(
                    "Skipping input object type `{}`.",
                    inputobj_def.name,
                );
                return Ok(());
            },

            AstTypeDefinition::Interface(iface_def) =>
                TypeDefinition::Interface(InterfaceType(object_or_interface_data(
                    file_path,
                    iface_def.position,
                    iface_def.name,
                    iface_def.description,
                    &iface_def.directives,
                    iface_def.implements_interfaces,
                    &iface_def.fields,
                )?)),

            AstTypeDefinition::Object(obj_def) =>
                TypeDefinition::Object(ObjectType(object_or_interface_data(
                    file_path,
                    obj_def.position,
                    obj_def.name,
                    obj_def.description,
                    &obj_def.directives,
                    obj_def.implements_interfaces,
                    &obj_def.fields,
                )?)),

            AstTypeDefinition::Scalar(scalar_def) =>
                TypeDefinition::Scalar(ScalarType {
                    def_location: loc::FilePosition::from_pos(
                        file_path,
                        scalar_def.position,
                    ).into(),
                    description: scalar_def.description,
                    directives: DirectiveSet::from_ast(&scalar_def.directives),
                    name: scalar_def.name,
                }),

            AstTypeDefinition::Union(union_def) => {
                let mut union_type = UnionType {
                    def_location: loc::FilePosition::from_pos(
                        file_path,
                        union_def.position,
                    ).into(),
                    description: union_def.description,
                    directives: DirectiveSet::from_ast(&union_def.directives),
                    members: vec![],
                    name: union_def.name,
                };
                append_union_members(
                    &mut union_type,
                    file_path,
                    union_def.position,
                    union_def.types,
                )?;
                TypeDefinition::Union(union_type)
            },
        };

        self.add_new_type(type_def)
    }
}
impl Default for TypeGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn append_enum_values(
    enum_type: &mut EnumType,
    file_path: &Path,
    ast_values: &[ast::schema::EnumValue],
) -> Result<()> {
    for ast_value in ast_values {
        if enum_type.values.contains(&ast_value.name) {
            return Err(TypeGraphBuildError::DuplicateEnumValueDefinition {
                enum_name: enum_type.name.to_string(),
                value_def: loc::FilePosition::from_pos(
                    file_path,
                    ast_value.position,
                ).into(),
                value_name: ast_value.name.to_string(),
            });
        }
        enum_type.values.push(ast_value.name.to_string());
    }
    Ok(())
}

fn append_fields(
    type_data: &mut ObjectOrInterfaceTypeData,
    file_path: &Path,
    ast_fields: &[ast::schema::Field],
) -> Result<()> {
    for ast_field in ast_fields {
        let field = FieldDefinition::from_ast(file_path, ast_field);
        if let Some(existing_field) = type_data.fields.get(field.name()) {
            return Err(TypeGraphBuildError::DuplicateFieldDefinition {
                field_def1: existing_field.def_location().clone(),
                field_def2: field.def_location().clone(),
                field_name: field.name().to_string(),
                type_name: type_data.name.to_string(),
            });
        }
        type_data.fields.insert(field.name().to_string(), field);
    }
    Ok(())
}

fn append_union_members(
    union_type: &mut UnionType,
    file_path: &Path,
    position: graphql_parser::Pos,
    member_names: Vec<String>,
) -> Result<()> {
    for member_name in member_names {
        if union_type.members.contains(&member_name) {
            return Err(TypeGraphBuildError::DuplicateUnionMember {
                location: loc::FilePosition::from_pos(file_path, position).into(),
                member_name,
                union_name: union_type.name.to_string(),
            });
        }
        union_type.members.push(member_name);
    }
    Ok(())
}

fn merge_object_or_interface_extension(
    type_data: &mut ObjectOrInterfaceTypeData,
    file_path: &Path,
    ast_directives: &[ast::schema::Directive],
    implements_interfaces: Vec<String>,
    ast_fields: &[ast::schema::Field],
) -> Result<()> {
    type_data.directives.extend(DirectiveSet::from_ast(ast_directives));
    for interface_name in implements_interfaces {
        if !type_data.interfaces.contains(&interface_name) {
            type_data.interfaces.push(interface_name);
        }
    }
    append_fields(type_data, file_path, ast_fields)
}

fn object_or_interface_data(
    file_path: &Path,
    position: graphql_parser::Pos,
    name: String,
    description: Option<String>,
    ast_directives: &[ast::schema::Directive],
    implements_interfaces: Vec<String>,
    ast_fields: &[ast::schema::Field],
) -> Result<ObjectOrInterfaceTypeData> {
    let mut type_data = ObjectOrInterfaceTypeData {
        def_location: loc::FilePosition::from_pos(file_path, position).into(),
        description,
        directives: DirectiveSet::from_ast(ast_directives),
        fields: IndexMap::new(),
        interfaces: implements_interfaces,
        name,
    };
    append_fields(&mut type_data, file_path, ast_fields)?;
    Ok(type_data)
}

#[derive(Debug, Error, PartialEq)]
pub enum TypeGraphBuildError {
    #[error(
        "Directive `@{directive_name}` is defined more than once \
        ({location1} and {location2})"
    )]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error(
        "Enum `{enum_name}` defines the value `{value_name}` more than once \
        ({value_def})"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_def: loc::SchemaDefLocation,
        value_name: String,
    },

    #[error(
        "`{type_name}` defines the field `{field_name}` more than once \
        ({field_def1} and {field_def2})"
    )]
    DuplicateFieldDefinition {
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Type `{type_name}` is defined more than once ({def1} and {def2})")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "Union `{union_name}` lists `{member_name}` as a member more than \
        once ({location})"
    )]
    DuplicateUnionMember {
        location: loc::SchemaDefLocation,
        member_name: String,
        union_name: String,
    },

    #[error("Attempted to extend undefined type `{type_name}` ({extension_loc})")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend {type_kind} type `{type_name}` with an \
        {extension_kind} extension ({extension_loc})"
    )]
    InvalidExtensionType {
        extension_kind: TypeKind,
        extension_loc: loc::SchemaDefLocation,
        type_kind: TypeKind,
        type_name: String,
    },

    #[error("Error parsing schema source {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine builtin directive `@{directive_name}` ({location})")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Attempted to redefine builtin scalar `{type_name}` ({location})")]
    RedefinitionOfBuiltinScalar {
        location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        type graph:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}
