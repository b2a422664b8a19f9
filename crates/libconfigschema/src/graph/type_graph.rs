use crate::TypeGraphBuilder;
use crate::directives::DirectiveDefinition;
use crate::directives::GRAPHQL_BUILTIN_DIRECTIVE_NAMES;
use crate::directives::KnownDirective;
use crate::types::BUILTIN_SCALAR_NAMES;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeDefinition;
use indexmap::IndexMap;

/// An immutable, fully merged set of type and directive definitions.
///
/// Types are kept in declaration order: the built-in scalars first, then
/// every type in the order its definition was loaded. Everything derived from
/// a [`TypeGraph`] (JSON Schema definitions, interface implementors, Markdown
/// documents) inherits this order.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeGraph {
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) types: IndexMap<String, TypeDefinition>,
}
impl TypeGraph {
    /// Helper function that just delegates to [`TypeGraphBuilder::new()`].
    pub fn builder() -> TypeGraphBuilder {
        TypeGraphBuilder::new()
    }

    /// Assemble a graph directly from already-constructed definitions.
    ///
    /// Unlike [`TypeGraphBuilder::build()`] this performs no validation:
    /// dangling type references are carried into the graph as-is. A later
    /// definition with the same name as an earlier one replaces it in place.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = TypeDefinition>,
    ) -> Self {
        let mut types = builtin_types();
        for type_def in definitions {
            types.insert(type_def.name().to_string(), type_def);
        }
        Self {
            directive_defs: builtin_directive_defs(),
            types,
        }
    }

    /// All directives declared in this graph, including GraphQL's built-in
    /// directives and the [`KnownDirective`]s.
    pub fn all_directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    /// All types defined in this graph, in declaration order.
    pub fn all_types(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }

    pub fn get_type(&self, type_name: &str) -> Option<&TypeDefinition> {
        self.types.get(type_name)
    }

    /// Every object type in declaration order.
    pub fn object_types(&self) -> impl Iterator<Item = &ObjectType> {
        self.types.values().filter_map(TypeDefinition::as_object)
    }

    /// Names of the object types that declare they implement the named
    /// interface, in graph declaration order.
    ///
    /// An interface nobody implements (or a name that isn't an interface)
    /// yields an empty list.
    pub fn implementors_of(&self, interface_name: &str) -> Vec<&str> {
        self.object_types()
            .filter(|obj_type| obj_type.implements_interface(interface_name))
            .map(ObjectType::name)
            .collect()
    }

    /// Member type names of the named union, verbatim in declaration order.
    ///
    /// A name that isn't a union yields an empty list.
    pub fn members_of(&self, union_name: &str) -> Vec<&str> {
        self.types.get(union_name)
            .and_then(TypeDefinition::as_union)
            .map(|union_type| union_type.member_type_names())
            .unwrap_or_default()
    }
}

pub(crate) fn builtin_types() -> IndexMap<String, TypeDefinition> {
    BUILTIN_SCALAR_NAMES.iter()
        .map(|name| (
            name.to_string(),
            TypeDefinition::Scalar(ScalarType::new(*name)),
        ))
        .collect()
}

pub(crate) fn builtin_directive_defs() -> IndexMap<String, DirectiveDefinition> {
    let graphql_builtins = GRAPHQL_BUILTIN_DIRECTIVE_NAMES.iter()
        .map(|name| (
            name.to_string(),
            DirectiveDefinition::GraphQLBuiltIn(*name),
        ));
    let config_directives = KnownDirective::ALL.into_iter()
        .map(|directive| (
            directive.name().to_string(),
            DirectiveDefinition::Config(directive),
        ));
    graphql_builtins.chain(config_directives).collect()
}
