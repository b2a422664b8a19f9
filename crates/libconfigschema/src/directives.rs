//! Directives that toggle generator behavior, and the typed capability set
//! attached to every definition that can carry directive annotations.

use crate::ast;
use crate::loc;
use indexmap::IndexSet;

/// SDL declaring the directives this library understands. These are always
/// declared implicitly by [`TypeGraphBuilder`](crate::TypeGraphBuilder), but
/// schemas may also declare them verbatim (e.g. to satisfy other tooling).
pub const CONFIG_DIRECTIVES_SDL: &str = concat!(
    "directive @md on OBJECT\n",
    "directive @withAdditionalProperties on OBJECT\n",
);

/// Directive names reserved by GraphQL itself.
pub(crate) const GRAPHQL_BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "deprecated",
    "include",
    "skip",
    "specifiedBy",
];

/// A directive whose presence changes what the generators emit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KnownDirective {
    /// `@md`: render a Markdown document for the annotated object type.
    Markdown,

    /// `@withAdditionalProperties`: the generated JSON Schema definition
    /// allows properties that aren't declared as fields.
    WithAdditionalProperties,
}
impl KnownDirective {
    pub const ALL: [KnownDirective; 2] = [
        KnownDirective::Markdown,
        KnownDirective::WithAdditionalProperties,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|directive| directive.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::WithAdditionalProperties => "withAdditionalProperties",
        }
    }
}
impl std::fmt::Display for KnownDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.name())
    }
}

/// The ordered set of directive names annotated on a type or field.
///
/// Arguments passed to directive annotations are dropped; none of the
/// directives this library reacts to take any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    names: IndexSet<String>,
}
impl DirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_ast(ast_directives: &[ast::schema::Directive]) -> Self {
        ast_directives.iter()
            .map(|directive| directive.name.clone())
            .collect()
    }

    /// Indicates whether a [`KnownDirective`] is annotated.
    pub fn contains(&self, directive: KnownDirective) -> bool {
        self.names.contains(directive.name())
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub(crate) fn extend(&mut self, other: DirectiveSet) {
        self.names.extend(other.names);
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Directive names in annotation order (without the `@`).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
impl<S: Into<String>> std::iter::FromIterator<S> for DirectiveSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A directive declared in the type graph.
#[derive(Clone, Debug, PartialEq)]
pub enum DirectiveDefinition {
    /// One of GraphQL's own directives (`@deprecated`, `@skip`, ...).
    GraphQLBuiltIn(&'static str),

    /// One of the [`KnownDirective`]s, which are always declared.
    Config(KnownDirective),

    Custom {
        def_location: loc::SchemaDefLocation,
        description: Option<String>,
        name: String,
    },
}
impl DirectiveDefinition {
    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            Self::GraphQLBuiltIn(_) | Self::Config(_) =>
                loc::SchemaDefLocation::BuiltIn,
            Self::Custom { def_location, .. } => def_location.clone(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::GraphQLBuiltIn(name) => name,
            Self::Config(directive) => directive.name(),
            Self::Custom { name, .. } => name.as_str(),
        }
    }
}
