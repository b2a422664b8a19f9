use crate::ast;

/// The declared type of a [`FieldDefinition`](crate::types::FieldDefinition):
/// a type name wrapped in any combination of list and required (non-null)
/// layers.
///
/// `[Int!]!` is `Required(List(Required(Named("Int"))))`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeReference {
    Named(String),
    List(Box<TypeReference>),
    Required(Box<TypeReference>),
}
impl TypeReference {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(inner: TypeReference) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn required(inner: TypeReference) -> Self {
        Self::Required(Box::new(inner))
    }

    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        match ast_type {
            ast::schema::Type::NamedType(name) =>
                Self::Named(name.to_string()),
            ast::schema::Type::ListType(inner) =>
                Self::list(Self::from_ast_type(inner)),
            ast::schema::Type::NonNullType(inner) =>
                Self::required(Self::from_ast_type(inner)),
        }
    }

    /// Recursively unwrap this reference and return the inner-most type name.
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::List(inner) | Self::Required(inner) => inner.base_name(),
        }
    }

    /// Whether a list layer appears anywhere in this reference.
    pub fn is_list(&self) -> bool {
        match self {
            Self::Named(_) => false,
            Self::List(_) => true,
            Self::Required(inner) => inner.is_list(),
        }
    }

    /// Whether the outermost layer is [`TypeReference::Required`].
    ///
    /// Required-ness of list elements is not considered: `[String!]` is an
    /// optional field.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required(_))
    }

    /// Unwrap this reference into its base type name plus whether the field
    /// is a list and whether the field itself is required.
    pub fn resolve(&self) -> ResolvedTypeRef<'_> {
        ResolvedTypeRef {
            base_name: self.base_name(),
            is_list: self.is_list(),
            is_required: self.is_required(),
        }
    }
}
impl std::fmt::Display for TypeReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Required(inner) => write!(f, "{inner}!"),
        }
    }
}

/// The result of [`TypeReference::resolve()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolvedTypeRef<'a> {
    pub base_name: &'a str,
    pub is_list: bool,
    pub is_required: bool,
}
