use crate::types::TypeDefinition;

/// Similar to [`TypeDefinition`] except without the corresponding type
/// metadata.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypeKind {
    Enum,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
impl std::convert::From<&TypeDefinition> for TypeKind {
    fn from(value: &TypeDefinition) -> Self {
        match value {
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
            TypeDefinition::Union(_) => TypeKind::Union,
        }
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
