use crate::directives::DirectiveSet;
use crate::loc;
use crate::types::EnumType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::UnionType;

/// Represents a type defined within some [`TypeGraph`](crate::TypeGraph).
///
/// Input object types are intentionally absent: they never describe the
/// shape of configuration data.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Enum(EnumType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl TypeDefinition {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Self::Enum(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    pub fn directives(&self) -> &DirectiveSet {
        match self {
            Self::Enum(t) => t.directives(),
            Self::Interface(t) => t.directives(),
            Self::Object(t) => t.directives(),
            Self::Scalar(t) => t.directives(),
            Self::Union(t) => t.directives(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}
impl std::convert::From<EnumType> for TypeDefinition {
    fn from(value: EnumType) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InterfaceType> for TypeDefinition {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(value)
    }
}
impl std::convert::From<ObjectType> for TypeDefinition {
    fn from(value: ObjectType) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ScalarType> for TypeDefinition {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}
impl std::convert::From<UnionType> for TypeDefinition {
    fn from(value: UnionType) -> Self {
        Self::Union(value)
    }
}
