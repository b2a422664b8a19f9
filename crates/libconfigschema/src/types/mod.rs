mod enum_type;
mod field_definition;
mod interface_type;
mod object_or_interface_type_data;
mod object_type;
mod scalar_type;
mod type_definition;
mod type_kind;
mod type_reference;
mod union_type;

pub use enum_type::EnumType;
pub use field_definition::FieldDefinition;
pub use interface_type::InterfaceType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_type::ObjectType;
pub(crate) use scalar_type::BUILTIN_SCALAR_NAMES;
pub use scalar_type::ScalarType;
pub use type_definition::TypeDefinition;
pub use type_kind::TypeKind;
pub use type_reference::ResolvedTypeRef;
pub use type_reference::TypeReference;
pub use union_type::UnionType;
