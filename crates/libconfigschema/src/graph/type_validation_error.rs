use crate::loc;
use crate::types::TypeKind;
use thiserror::Error;

/// A reference inside an otherwise well-formed [`TypeGraph`](crate::TypeGraph)
/// that cannot be resolved.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "`{type_name}` declares that it implements `{interface_name}`, which \
        is a {actual_kind} type rather than an interface ({location})"
    )]
    ImplementsNonInterfaceType {
        actual_kind: TypeKind,
        interface_name: String,
        location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "`@{directive_name}` is annotated on `{annotated_on}` but no such \
        directive is defined ({location})"
    )]
    UndefinedDirective {
        annotated_on: String,
        directive_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error(
        "`{type_name}.{field_name}` refers to undefined type \
        `{undefined_type_name}` ({location})"
    )]
    UndefinedFieldType {
        field_name: String,
        location: loc::SchemaDefLocation,
        type_name: String,
        undefined_type_name: String,
    },

    #[error(
        "`{type_name}` declares that it implements undefined interface \
        `{interface_name}` ({location})"
    )]
    UndefinedInterface {
        interface_name: String,
        location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "Union `{union_name}` includes undefined member type `{member_name}` \
        ({location})"
    )]
    UndefinedUnionMember {
        location: loc::SchemaDefLocation,
        member_name: String,
        union_name: String,
    },
}
