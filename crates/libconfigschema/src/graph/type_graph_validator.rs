use crate::directives::DirectiveSet;
use crate::graph::TypeValidationError;
use crate::loc;
use crate::types::FieldDefinition;
use crate::types::TypeDefinition;
use crate::TypeGraph;

/// Checks that every name referenced inside a [`TypeGraph`] resolves: field
/// types, union members, implemented interfaces and directive annotations.
pub(crate) struct TypeGraphValidator<'graph> {
    errors: Vec<TypeValidationError>,
    graph: &'graph TypeGraph,
}
impl<'graph> TypeGraphValidator<'graph> {
    pub fn new(graph: &'graph TypeGraph) -> Self {
        Self {
            errors: vec![],
            graph,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let graph = self.graph;
        for type_def in graph.types.values() {
            self.validate_directives(
                type_def.name(),
                type_def.def_location(),
                type_def.directives(),
            );

            match type_def {
                TypeDefinition::Enum(_) | TypeDefinition::Scalar(_) => (),

                TypeDefinition::Interface(iface_type) => {
                    self.validate_interfaces(
                        iface_type.name(),
                        iface_type.def_location(),
                        iface_type.interface_names(),
                    );
                    self.validate_fields(iface_type.name(), iface_type.fields().values());
                },

                TypeDefinition::Object(obj_type) => {
                    self.validate_interfaces(
                        obj_type.name(),
                        obj_type.def_location(),
                        obj_type.interface_names(),
                    );
                    self.validate_fields(obj_type.name(), obj_type.fields().values());
                },

                TypeDefinition::Union(union_type) => {
                    for member_name in union_type.member_type_names() {
                        if !graph.types.contains_key(member_name) {
                            self.errors.push(TypeValidationError::UndefinedUnionMember {
                                location: union_type.def_location().clone(),
                                member_name: member_name.to_string(),
                                union_name: union_type.name().to_string(),
                            });
                        }
                    }
                },
            }
        }

        self.errors
    }

    fn validate_directives(
        &mut self,
        annotated_on: &str,
        location: &loc::SchemaDefLocation,
        directives: &DirectiveSet,
    ) {
        for directive_name in directives.names() {
            if !self.graph.directive_defs.contains_key(directive_name) {
                self.errors.push(TypeValidationError::UndefinedDirective {
                    annotated_on: annotated_on.to_string(),
                    directive_name: directive_name.to_string(),
                    location: location.clone(),
                });
            }
        }
    }

    fn validate_fields<'a>(
        &mut self,
        type_name: &str,
        fields: impl Iterator<Item = &'a FieldDefinition>,
    ) {
        for field in fields {
            self.validate_directives(
                &format!("{type_name}.{}", field.name()),
                field.def_location(),
                field.directives(),
            );

            let base_name = field.type_ref().base_name();
            if !self.graph.types.contains_key(base_name) {
                self.errors.push(TypeValidationError::UndefinedFieldType {
                    field_name: field.name().to_string(),
                    location: field.def_location().clone(),
                    type_name: type_name.to_string(),
                    undefined_type_name: base_name.to_string(),
                });
            }
        }
    }

    fn validate_interfaces(
        &mut self,
        type_name: &str,
        location: &loc::SchemaDefLocation,
        interface_names: Vec<&str>,
    ) {
        for interface_name in interface_names {
            match self.graph.types.get(interface_name) {
                Some(TypeDefinition::Interface(_)) => (),

                Some(other_type) =>
                    self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                        actual_kind: other_type.kind(),
                        interface_name: interface_name.to_string(),
                        location: location.clone(),
                        type_name: type_name.to_string(),
                    }),

                None =>
                    self.errors.push(TypeValidationError::UndefinedInterface {
                        interface_name: interface_name.to_string(),
                        location: location.clone(),
                        type_name: type_name.to_string(),
                    }),
            }
        }
    }
}
