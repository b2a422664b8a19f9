use crate::directives::DirectiveSet;
use crate::directives::KnownDirective;
use crate::loc;
use crate::types::FieldDefinition;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;

/// Represents a GraphQL interface type defined within some
/// [`TypeGraph`](crate::TypeGraph).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn new(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = FieldDefinition>,
    ) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name.into(), fields))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    pub fn with_directives(mut self, directives: DirectiveSet) -> Self {
        self.0.directives = directives;
        self
    }

    pub fn implementing(mut self, interface_name: impl Into<String>) -> Self {
        self.0.interfaces.push(interface_name.into());
        self
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.0.def_location
    }

    /// The description of this [`InterfaceType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub fn directives(&self) -> &DirectiveSet {
        &self.0.directives
    }

    /// Fields in the order they were declared. Fields added by type
    /// extensions follow the fields of the original definition.
    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.0.fields
    }

    pub fn has_directive(&self, directive: KnownDirective) -> bool {
        self.0.directives.contains(directive)
    }

    /// Names of the interfaces this type declares that it implements, in
    /// declaration order.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interfaces.iter().map(String::as_str).collect()
    }

    pub fn implements_interface(&self, interface_name: &str) -> bool {
        self.0.interfaces.iter().any(|name| name == interface_name)
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}
