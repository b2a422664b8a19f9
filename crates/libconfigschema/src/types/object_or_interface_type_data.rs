use crate::directives::DirectiveSet;
use crate::loc;
use crate::types::FieldDefinition;
use indexmap::IndexMap;

/// State shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: DirectiveSet,
    pub(crate) fields: IndexMap<String, FieldDefinition>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(crate) fn new(
        name: String,
        fields: impl IntoIterator<Item = FieldDefinition>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::BuiltIn,
            description: None,
            directives: DirectiveSet::new(),
            fields: fields.into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
            interfaces: vec![],
            name,
        }
    }
}
