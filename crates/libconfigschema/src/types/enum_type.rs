use crate::directives::DirectiveSet;
use crate::loc;

/// Represents a GraphQL enum type defined within some
/// [`TypeGraph`](crate::TypeGraph).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: DirectiveSet,
    pub(crate) name: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::BuiltIn,
            description: None,
            directives: DirectiveSet::new(),
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &DirectiveSet {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Value names in declaration order.
    pub fn value_names(&self) -> Vec<&str> {
        self.values.iter().map(String::as_str).collect()
    }
}
