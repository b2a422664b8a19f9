use crate::directives::DirectiveSet;
use crate::loc;

/// Names of the scalars every GraphQL schema defines implicitly.
pub(crate) const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: DirectiveSet,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::BuiltIn,
            description: None,
            directives: DirectiveSet::new(),
            name: name.into(),
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

    pub fn is_builtin(&self) -> bool {
        BUILTIN_SCALAR_NAMES.contains(&self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
