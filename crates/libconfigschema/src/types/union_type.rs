use crate::directives::DirectiveSet;
use crate::loc;

/// Represents a GraphQL union type defined within some
/// [`TypeGraph`](crate::TypeGraph).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: DirectiveSet,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        members: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::BuiltIn,
            description: None,
            directives: DirectiveSet::new(),
            members: members.into_iter().map(Into::into).collect(),
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

    /// An ordered list of the names of each type defined as a member of this
    /// union.
    ///
    /// The order retains the order of members defined on the union type in
    /// the schema. Members added by type extensions follow, in the order the
    /// extensions were loaded.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.iter().map(String::as_str).collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
