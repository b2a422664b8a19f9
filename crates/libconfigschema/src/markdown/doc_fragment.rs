/// A generated Markdown document for one object type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocFragment {
    /// `<TypeName>.generated.md`
    pub file_name: String,
    pub content: String,
}
impl DocFragment {
    pub(crate) fn for_type(type_name: &str, content: String) -> Self {
        Self {
            file_name: format!("{type_name}.generated.md"),
            content,
        }
    }
}
