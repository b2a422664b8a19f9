use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes the path of the schema source the position points into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: P,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.as_ref().to_path_buf(),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where a type, field or directive was defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaDefLocation {
    /// Implicitly defined by this library (built-in scalars and the config
    /// directives).
    BuiltIn,
    Schema(FilePosition),
}
impl std::convert::From<FilePosition> for SchemaDefLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
impl std::fmt::Display for SchemaDefLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BuiltIn => write!(f, "<built-in>"),
            Self::Schema(pos) => write!(f, "{pos}"),
        }
    }
}
