use std::fs;
use std::path::Path;
use std::path::PathBuf;

const DEFAULT_ROOT_TYPE: &str = "Query";

/// One fixture directory.
#[derive(Debug, Clone)]
pub struct SnapshotTestCase {
    pub name: String,
    pub schema_path: PathBuf,
    pub root_type: String,
    pub expected_json_path: PathBuf,
    pub expected_md_dir: Option<PathBuf>,
}

impl SnapshotTestCase {
    /// Discovers every fixture directory, sorted by name.
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let Ok(entries) = fs::read_dir(fixtures_dir) else {
            return Vec::new();
        };

        let mut cases = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if !path.is_dir() {
                    return None;
                }

                let name = path.file_name()?.to_str()?.to_string();
                let schema_path = path.join("schema.graphql");
                if !schema_path.is_file() {
                    eprintln!("ERROR: Fixture `{name}` has no schema.graphql");
                    return None;
                }

                let root_type = fs::read_to_string(path.join("root_type.txt"))
                    .map(|text| text.trim().to_string())
                    .unwrap_or_else(|_| DEFAULT_ROOT_TYPE.to_string());

                let expected_md_dir = Some(path.join("expected_md"))
                    .filter(|dir| dir.is_dir());

                Some(Self {
                    name,
                    schema_path,
                    root_type,
                    expected_json_path: path.join("expected.schema.json"),
                    expected_md_dir,
                })
            })
            .collect::<Vec<_>>();

        cases.sort_by(|a, b| a.name.cmp(&b.name));
        cases
    }

    /// `(file name, content)` of every expected Markdown file, sorted by name.
    pub fn expected_md_files(&self) -> std::io::Result<Vec<(String, String)>> {
        let Some(md_dir) = &self.expected_md_dir else {
            return Ok(Vec::new());
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(md_dir)? {
            let path = entry?.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if file_name.ends_with(".generated.md") {
                files.push((file_name.to_string(), fs::read_to_string(&path)?));
            }
        }
        files.sort();
        Ok(files)
    }
}
