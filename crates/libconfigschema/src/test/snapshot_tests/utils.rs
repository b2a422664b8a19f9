use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn get_fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/test/snapshot_tests/fixtures")
    })
}

/// Normalize line endings and strip trailing newlines so fixture files may be
/// saved with or without a final newline.
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", "\n").trim_end_matches('\n').to_string()
}
