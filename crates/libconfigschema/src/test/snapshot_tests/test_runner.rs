use crate::json_schema;
use crate::markdown;
use crate::test::snapshot_tests::snapshot_test_case::SnapshotTestCase;
use crate::test::snapshot_tests::utils;
use crate::TypeGraph;
use crate::TypeGraphBuilder;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Result of a single snapshot check
#[derive(Debug)]
pub struct SnapshotTestResult {
    pub test_name: String,
    pub passed: bool,
    pub error_message: Option<String>,
    pub file_path: PathBuf,
}
impl SnapshotTestResult {
    fn pass(test_name: String, file_path: PathBuf) -> Self {
        Self {
            test_name,
            passed: true,
            error_message: None,
            file_path,
        }
    }

    fn fail(test_name: String, file_path: PathBuf, error_message: String) -> Self {
        Self {
            test_name,
            passed: false,
            error_message: Some(error_message),
            file_path,
        }
    }
}

/// Collection of snapshot test results
#[derive(Debug, Default)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}
impl SnapshotTestResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| format_detailed_failure(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} snapshot tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let all_passed = self.all_passed();
        let emoji = if all_passed { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");
        let header = format!("{emoji} FIXTURE SNAPSHOT SUMMARY");
        let total = self.results.len();
        let failed = self.results.iter().filter(|r| !r.passed).count();
        let passed = total - failed;

        format!("{banner}\n{header}\n{banner}\nTotal checks: {total}\nPassed: {passed}\nFailed: {failed}\n{banner}")
    }
}

fn format_detailed_failure(result: &SnapshotTestResult) -> String {
    let mut output = format!(
        "❌ {}\n   File: {}\n",
        result.test_name,
        result.file_path.display(),
    );
    if let Some(msg) = &result.error_message {
        output.push_str(&format!("   {msg}\n"));
    }
    output
}

/// Run every fixture under `fixtures_dir`, one fixture per rayon task.
pub fn run_fixture_tests(fixtures_dir: &Path) -> SnapshotTestResults {
    let test_cases = SnapshotTestCase::discover_all(fixtures_dir);

    let results = test_cases
        .par_iter()
        .flat_map_iter(run_fixture)
        .collect::<Vec<_>>();

    SnapshotTestResults { results }
}

fn run_fixture(test_case: &SnapshotTestCase) -> Vec<SnapshotTestResult> {
    let name = &test_case.name;
    let graph = TypeGraphBuilder::new()
        .load_file(&test_case.schema_path)
        .and_then(TypeGraphBuilder::build);
    let graph = match graph {
        Ok(graph) => graph,
        Err(err) => return vec![SnapshotTestResult::fail(
            format!("{name}/schema"),
            test_case.schema_path.clone(),
            format!("Expected: Valid schema\nGot: {err}"),
        )],
    };

    vec![
        check_json_schema(test_case, &graph),
        check_markdown(test_case, &graph),
    ]
}

fn check_json_schema(test_case: &SnapshotTestCase, graph: &TypeGraph) -> SnapshotTestResult {
    let test_name = format!("{}/json", test_case.name);
    let file_path = test_case.expected_json_path.clone();

    let expected = match fs::read_to_string(&file_path) {
        Ok(expected) => expected,
        Err(err) => return SnapshotTestResult::fail(
            test_name,
            file_path,
            format!("Could not read expected JSON: {err}"),
        ),
    };

    let actual = json_schema::compile(graph, &test_case.root_type)
        .map_err(|err| err.to_string())
        .and_then(|compiled| {
            compiled.to_json_string_pretty().map_err(|err| err.to_string())
        });
    let actual = match actual {
        Ok(actual) => actual,
        Err(err) => return SnapshotTestResult::fail(
            test_name,
            file_path,
            format!("Expected: Compiled schema\nGot: {err}"),
        ),
    };

    if utils::normalize_text(&actual) == utils::normalize_text(&expected) {
        SnapshotTestResult::pass(test_name, file_path)
    } else {
        SnapshotTestResult::fail(
            test_name,
            file_path,
            format!("JSON output differs.\n\nExpected:\n{expected}\n\nActual:\n{actual}"),
        )
    }
}

fn check_markdown(test_case: &SnapshotTestCase, graph: &TypeGraph) -> SnapshotTestResult {
    let test_name = format!("{}/markdown", test_case.name);
    let file_path = test_case.expected_md_dir
        .clone()
        .unwrap_or_else(|| test_case.schema_path.clone());

    let expected = match test_case.expected_md_files() {
        Ok(expected) => expected,
        Err(err) => return SnapshotTestResult::fail(
            test_name,
            file_path,
            format!("Could not read expected Markdown: {err}"),
        ),
    };

    let mut actual = markdown::render(graph)
        .into_iter()
        .map(|fragment| (fragment.file_name, fragment.content))
        .collect::<Vec<_>>();
    actual.sort();

    let expected_names = expected.iter().map(|(name, _)| name).collect::<Vec<_>>();
    let actual_names = actual.iter().map(|(name, _)| name).collect::<Vec<_>>();
    if expected_names != actual_names {
        return SnapshotTestResult::fail(
            test_name,
            file_path,
            format!("Expected files: {expected_names:?}\nGot: {actual_names:?}"),
        );
    }

    let mismatches = expected.iter()
        .zip(actual.iter())
        .filter(|((_, expected), (_, actual))| {
            utils::normalize_text(expected) != utils::normalize_text(actual)
        })
        .map(|((name, expected), (_, actual))| {
            format!("{name} differs.\n\nExpected:\n{expected}\n\nActual:\n{actual}")
        })
        .collect::<Vec<_>>();

    if mismatches.is_empty() {
        SnapshotTestResult::pass(test_name, file_path)
    } else {
        SnapshotTestResult::fail(test_name, file_path, mismatches.join("\n\n"))
    }
}
