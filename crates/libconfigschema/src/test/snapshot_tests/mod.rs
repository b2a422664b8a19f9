//! File-based snapshot tests: each directory under `fixtures/` holds a
//! schema plus the JSON Schema document and Markdown files it must produce.
//!
//! A fixture directory contains:
//!
//! * `schema.graphql`: the SDL to compile.
//! * `expected.schema.json`: the exact pretty-printed JSON output.
//! * `root_type.txt` (optional): the root type name, `Query` if absent.
//! * `expected_md/` (optional): every `*.generated.md` file the Markdown
//!   renderer must produce, and no others.

mod snapshot_test_case;
mod test_runner;
mod utils;

#[cfg(test)]
mod tests {
    use crate::test::snapshot_tests::test_runner;
    use crate::test::snapshot_tests::utils;

    #[test]
    fn verify_fixture_snapshot_tests() {
        let fixtures_dir = utils::get_fixtures_dir();

        let results = test_runner::run_fixture_tests(fixtures_dir);

        let all_passed = results.all_passed();
        if !all_passed {
            eprintln!("{}", results.failure_report());
            eprintln!("\n{}", results.summary());
        } else {
            println!("{}", results.summary());
        }

        assert!(!results.results.is_empty(), "No snapshot fixtures were found");
        assert!(
            all_passed,
            "Fixture snapshot tests failed:\n{}",
            results.failure_report()
        );
    }
}
