#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use ifacegen::symbols::{load_declarations, DeclarationSet};
use std::path::PathBuf;

pub const CONTRACTS: &str = "global::RestEase.SampleWebApi.Contracts";

/// Path of a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The EmployeesController / SampleController snapshot.
pub fn sample_web_api() -> DeclarationSet {
    load_declarations(&fixture_path("sample_web_api.yaml")).expect("load sample fixture")
}

/// `global::System.Threading.Tasks.Task<inner>`
pub fn task_of(inner: &str) -> String {
    format!("global::System.Threading.Tasks.Task<{inner}>")
}

/// Lines of `source` with surrounding whitespace removed, blanks dropped.
pub fn trimmed_lines(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}
