// tests/test_harness.rs
//! Shared helpers for generator integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

/// Path of a declaration file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Strip whitespace and the trailing commas the pretty-printer adds when it
/// breaks a list over several lines.
pub fn normalize(code: &str) -> String {
    let squashed: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    squashed
        .replace(",)", ")")
        .replace(",]", "]")
        .replace(",}", "}")
}

/// The doc comments and body of the generated method `name`.
///
/// Panics if the unit has no such method.
pub fn method_block(unit: &str, name: &str) -> String {
    let lines: Vec<&str> = unit.lines().collect();
    let signature = format!("pub fn {name}(");
    let start = lines
        .iter()
        .position(|line| line.trim_start().starts_with(&signature))
        .unwrap_or_else(|| panic!("no method {name} in:\n{unit}"));

    let indent = &lines[start][..lines[start].len() - lines[start].trim_start().len()];
    let close = format!("{indent}}}");

    let mut first = start;
    while first > 0 && lines[first - 1].trim_start().starts_with("///") {
        first -= 1;
    }
    let last = (start..lines.len())
        .find(|&i| lines[i] == close)
        .unwrap_or_else(|| panic!("unterminated method {name}"));

    lines[first..=last].join("\n")
}
