//! Tests for the `genwrap` binary.

mod test_harness;

use std::path::Path;
use std::process::{Command, Output};

use tempdir::TempDir;
use test_harness::fixture;

fn genwrap(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_genwrap"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run genwrap")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn workspace_with(files: &[&str]) -> TempDir {
    let dir = TempDir::new("genwrap-cli").unwrap();
    for name in files {
        std::fs::copy(fixture(name), dir.path().join(name)).unwrap();
    }
    dir
}

#[test]
fn test_help() {
    let dir = workspace_with(&[]);
    let output = genwrap(dir.path(), &["-h"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Usage: genwrap -t TYPE"));
}

#[test]
fn test_usage_errors_exit_2() {
    let dir = workspace_with(&["int.rs"]);
    for args in [
        &[][..],
        &["int.rs"][..],
        &["-t", "Int"][..],
        &["-t"][..],
        &["-t", "Int", "--verbose", "int.rs"][..],
    ] {
        let output = genwrap(dir.path(), args);
        assert_eq!(output.status.code(), Some(2), "args: {args:?}");
        assert!(stderr(&output).contains("Usage: genwrap"), "args: {args:?}");
    }
}

#[test]
fn test_non_rust_input_exits_1() {
    let dir = workspace_with(&["notes.txt"]);
    let output = genwrap(dir.path(), &["-t", "Int", "notes.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not a .rs file: notes.txt"));
}

#[test]
fn test_writes_default_output() {
    let dir = workspace_with(&["int.rs", "string.rs"]);
    let output = genwrap(dir.path(), &["-t", "Int", "int.rs", "string.rs"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let written = std::fs::read_to_string(dir.path().join("int.wrap.rs")).unwrap();
    assert!(written.starts_with("// Generated by genwrap. DO NOT EDIT.\n"));
    assert!(written.contains("/// Generated from int.rs:6."));
    assert!(written.contains("/// Generated from string.rs:4."));
    assert!(!dir.path().join("string.wrap.rs").exists());
}

#[test]
fn test_explicit_output() {
    let dir = workspace_with(&["string.rs"]);
    let output = genwrap(dir.path(), &["-o", "out.rs", "-t", "String", "string.rs"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let written = std::fs::read_to_string(dir.path().join("out.rs")).unwrap();
    assert!(written.contains("pub fn concat(&self, other: &[String]) -> String {"));
    assert!(!dir.path().join("string.wrap.rs").exists());
}

#[test]
fn test_directive_error_exits_1_without_output() {
    let dir = workspace_with(&["bad_reference.rs"]);
    let output = genwrap(dir.path(), &["-t", "Int", "bad_reference.rs"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("bad_reference.rs:2: reference to unknown argument \"rr\""));
    assert!(!dir.path().join("bad_reference.wrap.rs").exists());
}
