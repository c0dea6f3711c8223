//! End-to-end tests for CLI exit codes.
//!
//! - Exit code 0: success
//! - Exit code 1: any error, the release integrity check included
//! - Exit code 2: invalid command-line usage (handled by clap)

mod common;
use common::prelude::*;

#[test]
fn test_exit_code_success() {
    let fixture = TestFixture::new().with_project(descriptors::MINIMAL);
    fixture.command().arg("pom").assert().code(0);
}

#[test]
fn test_exit_code_help() {
    TestFixture::new().command().arg("--help").assert().code(0);
}

#[test]
fn test_exit_code_version() {
    TestFixture::new()
        .command()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("pomgen"));
}

#[test]
fn test_exit_code_error_descriptor_not_found() {
    TestFixture::new()
        .command()
        .arg("pom")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load project descriptor"));
}

#[test]
fn test_exit_code_error_invalid_yaml() {
    let fixture = TestFixture::new().with_project(descriptors::INVALID_YAML);
    fixture
        .command()
        .arg("properties")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Descriptor parsing error"));
}

#[test]
fn test_exit_code_error_bad_coordinate() {
    let fixture = TestFixture::new().with_project(
        "name: widget\nversion: \"1.0.0\"\ndependencies:\n  - [a/b/c, \"1.0\"]\n",
    );
    fixture
        .command()
        .arg("pom")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("a/b/c"));
}

#[test]
fn test_exit_code_error_snapshot_in_release() {
    let fixture = TestFixture::new().with_project(descriptors::SNAPSHOT_DEPENDENCY);
    fixture.command().arg("pom").assert().code(1);
}

#[test]
fn test_exit_code_usage_error() {
    TestFixture::new()
        .command()
        .arg("frobnicate")
        .assert()
        .code(2);
}

#[test]
fn test_exit_code_unknown_log_level() {
    TestFixture::new()
        .command()
        .args(["--log-level", "loud", "pom"])
        .assert()
        .code(2);
}
