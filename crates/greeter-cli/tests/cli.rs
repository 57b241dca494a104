//! End-to-end tests for the `greeter` binary.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn greets_valid_name_on_stdout() {
    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.args(["greet", "Alice"])
        .assert()
        .success()
        .stdout("Hello, Alice!\n");
}

#[test]
fn greets_multibyte_name() {
    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.args(["greet", "世界"])
        .assert()
        .success()
        .stdout("Hello, 世界!\n");
}

#[test]
fn missing_name_is_validation_error() {
    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.args(["--output-format", "plain", "greet"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("name cannot be empty"));
}

#[test]
fn overlong_name_is_validation_error() {
    let name = "a".repeat(101);
    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.args(["--output-format", "plain", "greet", name.as_str()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("name too long"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn json_error_output() {
    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.args(["--output-format", "json", "greet", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#""kind":"validation""#))
        .stderr(predicate::str::contains(r#""exit_code":2"#));
}

#[test]
fn quiet_still_prints_greeting() {
    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.args(["-q", "greet", "Ada"])
        .assert()
        .success()
        .stdout("Hello, Ada!\n");
}

#[test]
fn missing_explicit_config_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.arg("--config")
        .arg(&path)
        .args(["greet", "Ada"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_file_format_is_listed() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[output]\nformat = \"plain\"").unwrap();

    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.arg("--config")
        .arg(file.path())
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout("output.format = plain\n");
}

#[test]
fn unknown_config_key_fails() {
    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.args(["--output-format", "plain", "config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn shell_completions() {
    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn version_flag() {
    let mut cmd = cargo_bin_cmd!("greeter");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
