use std::process::{Command, Output};

fn tuples_cli_binary() -> &'static str {
    env!("CARGO_BIN_EXE_tuples-cli")
}

fn run(args: &[&str]) -> Output {
    Command::new(tuples_cli_binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run tuples-cli")
}

fn assert_failed_without_document(output: &Output) {
    assert_eq!(output.status.code(), Some(1), "expected exit status 1");
    assert!(
        output.stdout.is_empty(),
        "no document expected on stdout:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn missing_count_is_usage_error() {
    let output = run(&[]);
    assert_failed_without_document(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr missing usage:\n{stderr}");
}

#[test]
fn extra_argument_is_usage_error() {
    let output = run(&["3", "4"]);
    assert_failed_without_document(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr missing usage:\n{stderr}");
}

#[test]
fn non_integer_count_is_rejected() {
    let output = run(&["abc"]);
    assert_failed_without_document(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'abc'"), "stderr missing value:\n{stderr}");
    assert!(
        stderr.contains("N must be a positive integer"),
        "stderr missing hint:\n{stderr}"
    );
}

#[test]
fn zero_and_negative_counts_are_rejected() {
    for value in ["0", "-5"] {
        let output = run(&[value]);
        assert_failed_without_document(&output);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains(&format!("'{value}'")),
            "stderr missing value {value}:\n{stderr}"
        );
    }
}

#[test]
fn oversized_count_is_rejected() {
    let output = run(&["18446744073709551616"]);
    assert_failed_without_document(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'18446744073709551616'"), "{stderr}");
    assert!(stderr.contains("at most"), "{stderr}");
}

#[test]
fn invalid_macro_name_is_rejected() {
    let output = run(&["--name", "not-valid", "2"]);
    assert_failed_without_document(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a valid identifier"), "{stderr}");
}

#[test]
fn help_exits_successfully() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<N>"), "{stdout}");
}
