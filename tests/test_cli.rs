// CLI integration tests for lexsentry.
// Tests the command-line interface surface via the compiled binary.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_with_stdin(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lexsentry"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn lexsentry");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for lexsentry")
}

#[test]
fn help_flag_shows_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_lexsentry"))
        .arg("--help")
        .output()
        .expect("failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lexsentry"));
    assert!(stdout.contains("--language"));
    assert!(stdout.contains("--max-examples"));
}

#[test]
fn version_flag_reports_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_lexsentry"))
        .arg("--version")
        .output()
        .expect("failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lexsentry"));
}

#[test]
fn plain_ascii_input_reports_summary_line() {
    let output = run_with_stdin(&[], "hello world\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Analysed 2 tokens in 1 lines"));
}

#[test]
fn show_all_categories_lists_zero_count_sections() {
    let output = run_with_stdin(&["--show-all-categories"], "hello\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NON_UTF8"));
    assert!(stdout.contains("(0 instances)"));
}

#[test]
fn language_suppresses_expected_script() {
    let output = run_with_stdin(&["--language", "eng"], "hello world\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("ASCII_LETTER"));
}

#[test]
fn json_flag_appends_structured_dump() {
    let output = run_with_stdin(&["--json"], "привет hello\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"n_lines\""));
    assert!(stdout.contains("\"letter-script\""));
}

#[test]
fn unreadable_input_path_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_lexsentry"))
        .arg("/nonexistent/path/to/input.txt")
        .output()
        .expect("failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lexsentry"));
}

#[test]
fn output_flag_writes_report_to_file() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let out_path = dir.path().join("report.txt");

    let output = run_with_stdin(&["--output", out_path.to_str().unwrap()], "hello world\n");
    assert!(output.status.success());

    let content = std::fs::read_to_string(&out_path).expect("failed to read report file");
    assert!(content.starts_with("Analysed 2 tokens in 1 lines"));
}
