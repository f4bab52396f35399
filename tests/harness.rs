use std::path::Path;
use std::process::{Command, Output};

use approx::abs_diff_eq;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn run_harness(time_file: &Path, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_judge-executor"));
    command.arg(time_file);
    command.args(args);
    let output = command.output().unwrap();
    eprintln!("Output: {:#?}", output);
    output
}

/// Check the timing file format (one line, 10 fractional digits) and return
/// the recorded time.
fn read_time(time_file: &Path) -> f64 {
    let content = std::fs::read_to_string(time_file).unwrap();
    assert!(content.ends_with('\n'), "missing trailing newline");
    let line = content.trim_end_matches('\n');
    assert!(!line.contains('\n'), "more than one line: {:?}", content);
    let (int, frac) = line.split_once('.').expect("no decimal point");
    assert!(!int.is_empty(), "no integer part: {:?}", line);
    assert!(int.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(frac.len(), 10);
    assert!(frac.chars().all(|c| c.is_ascii_digit()));
    line.parse().unwrap()
}

#[test]
fn test_true() {
    let tmpdir = TempDir::new().unwrap();
    let time_file = tmpdir.path().join("time.txt");
    let output = run_harness(&time_file, &["true"]);
    assert_eq!(output.status.code(), Some(0));
    let time = read_time(&time_file);
    assert!(time < 0.5, "time = {}", time);
}

#[test]
fn test_false() {
    let tmpdir = TempDir::new().unwrap();
    let time_file = tmpdir.path().join("time.txt");
    let output = run_harness(&time_file, &["false"]);
    assert_eq!(output.status.code(), Some(1));
    read_time(&time_file);
}

#[test]
fn test_exit_code_passthrough() {
    let tmpdir = TempDir::new().unwrap();
    let time_file = tmpdir.path().join("time.txt");
    let output = run_harness(&time_file, &["sh", "-c", "exit 42"]);
    assert_eq!(output.status.code(), Some(42));
}

#[test]
fn test_sleep_is_measured() {
    let tmpdir = TempDir::new().unwrap();
    let time_file = tmpdir.path().join("time.txt");
    let output = run_harness(&time_file, &["sleep", "1"]);
    assert_eq!(output.status.code(), Some(0));
    let time = read_time(&time_file);
    assert!(time >= 1.0, "time = {}", time);
    assert!(abs_diff_eq!(time, 1.0, epsilon = 0.5), "time = {}", time);
}

#[test]
fn test_missing_executable() {
    let tmpdir = TempDir::new().unwrap();
    let time_file = tmpdir.path().join("time.txt");
    let output = run_harness(&time_file, &["/no/such/binary"]);
    assert_eq!(output.status.code(), Some(1));
    let time = read_time(&time_file);
    assert!(time < 0.5, "time = {}", time);
}

#[test]
fn test_killed_by_signal() {
    let tmpdir = TempDir::new().unwrap();
    let time_file = tmpdir.path().join("time.txt");
    let output = run_harness(&time_file, &["sh", "-c", "kill -KILL $$"]);
    assert_eq!(output.status.code(), Some(9));
    read_time(&time_file);
}

#[test]
fn test_sigsegv_number_is_reported() {
    let tmpdir = TempDir::new().unwrap();
    let time_file = tmpdir.path().join("time.txt");
    let output = run_harness(&time_file, &["sh", "-c", "kill -SEGV $$"]);
    assert_eq!(output.status.code(), Some(11));
}

#[test]
fn test_hyphen_arguments_pass_through() {
    let tmpdir = TempDir::new().unwrap();
    let time_file = tmpdir.path().join("time.txt");
    let output = run_harness(
        &time_file,
        &["sh", "-c", "[ \"$1\" = -x ] && exit 5 || exit 6", "sh", "-x"],
    );
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_rerun_overwrites_the_timing_file() {
    let tmpdir = TempDir::new().unwrap();
    let time_file = tmpdir.path().join("time.txt");
    let output = run_harness(&time_file, &["sleep", "0.7"]);
    assert_eq!(output.status.code(), Some(0));
    let first = read_time(&time_file);
    assert!(first >= 0.7, "first = {}", first);

    let output = run_harness(&time_file, &["true"]);
    assert_eq!(output.status.code(), Some(0));
    let second = read_time(&time_file);
    assert!(second < 0.5, "second = {}", second);
}

#[test]
fn test_missing_arguments_fail_fast() {
    let output = Command::new(env!("CARGO_BIN_EXE_judge-executor"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_missing_command_fails_fast() {
    let tmpdir = TempDir::new().unwrap();
    let time_file = tmpdir.path().join("time.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_judge-executor"))
        .arg(&time_file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(!time_file.exists());
}

#[test]
fn test_unwritable_timing_file_is_a_harness_failure() {
    let tmpdir = TempDir::new().unwrap();
    // A directory cannot be opened for writing.
    let output = run_harness(tmpdir.path(), &["true"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!output.stderr.is_empty());
}
