//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_gsbatch(args: &[&str], envs: &[(&str, &str)]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_gsbatch");
    let mut command = Command::new(bin);
    command
        .args(args)
        .env_remove("GSBATCH_EXECUTABLE")
        .env_remove("GSBATCH_COLORS")
        .env_remove("GSBATCH_PASSPHRASE")
        .env_remove("GSBATCH_SETTINGS");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("failed to run gsbatch binary")
}

#[test]
fn print_renders_invocation() {
    let output = run_gsbatch(&["print", "--executable", "./gsconf", "status"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "./gsconf -c -b 'status'\n");
}

#[test]
fn print_with_colors_omits_no_color_flag() {
    let output = run_gsbatch(&["print", "--colors", "--executable", "./gsconf", "status"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "./gsconf -b 'status'\n");
}

#[test]
fn print_quotes_embedded_quotes() {
    let output = run_gsbatch(
        &["print", "--colors", "--executable", "./gsconf", "exec A 'ls'", "commit --check-remote"],
        &[],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "./gsconf -b 'exec A '\\''ls'\\''' -b 'commit --check-remote'\n");
}

#[test]
fn print_includes_secret_flag_with_passphrase() {
    let output = run_gsbatch(
        &["print", "--colors", "--executable", "./gsconf", "status"],
        &[("GSBATCH_PASSPHRASE", "secret123")],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "./gsconf -s -b 'status'\n");
}

#[test]
fn run_relays_child_output() {
    let output = run_gsbatch(&["run", "--colors", "--executable", "echo", "hello"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "-b hello\n");
}

#[test]
fn run_exits_zero_when_child_fails() {
    // The success flag reflects only the spawn; a failing child still counts.
    let output = run_gsbatch(&["run", "--colors", "--executable", "false", "status"], &[]);
    assert!(output.status.success());
}

#[test]
fn run_with_missing_executable_fails() {
    let output = run_gsbatch(&["run", "--executable", "/nonexistent/gsconf", "status"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to spawn"));
}

#[test]
fn run_json_emits_captured_result() {
    let output = run_gsbatch(&["run", "--json", "--colors", "--executable", "echo", "hi"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON result");
    assert_eq!(value["stdout"], "-b hi\n");
    assert_eq!(value["exit_code"], 0);
}

#[test]
fn run_without_commands_fails() {
    let output = run_gsbatch(&["run"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("COMMAND"));
}

#[test]
fn settings_file_supplies_executable() {
    let path = std::env::temp_dir().join("gsbatch_test_cli_settings.yml");
    std::fs::write(&path, "executable: /opt/gsconf\ncolors: true\n").unwrap();

    let output = run_gsbatch(&["print", "--settings", path.to_str().unwrap(), "status"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, "/opt/gsconf -b 'status'\n");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_gsbatch(&["nonsense"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
