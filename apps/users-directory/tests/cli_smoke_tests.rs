//! CLI smoke tests for the users-directory binary
//!
//! These run the real binary: help output, configuration checks, the RUT
//! helpers and a short JSON-lines session over stdin/stdout.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Helper to run the users-directory binary with given arguments
fn run_users_directory(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_users-directory"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute users-directory")
}

/// Helper to run a session, feeding `input` on stdin
fn run_session(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_users-directory"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn users-directory");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write session input");

    child.wait_with_output().expect("Failed to wait for session")
}

/// Config with no simulated latency, rooted in `dir`
fn fast_config(dir: &Path, seed: bool) -> PathBuf {
    let config_path = dir.join("fast.yaml");
    let config_content = format!(
        r#"
home_dir: "{}"
logging:
  default:
    console_level: warn
modules:
  users_directory:
    latency_ms: 0
    count_latency_ms: 0
    seed_demo_users: {seed}
"#,
        dir.to_string_lossy().replace('\\', "/")
    );
    std::fs::write(&config_path, config_content).expect("Failed to write config file");
    config_path
}

#[test]
fn test_cli_help_command() {
    let output = run_users_directory(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("users-directory"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    for subcommand in ["session", "rut", "check"] {
        assert!(stdout.contains(subcommand), "Should list '{subcommand}'");
    }
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_invalid_command() {
    let output = run_users_directory(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "Should report an error: {stderr}");
}

#[test]
fn test_cli_config_validation_missing_file() {
    for flag in ["--config", "-c"] {
        let output = run_users_directory(&[flag, "/nonexistent/config.yaml", "check"]);

        assert!(!output.status.success(), "Should fail with missing config");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Config file not found"),
            "Should mention the missing config file: {stderr}"
        );
    }
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("invalid.yaml");

    std::fs::write(&config_path, "invalid: yaml: content: [unclosed")
        .expect("Failed to write file");

    let output = run_users_directory(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");
}

#[test]
fn test_cli_config_validation_bad_module_section() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("bad_module.yaml");

    let config_content = format!(
        "home_dir: \"{}\"\nmodules:\n  users_directory:\n    page_size: 10\n",
        temp_dir.path().to_string_lossy().replace('\\', "/")
    );
    std::fs::write(&config_path, config_content).expect("Failed to write config file");

    let output = run_users_directory(&["--config", config_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Unknown module keys should be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("users_directory"), "{stderr}");
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("valid.yaml");

    let config_content = format!(
        r#"
home_dir: "{}"
auth:
  demo_password: "secret"
logging:
  default:
    console_level: info
    file: "logs/users.log"
    file_level: info
    max_backups: 3
    max_size_mb: 10
modules:
  users_directory:
    latency_ms: 100
"#,
        temp_dir.path().to_string_lossy().replace('\\', "/")
    );
    std::fs::write(&config_path, config_content).expect("Failed to write config file");

    let output = run_users_directory(&["--config", config_path.to_str().unwrap(), "check"]);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success(), "Should succeed with valid config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"), "{stdout}");
    assert!(stdout.contains("demo_password: secret"), "{stdout}");
}

#[test]
fn test_cli_print_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = fast_config(temp_dir.path(), true);

    let output = run_users_directory(&[
        "--config",
        config_path.to_str().unwrap(),
        "-vv",
        "--print-config",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("console_level: trace"), "{stdout}");
    assert!(stdout.contains("users_directory"), "{stdout}");
}

#[test]
fn test_cli_rut_helpers() {
    let output = run_users_directory(&["rut", "validate", "12.345.678-5"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "RUT válido");

    let output = run_users_directory(&["rut", "validate", "12.345.678-9"]);
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "RUT inválido");

    let output = run_users_directory(&["rut", "format", "123456785"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "12.345.678-5");
}

#[test]
fn test_cli_session_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = fast_config(temp_dir.path(), true);

    let input = [
        r#"{"op":"count"}"#,
        r#"{"op":"login","username":"ana","password":"1234"}"#,
        r#"{"op":"count"}"#,
        r#"{"op":"get","id":"6f1c2a4e-9d3b-4c8a-8e57-1b0f3a2d0001"}"#,
        "garbage",
    ]
    .join("\n");

    let output = run_session(&["--config", config_path.to_str().unwrap(), "session"], &input);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success());

    let replies: Vec<serde_json::Value> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).expect("every stdout line is JSON"))
        .collect();

    assert_eq!(replies.len(), 5);
    assert_eq!(replies[0]["message"], "Debe iniciar sesión");
    assert_eq!(replies[1]["data"]["username"], "ana");
    assert_eq!(replies[2]["data"], 2);
    assert_eq!(replies[3]["data"]["fullName"], "Juan Pérez");
    assert_eq!(replies[4]["success"], false);
}

#[test]
fn test_cli_session_is_default_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = fast_config(temp_dir.path(), false);

    let output = run_session(
        &["--config", config_path.to_str().unwrap()],
        "{\"op\":\"login\",\"username\":\"ana\",\"password\":\"1234\"}\n{\"op\":\"list\"}\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let last: serde_json::Value =
        serde_json::from_str(stdout.lines().last().expect("two replies")).unwrap();
    assert_eq!(last, serde_json::json!({ "success": true, "data": [] }));
}
