#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::fixture_path;
use std::fs;
use std::process::Command;

fn ifacegen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ifacegen"));
    cmd.env_remove("RUST_LOG")
        .env("IFACEGEN_LOG_LEVEL", "warn");
    cmd
}

#[test]
fn test_cli_generate_writes_interfaces() {
    let dir = tempfile::tempdir().unwrap();
    let status = ifacegen()
        .arg("generate")
        .arg("--input")
        .arg(fixture_path("sample_web_api.yaml"))
        .arg("--output")
        .arg(dir.path())
        .status()
        .expect("run cli");
    assert!(status.success());

    let employees = fs::read_to_string(dir.path().join("IEmployeesController.generated.cs")).unwrap();
    assert!(employees.contains("[BasePath(\"Employees\")]"));
    assert!(dir.path().join("ISampleController.generated.cs").exists());
}

#[test]
fn test_cli_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let output = ifacegen()
        .args(["generate", "--dry-run", "--output"])
        .arg(&out)
        .arg("--input")
        .arg(fixture_path("sample_web_api.yaml"))
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert!(!out.exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("IEmployeesController.generated.cs"));
}

#[test]
fn test_cli_inspect_json_is_clean_stdout() {
    let output = ifacegen()
        .args(["inspect", "--json", "--input"])
        .arg(fixture_path("sample_web_api.yaml"))
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let services: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(services[0]["interface"], "IEmployeesController");
    assert_eq!(services[0]["base_path"], "Employees");
    assert_eq!(services[1]["name"], "SampleController");
}

#[test]
fn test_cli_strict_fails_on_incomplete_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("snapshot.json");
    fs::write(&input, r#"{ "declarations": [] }"#).unwrap();

    let lenient = ifacegen()
        .args(["generate", "--input"])
        .arg(&input)
        .status()
        .unwrap();
    assert!(lenient.success());

    let strict = ifacegen()
        .args(["generate", "--strict", "--input"])
        .arg(&input)
        .status()
        .unwrap();
    assert_eq!(strict.code(), Some(2));
}

#[test]
fn test_cli_lint_fail_on_error_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("snapshot.yaml");
    fs::write(&input, "declarations: []\n").unwrap();

    let status = ifacegen()
        .args(["lint", "--fail-on-error", "--input"])
        .arg(&input)
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));

    let status = ifacegen()
        .args(["lint", "--input"])
        .arg(fixture_path("sample_web_api.yaml"))
        .arg("--fail-on-error")
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn test_cli_generate_reports_dropped_handlers() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("snapshot.yaml");
    fs::write(
        &input,
        r#"
references:
  - { namespace: Microsoft.AspNetCore.Mvc, name: ControllerBase }
  - { namespace: Microsoft.AspNetCore.Mvc, name: HttpGetAttribute }
declarations:
  - namespace: App
    name: PingController
    visibility: public
    base: Microsoft.AspNetCore.Mvc.ControllerBase
    methods:
      - name: Ping
        visibility: public
        markers: [{ type: Microsoft.AspNetCore.Mvc.HttpGetAttribute }]
      - name: Helper
        visibility: public
"#,
    )
    .unwrap();

    let output = ifacegen()
        .args(["generate", "--dry-run", "--input"])
        .arg(&input)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 public method(s) without a verb marker"), "{stdout}");
}

#[test]
fn test_cli_generate_fails_on_colliding_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("snapshot.yaml");
    fs::write(
        &input,
        r#"
references:
  - { namespace: Microsoft.AspNetCore.Mvc, name: ControllerBase }
declarations:
  - { namespace: A.V1, name: UsersController, visibility: public, base: Microsoft.AspNetCore.Mvc.ControllerBase }
  - { namespace: A.V2, name: UsersController, visibility: public, base: Microsoft.AspNetCore.Mvc.ControllerBase }
"#,
    )
    .unwrap();

    let output = ifacegen()
        .args(["generate", "--force", "--input"])
        .arg(&input)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.path().join("generated").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("A.V1.UsersController"), "{stderr}");
}
