use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "roadtrip-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn roadtrip() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_roadtrip"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_default_run_prints_route_trace() {
    let output = roadtrip().output().expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Run route 0"));
    assert!(stdout.contains("Run route 1"));
    assert!(stdout.contains("Refuel Sedan"));
    assert!(stdout.contains("Unable to drive the route"));
    assert!(stdout.contains("Bicycle status: Mileage(km)=1758"));
}

#[test]
fn cli_list_routes_writes_output() {
    let output_path = temp_path("list");
    let status = roadtrip()
        .args(["--list-routes", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    assert!(content.contains("Available routes"));
    assert!(content.contains("Moscow (0, 0)"));
    assert!(content.contains("Available vehicles"));
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_json_report_to_file() {
    let output_path = temp_path("json");
    let output = roadtrip()
        .args(["--report", "json", "--routes", "1", "--vehicles", "bus", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value["runs"][0]["index"], 1);
    assert_eq!(value["runs"][0]["reports"][0]["outcome"]["result"], "aborted");
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_warns_on_unknown_selection_and_still_succeeds() {
    let output = roadtrip()
        .args(["--routes", "9", "--vehicles", "tram"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown route"));
    assert!(stderr.contains("unknown vehicle kind 'tram'"));
}

#[test]
fn cli_verbose_json_stdout_stays_parseable() {
    let output = roadtrip()
        .args(["--verbose", "--report", "json", "--routes", "1", "--vehicles", "bicycle"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["runs"][0]["index"], 1);
    assert_eq!(value["runs"][0]["reports"][0]["vehicle"], "Bicycle");
}

#[test]
fn cli_all_unknown_vehicles_drive_nothing() {
    let output = roadtrip().args(["--vehicles", "tram"]).output().expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("status"));
    assert!(!stdout.contains("Refuel"));
}

#[test]
fn cli_output_file_has_no_ansi_codes() {
    let output_path = temp_path("plain");
    let status = Command::new(env!("CARGO_BIN_EXE_roadtrip"))
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["--verbose", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    assert!(content.contains("Run route 0"));
    assert!(!content.contains('\x1b'));
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_rejects_unknown_report_format() {
    let output = roadtrip().args(["--report", "xml"]).output().expect("run cli");
    assert!(!output.status.success());
}
