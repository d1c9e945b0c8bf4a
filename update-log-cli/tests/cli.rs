use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "update-log-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_writes_json_catalog_to_file() {
    let exe = env!("CARGO_BIN_EXE_update-log");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .args(["--format", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let versions: Vec<&str> = value["entries"]
        .as_array()
        .expect("entries array")
        .iter()
        .filter_map(|e| e["version"].as_str())
        .collect();
    assert_eq!(versions, ["1.2.0", "1.1.0", "1.0.0"]);
}

#[test]
fn cli_renders_single_release_as_markdown() {
    let exe = env!("CARGO_BIN_EXE_update-log");
    let output = Command::new(exe)
        .args(["--format", "markdown", "--release", "1.2.0"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("## v1.2.0"));
    assert!(stdout.contains("✨ **New**: Added Update Log to track changes"));
    assert!(!stdout.contains("v1.0.0"));
}

#[test]
fn cli_fails_for_unknown_release() {
    let exe = env!("CARGO_BIN_EXE_update-log");
    let output = Command::new(exe)
        .args(["--release", "9.9.9"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("9.9.9"));
}

#[test]
fn cli_audit_passes_on_bundled_log() {
    let exe = env!("CARGO_BIN_EXE_update-log");
    let output_path = temp_path("audit");
    let status = Command::new(exe)
        .args(["--audit", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("No issues found"));
}
