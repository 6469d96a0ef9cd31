use std::process::{Command, Stdio};

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../debrief-game/tests/fixtures/campaign.json"
);

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "debrief-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn run_report(format: &str, label: &str) -> String {
    let exe = env!("CARGO_BIN_EXE_debrief-report");
    let output_path = temp_path(label);
    let status = Command::new(exe)
        .args(["--save", FIXTURE, "--no-color", "--report", format, "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    std::fs::read_to_string(output_path).expect("read output")
}

#[test]
fn cli_writes_json_report() {
    let content = run_report("json", "json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value["title"], "Mission Accomplished\n23rd March 2000");
    assert_eq!(value["rows"].as_array().map(Vec::len), Some(26));
    assert_eq!(value["statistics"]["craft_owned"], 8);
}

#[test]
fn cli_writes_markdown_report() {
    let content = run_report("markdown", "markdown");
    assert!(content.starts_with("# Mission Accomplished"));
    assert!(content.contains("| Most effective weapon | Laser Rifle |"));
    assert!(content.contains("| Total income | $12,100,000 |"));
}

#[test]
fn cli_writes_console_report_without_color() {
    let content = run_report("console", "console");
    assert!(content.contains("Difficulty .............................       3> Veteran"));
    assert!(content.contains("[ OK ]"));
    assert!(!content.contains('\u{1b}'), "escape codes leaked: {content}");
}

#[test]
fn cli_fails_for_missing_save() {
    let exe = env!("CARGO_BIN_EXE_debrief-report");
    let output = Command::new(exe)
        .args(["--save", "/no/such/campaign.json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no saved campaign"), "{stderr}");
}

#[test]
fn cli_fails_for_invalid_save() {
    let exe = env!("CARGO_BIN_EXE_debrief-report");
    let save_path = temp_path("broken-save");
    std::fs::write(&save_path, r#"{"difficulty": 9}"#).expect("write save");
    let output = Command::new(exe)
        .args(["--save"])
        .arg(&save_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}

#[test]
fn cli_acknowledge_returns_to_menu() {
    let exe = env!("CARGO_BIN_EXE_debrief-report");
    let output = Command::new(exe)
        .args(["--save", FIXTURE, "--no-color", "--acknowledge"])
        .stdin(Stdio::null())
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Debrief Campaign Statistics"));
    assert!(stdout.contains("Returned to main menu."));
}
