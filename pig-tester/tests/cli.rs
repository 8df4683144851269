use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "pig-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_writes_json_report() {
    let exe = env!("CARGO_BIN_EXE_pig-tester");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .args([
            "--win", "40", "--games", "5", "--thresholds", "1-8", "--seed", "99", "--report",
            "json", "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let summary: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(summary["strategies"], 8);
    assert_eq!(summary["games_played"], 5 * 28);
    assert_eq!(summary["standings"].as_array().map(Vec::len), Some(8));
}

#[test]
fn cli_console_report_lists_strategies_in_order() {
    let exe = env!("CARGO_BIN_EXE_pig-tester");
    let output = Command::new(exe)
        .args([
            "--win", "25", "--games", "3", "--thresholds", "2,4,6", "--sequential",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.find("staying at k =   2:").expect("k=2 line");
    let second = stdout.find("staying at k =   4:").expect("k=4 line");
    let third = stdout.find("staying at k =   6:").expect("k=6 line");
    assert!(first < second && second < third);
}

#[test]
fn cli_single_strategy_reports_no_games() {
    let exe = env!("CARGO_BIN_EXE_pig-tester");
    let output = Command::new(exe)
        .args(["--thresholds", "20", "--games", "3"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wins, losses staying at k =  20: no games played"));
}

#[test]
fn cli_rejects_invalid_configuration() {
    let exe = env!("CARGO_BIN_EXE_pig-tester");
    let output = Command::new(exe)
        .args(["--games", "0", "--thresholds", "1-3"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("games_per_series"));
}

#[test]
fn cli_rejects_thresholds_beyond_win() {
    let exe = env!("CARGO_BIN_EXE_pig-tester");
    let output = Command::new(exe)
        .args(["--win", "10", "--thresholds", "5-15"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
}
