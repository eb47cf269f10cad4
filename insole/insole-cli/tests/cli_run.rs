//! Runs the `cop-trajectory` binary on small recordings.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

const PRESSURES: &str = "\
timestamp,foot,sensor1,sensor2,sensor3,sensor4,sensor5,sensor6,sensor7,sensor8,sensor9,sensor10,sensor11,sensor12,sensor13,sensor14,sensor15,sensor16
0,0,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1
0,1,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2
1,0,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1
";

const ANCHORS: &str = "\
timestamp,foot,x,y
0,0,0,6
0,1,10,6
1,0,0,6
";

fn write_inputs(dir: &Path) -> (String, String) {
    let pressure = dir.join("pressure.csv");
    let coordinates = dir.join("coordinates.csv");
    fs::write(&pressure, PRESSURES).unwrap();
    fs::write(&coordinates, ANCHORS).unwrap();
    (
        pressure.to_string_lossy().into_owned(),
        coordinates.to_string_lossy().into_owned(),
    )
}

#[test]
fn json_report() {
    let dir = tempdir().unwrap();
    let (pressure, coordinates) = write_inputs(dir.path());

    let output = Command::new(env!("CARGO_BIN_EXE_cop-trajectory"))
        .args(["--pressure", &pressure, "--coordinates", &coordinates])
        .args(["--format", "json"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["report"]["points"].as_array().unwrap().len(), 3);
    let failures = value["report"]["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["timestamp"], "1");
    assert_eq!(failures[0]["side"], "right");
}

#[test]
fn config_file_and_table() {
    let dir = tempdir().unwrap();
    let (pressure, coordinates) = write_inputs(dir.path());
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"layout": {"center_zone": "corrected"}}"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cop-trajectory"))
        .args(["--pressure", &pressure, "--coordinates", &coordinates])
        .args(["--config", &config.to_string_lossy()])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("Frames analyzed: 3"));
    assert!(text.contains("Failed frames:"));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.csv");
    let missing = missing.to_string_lossy();

    let output = Command::new(env!("CARGO_BIN_EXE_cop-trajectory"))
        .args(["--pressure", &missing, "--coordinates", &missing])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load session"));
}

#[test]
fn unparsable_row_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let (pressure, coordinates) = write_inputs(dir.path());
    let text = PRESSURES.replacen("\n0,1,2,2,", "\n0,1,2,,", 1);
    fs::write(&pressure, text).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cop-trajectory"))
        .args(["--pressure", &pressure, "--coordinates", &coordinates])
        .args(["--format", "json"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["report"]["points"].as_array().unwrap().len(), 2);
    let failures = value["report"]["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 2);
    assert_eq!(failures[0]["timestamp"], "0");
    assert_eq!(failures[0]["side"], "right");
    assert!(
        failures[0]["reason"]
            .as_str()
            .unwrap()
            .starts_with("rejected pressure row")
    );
}
