use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const CSV: &str = "\
id,state,abbr,poverty,povertyMoe,age,ageMoe,income,incomeMoe,healthcare,obesity,smokes
1,Alabama,AL,19.3,0.5,38.6,0.2,42830,598,13.9,33.5,21.1
2,Alaska,AK,11.2,0.9,33.3,0.3,71583,1784,15,29.7,19.9
4,Arizona,AZ,18.2,0.4,36.9,0.1,50255,388,14.4,28.9,16.7
5,Arkansas,AR,18.9,0.6,37.9,0.2,41371,622,16.3,35.9,22.7
";

fn write_data(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("data.csv");
    fs::write(&path, CSV).unwrap();
    path
}

#[test]
fn exports_svg_without_window() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(&dir);
    let out = dir.path().join("chart.svg");

    Command::cargo_bin("census-scatter")
        .unwrap()
        .arg(&data)
        .args(["--axis", "age", "--width", "1000", "--export"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 regions"));

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("width=\"1000\""));
    for abbr in ["AL", "AK", "AZ", "AR"] {
        assert!(svg.contains(abbr));
    }
    assert!(svg.contains("Age (Median)"));
}

#[test]
fn config_file_supplies_initial_axis() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(&dir);
    let config = dir.path().join("chart.json");
    fs::write(&config, r#"{ "initial_axis": "income", "show_trend_line": true }"#).unwrap();
    let out = dir.path().join("chart.svg");

    Command::cargo_bin("census-scatter")
        .unwrap()
        .arg(&data)
        .arg("--config")
        .arg(&config)
        .arg("--export")
        .arg(&out)
        .assert()
        .success();

    // income ticks carry thousands separators
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("50,000"));
}

#[test]
fn missing_data_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.svg");

    Command::cargo_bin("census-scatter")
        .unwrap()
        .arg(dir.path().join("nope.csv"))
        .arg("--export")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
    assert!(!out.exists());
}

#[test]
fn unknown_axis_is_rejected() {
    Command::cargo_bin("census-scatter")
        .unwrap()
        .args(["--axis", "smokes", "--export", "x.svg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("smokes"));
}

#[test]
fn unsupported_export_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_data(&dir);

    Command::cargo_bin("census-scatter")
        .unwrap()
        .arg(&data)
        .arg("--export")
        .arg(dir.path().join("chart.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported export format"));
}
