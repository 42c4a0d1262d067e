use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_grid(dir: &Path, width: u32, height: u32, body: &[u8]) -> PathBuf {
    let mut bytes = width.to_ne_bytes().to_vec();
    bytes.extend_from_slice(&height.to_ne_bytes());
    bytes.extend_from_slice(body);
    let path = dir.join("grid.bin");
    fs::write(&path, bytes).expect("write grid");
    path
}

#[allow(deprecated)]
fn stationmap() -> Command {
    let mut cmd = Command::cargo_bin("stationmap").expect("binary");
    cmd.env_remove("STATIONMAP_STRATEGY").env_remove("RUST_LOG");
    cmd
}

#[test]
fn stattrace_session() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid(temp.path(), 4, 1, &[1, 1, 0, 2]);

    stationmap()
        .arg(&grid)
        .write_stdin("STATTRACE 0\nexit\n")
        .assert()
        .success()
        .stdout(
            "STAT0: {CORDS: {3, 0}} (TOTAL 1) ->{\n\
             \tHOUSE0: {CORDS: {1, 0}; SIZE: {2, 1}} (distance: 2)\n}\n",
        );
}

#[test]
fn empty_grid_session() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid(temp.path(), 2, 2, &[0, 0, 0, 0]);

    stationmap()
        .arg(&grid)
        .write_stdin("SHOW HOUSE\nSTATTRACE 0\nFOO BAR\nEXIT\n")
        .assert()
        .success()
        .stdout(
            "NO MATCHING STATIONS FOUND\n\
             INVALID COMMAND, type help to see all available commands\n",
        );
}

#[test]
fn end_of_input_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid(temp.path(), 1, 1, &[2]);

    stationmap()
        .arg(&grid)
        .write_stdin("select station 0\n")
        .assert()
        .success()
        .stdout("STAT0: {CORDS: {0, 0}}\n");
}

#[test]
fn missing_argument_is_usage_error() {
    stationmap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_file_aborts_before_queries() {
    let temp = TempDir::new().unwrap();

    stationmap()
        .arg(temp.path().join("absent.bin"))
        .write_stdin("HELP\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("No such file or directory"));
}

#[test]
fn short_body_is_reported() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid(temp.path(), 3, 3, &[1, 0, 2]);

    stationmap()
        .arg(&grid)
        .assert()
        .failure()
        .stderr(predicate::str::contains("shorter than expected"));
}

#[test]
fn unknown_strategy_is_rejected() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid(temp.path(), 1, 1, &[0]);

    stationmap()
        .arg(&grid)
        .args(["--strategy", "kdtree"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("kdtree"))
        .stderr(predicate::str::contains("brute-force"));
}

#[test]
fn invalid_utf8_input_keeps_session_alive() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid(temp.path(), 3, 1, &[1, 0, 2]);

    stationmap()
        .arg(&grid)
        .write_stdin(&b"\xff\xfe\nSELECT STATION 0\nEXIT\n"[..])
        .assert()
        .success()
        .stdout(
            "INVALID COMMAND, type help to see all available commands\n\
             STAT0: {CORDS: {2, 0}}\n",
        );
}

#[test]
fn strategies_agree_on_output() {
    let temp = TempDir::new().unwrap();
    let body = [
        1, 0, 0, 2, 0, //
        0, 0, 1, 0, 0, //
        2, 0, 0, 0, 1, //
        0, 1, 0, 2, 0, //
    ];
    let grid = write_grid(temp.path(), 5, 4, &body);
    let script = "HOUSEREL ALL\nSTATTRACE 0\nSTATTRACE 1\nSTATTRACE 2\nEXIT\n";

    let outputs: Vec<Vec<u8>> = ["brute-force", "spatial"]
        .iter()
        .map(|strategy| {
            stationmap()
                .arg(&grid)
                .env("STATIONMAP_STRATEGY", strategy)
                .write_stdin(script)
                .output()
                .expect("run")
                .stdout
        })
        .collect();
    assert!(!outputs[0].is_empty());
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn export_json_writes_relations() {
    let temp = TempDir::new().unwrap();
    let grid = write_grid(temp.path(), 4, 1, &[1, 1, 0, 2]);
    let export = temp.path().join("relations.json");

    stationmap()
        .arg(&grid)
        .arg("--export-json")
        .arg(&export)
        .write_stdin("EXIT\n")
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&fs::read(&export).unwrap()).unwrap();
    assert_eq!(json["houses"][0]["center_x"], 1);
    assert_eq!(json["stations"][0]["x"], 3);
    assert_eq!(json["assignments"][0]["distance"], 2);
}
