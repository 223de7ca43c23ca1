#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsl() -> Command {
    cargo_bin_cmd!("rshotlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshotlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a tilt sample file for calibrate tests and return its path.
pub fn write_samples_file(name: &str, lines: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_samples.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, lines.join("\n")).expect("write samples file");
    p
}

/// Record one shot with sensible defaults plus the given extra flags.
pub fn add_shot(db_path: &str, club: &str, extra: &[&str]) {
    let mut args = vec![
        "--db",
        db_path,
        "add",
        "--slope",
        "flat",
        "--club",
        club,
        "--lie",
        "normal",
        "--strength",
        "full",
        "--wind",
        "none",
    ];
    args.extend_from_slice(extra);

    rsl().args(&args).assert().success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates schema via migrations)
    rsl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_shot(db_path, "7I", &["--result", "2,-4", "--distance", "150"]);
    add_shot(db_path, "7I", &["--miss", "shank", "--distance", "120"]);
}
