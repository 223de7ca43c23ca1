use predicates::str::contains;

mod common;
use common::{rsl, setup_test_db, write_samples_file};

fn init(db_path: &str) {
    rsl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_calibration_stores_mean_offsets() {
    let db_path = setup_test_db("calibrate_mean");
    init(&db_path);

    let samples = write_samples_file(
        "calibrate_mean",
        &["0,5.0,-3.0", "40,5.2,-3.2", "80,5.4,-2.8"],
    );

    rsl()
        .args(["--db", &db_path, "calibrate", "--samples", &samples])
        .assert()
        .success()
        .stdout(contains("x=5.200"))
        .stdout(contains("y=-3.000"));

    rsl()
        .args(["--db", &db_path, "calibrate", "--show"])
        .assert()
        .success()
        .stdout(contains("x=5.200"));
}

#[test]
fn test_empty_sample_file_fails_and_keeps_previous_calibration() {
    let db_path = setup_test_db("calibrate_empty");
    init(&db_path);

    let good = write_samples_file("calibrate_good", &["0,1.0,1.0"]);
    rsl()
        .args(["--db", &db_path, "calibrate", "--samples", &good])
        .assert()
        .success();

    // Comments and blanks only: zero samples before timeout.
    let empty = write_samples_file("calibrate_none", &["# no samples", ""]);
    rsl()
        .args(["--db", &db_path, "calibrate", "--samples", &empty])
        .assert()
        .failure()
        .stderr(contains("no sensor samples"));

    // The earlier offset is still in effect.
    rsl()
        .args(["--db", &db_path, "calibrate", "--show"])
        .assert()
        .success()
        .stdout(contains("x=1.000"));
}

#[test]
fn test_tilt_classification_uses_stored_calibration() {
    let db_path = setup_test_db("calibrate_classify");
    init(&db_path);

    // Device rests on a surface reading (5, -3): that becomes "flat".
    let samples = write_samples_file("calibrate_classify", &["0,5.0,-3.0", "40,5.0,-3.0"]);
    rsl()
        .args(["--db", &db_path, "calibrate", "--samples", &samples])
        .assert()
        .success();

    // Raw (5, -3) matches the offset: classified flat.
    rsl()
        .args([
            "--db", &db_path, "add", "--tilt", "5.0,-3.0", "--club", "7I", "--lie", "normal",
            "--strength", "full", "--wind", "none", "--miss", "top",
        ])
        .assert()
        .success();

    // Raw (10, -3) is +5 beyond the lateral offset: left-up.
    rsl()
        .args([
            "--db", &db_path, "add", "--tilt", "10.0,-3.0", "--club", "7I", "--lie", "normal",
            "--strength", "full", "--wind", "none", "--miss", "top",
        ])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("flat"))
        .stdout(contains("left-up"));
}

#[test]
fn test_explicit_slope_wins_over_tilt_reading() {
    let db_path = setup_test_db("calibrate_override");
    init(&db_path);

    // No calibration stored: zero offset with a warning, and the manual
    // slope suppresses the sensor classification entirely.
    rsl()
        .args([
            "--db", &db_path, "add", "--slope", "toe-down", "--tilt", "30.0,0.0", "--club",
            "7I", "--lie", "normal", "--strength", "full", "--wind", "none", "--miss", "top",
        ])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("toe-down"));
}
