use predicates::str::contains;
use std::fs;

mod common;
use common::{add_shot, init_db_with_data, rsl, setup_test_db, temp_out};

#[test]
fn test_export_csv_contains_header_and_shots() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv", "csv");

    rsl()
        .args(["--db", &db_path, "export", "csv", "--out", &out])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,date,slope,club,"), "{content}");
    assert!(content.contains("shank"), "{content}");
    assert!(content.contains("flat"), "{content}");
    assert!(content.contains("150"), "{content}");
}

#[test]
fn test_export_json_uses_db_vocabulary() {
    let db_path = setup_test_db("export_json");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_shot(
        &db_path,
        "PW",
        &[
            "--result",
            "2,-4",
            "--distance",
            "80",
            "--wind",
            "up-left-strong",
            "--feeling",
            "great",
        ],
    );

    let out = temp_out("export_json", "json");

    rsl()
        .args(["--db", &db_path, "export", "json", "--out", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let shot = &parsed.as_array().expect("array of shots")[0];
    assert_eq!(shot["club"], "PW");
    assert_eq!(shot["slope"], "flat");
    assert_eq!(shot["wind"], "up-left-strong");
    assert_eq!(shot["feeling"], "great");
    assert_eq!(shot["result"]["x"], 2.0);
    assert_eq!(shot["result"]["y"], -4.0);
    assert!(shot["miss_type"].is_null());
}
