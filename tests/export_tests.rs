mod common;
use common::{add, crew, init_db, login, setup_session, setup_test_db, temp_out};
use predicates::str::contains;
use serde_json::Value;
use std::fs;

fn seeded(name: &str) -> (String, String) {
    let db_path = setup_test_db(name);
    let session = setup_session(name);
    init_db(&db_path);
    login(&db_path, &session, "anna", "leader", "crew");
    add(&db_path, &session, "2024-06-01", "2024-06-05", "Long");
    add(&db_path, &session, "2024-06-02", "2024-06-03", "Short");
    add(&db_path, &session, "2024-07-10", "2024-07-10", "July");
    (db_path, session)
}

#[test]
fn test_export_json_carries_rows() {
    let (db_path, session) = seeded("export_json_rows");
    let out = temp_out("export_json_rows", "json");

    crew()
        .args([
            "--db", &db_path, "--session", &session, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 3);

    let short = rows.iter().find(|r| r["title"] == "Short").expect("Short row");
    assert_eq!(short["visual_row"], 1);
    assert_eq!(short["owner_role"], "leader");
}

#[test]
fn test_export_csv_with_range() {
    let (db_path, session) = seeded("export_csv_range");
    let out = temp_out("export_csv_range", "csv");

    crew()
        .args([
            "--db", &db_path, "--session", &session, "export", "--format", "csv", "--file", &out,
            "--range", "2024-06",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    let header = lines.next().expect("header line");
    assert!(header.contains("visual_row"));
    assert_eq!(lines.count(), 2);
    assert!(content.contains("Long"));
    assert!(!content.contains("July"));
}

#[test]
fn test_export_requires_absolute_path() {
    let (db_path, session) = seeded("export_relative");

    crew()
        .args([
            "--db", &db_path, "--session", &session, "export", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let (db_path, session) = seeded("export_empty_range");
    let out = temp_out("export_empty_range", "csv");

    crew()
        .args([
            "--db", &db_path, "--session", &session, "export", "--file", &out, "--range",
            "2023",
        ])
        .assert()
        .success()
        .stdout(contains("No events found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_force() {
    let (db_path, session) = seeded("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").expect("seed file");

    crew()
        .args(["--db", &db_path, "--session", &session, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "old");

    crew()
        .args(["--db", &db_path, "--session", &session, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("Short"));
}

#[test]
fn test_backup_copies_database() {
    let (db_path, _session) = seeded("backup_copy");
    let out = temp_out("backup_copy", "sqlite");

    crew()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&out).exists());
}
