mod common;
use common::{add, crew, init_db, login, setup_session, setup_test_db};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::path::Path;

fn month_json(db_path: &str, session: &str, month: &str) -> Value {
    let output = crew()
        .args(["--db", db_path, "--session", session, "month", month, "--json"])
        .output()
        .expect("run month --json");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("month json")
}

fn row_of(model: &Value, title: &str) -> u64 {
    model["events"]
        .as_array()
        .expect("events array")
        .iter()
        .find(|e| e["title"] == title)
        .and_then(|e| e["visual_row"].as_u64())
        .unwrap_or_else(|| panic!("no event titled {title}"))
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    crew()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_add_requires_session() {
    let db_path = setup_test_db("add_requires_session");
    let session = setup_session("add_requires_session");
    init_db(&db_path);

    crew()
        .args([
            "--db", &db_path, "--session", &session, "add", "2024-06-01", "--title", "Nope",
        ])
        .assert()
        .failure()
        .stderr(contains("No active session"));
}

#[test]
fn test_login_and_whoami_and_logout() {
    let db_path = setup_test_db("login_whoami");
    let session = setup_session("login_whoami");
    init_db(&db_path);
    login(&db_path, &session, "anna", "leader", "crew");

    crew()
        .args(["--db", &db_path, "--session", &session, "whoami"])
        .assert()
        .success()
        .stdout(contains("anna"))
        .stdout(contains("leader"))
        .stdout(contains("crew"));

    crew()
        .args(["--db", &db_path, "--session", &session, "members"])
        .assert()
        .success()
        .stdout(contains("anna"));

    crew()
        .args(["--db", &db_path, "--session", &session, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out"));

    crew()
        .args(["--db", &db_path, "--session", &session, "whoami"])
        .assert()
        .failure()
        .stderr(contains("No active session"));
}

#[test]
fn test_login_rejects_unknown_role() {
    let db_path = setup_test_db("login_bad_role");
    let session = setup_session("login_bad_role");
    init_db(&db_path);

    crew()
        .args([
            "--db", &db_path, "--session", &session, "login", "--id", "x", "--name", "X",
            "--role", "boss", "--group", "crew",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid role"));
}

#[test]
fn test_login_rejects_blank_group() {
    let db_path = setup_test_db("login_blank_group");
    let session = setup_session("login_blank_group");
    init_db(&db_path);

    crew()
        .args([
            "--db", &db_path, "--session", &session, "login", "--id", "x", "--name", "X",
            "--role", "member", "--group", "   ",
        ])
        .assert()
        .failure()
        .stderr(contains("--group must not be blank"));

    assert!(!Path::new(&session).exists());
}

#[test]
fn test_add_rejects_start_after_end() {
    let db_path = setup_test_db("add_bad_range");
    let session = setup_session("add_bad_range");
    init_db(&db_path);
    login(&db_path, &session, "anna", "leader", "crew");

    crew()
        .args([
            "--db", &db_path, "--session", &session, "add", "2024-06-05", "2024-06-01", "--title",
            "Backwards",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));
}

#[test]
fn test_month_json_rows_for_contained_event() {
    let db_path = setup_test_db("month_rows");
    let session = setup_session("month_rows");
    init_db(&db_path);
    login(&db_path, &session, "anna", "leader", "crew");

    add(&db_path, &session, "2024-06-02", "2024-06-03", "Short");
    add(&db_path, &session, "2024-06-01", "2024-06-05", "Long");
    add(&db_path, &session, "2024-06-08", "2024-06-08", "Later");

    let model = month_json(&db_path, &session, "2024-06");
    assert_eq!(row_of(&model, "Long"), 0);
    assert_eq!(row_of(&model, "Short"), 1);
    assert_eq!(row_of(&model, "Later"), 0);
    assert_eq!(model["rows"], 2);
    assert_eq!(model["window_start"], "2024-05-27");
}

#[test]
fn test_month_grid_shows_titles() {
    let db_path = setup_test_db("month_grid");
    let session = setup_session("month_grid");
    init_db(&db_path);
    login(&db_path, &session, "anna", "leader", "crew");
    add(&db_path, &session, "2024-06-11", "2024-06-13", "Offsite");

    crew()
        .args(["--db", &db_path, "--session", &session, "month", "2024-06"])
        .assert()
        .success()
        .stdout(contains("June 2024"))
        .stdout(contains("1 event"))
        .stdout(contains("▌Offsite"));

    crew()
        .args(["--db", &db_path, "--session", &session, "month", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_day_view_lists_rows() {
    let db_path = setup_test_db("day_view");
    let session = setup_session("day_view");
    init_db(&db_path);
    login(&db_path, &session, "anna", "leader", "crew");
    add(&db_path, &session, "2024-06-01", "2024-06-03", "Sprint");
    add(&db_path, &session, "2024-06-02", "2024-06-02", "Demo");

    crew()
        .args(["--db", &db_path, "--session", &session, "day", "2024-06-02"])
        .assert()
        .success()
        .stdout(contains("[row 0]"))
        .stdout(contains("Sprint"))
        .stdout(contains("[row 1]"))
        .stdout(contains("Demo"));

    crew()
        .args(["--db", &db_path, "--session", &session, "day", "2024-06-04"])
        .assert()
        .success()
        .stdout(contains("No events for 2024-06-04"));
}

#[test]
fn test_member_sees_leader_and_own_events_only() {
    let db_path = setup_test_db("member_visibility");
    let lead = setup_session("member_visibility_lead");
    let u2 = setup_session("member_visibility_u2");
    let u3 = setup_session("member_visibility_u3");
    init_db(&db_path);

    login(&db_path, &lead, "lead", "leader", "crew");
    login(&db_path, &u2, "u2", "member", "crew");
    login(&db_path, &u3, "u3", "member", "crew");

    add(&db_path, &lead, "2024-06-01", "2024-06-02", "L1");
    add(&db_path, &u2, "2024-06-01", "2024-06-02", "M1");
    add(&db_path, &u3, "2024-06-01", "2024-06-02", "M2");

    crew()
        .args(["--db", &db_path, "--session", &u2, "list", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(contains("L1"))
        .stdout(contains("M1"))
        .stdout(contains("M2").not());

    crew()
        .args(["--db", &db_path, "--session", &lead, "list", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(contains("L1"))
        .stdout(contains("M1"))
        .stdout(contains("M2"));

    let member_model = month_json(&db_path, &u2, "2024-06");
    assert_eq!(member_model["events"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(member_model["rows"], 2);
}

#[test]
fn test_groups_are_isolated() {
    let db_path = setup_test_db("group_isolation");
    let a = setup_session("group_isolation_a");
    let b = setup_session("group_isolation_b");
    init_db(&db_path);

    login(&db_path, &a, "anna", "leader", "alpha");
    login(&db_path, &b, "bert", "leader", "beta");
    add(&db_path, &a, "2024-06-01", "2024-06-01", "AlphaOnly");

    crew()
        .args(["--db", &db_path, "--session", &b, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("No events found"));

    crew()
        .args(["--db", &db_path, "--session", &b, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Event #1 not found"));
}

#[test]
fn test_delete_permissions() {
    let db_path = setup_test_db("delete_permissions");
    let lead = setup_session("delete_permissions_lead");
    let u2 = setup_session("delete_permissions_u2");
    let u3 = setup_session("delete_permissions_u3");
    init_db(&db_path);

    login(&db_path, &lead, "lead", "leader", "crew");
    login(&db_path, &u2, "u2", "member", "crew");
    login(&db_path, &u3, "u3", "member", "crew");
    add(&db_path, &u3, "2024-06-01", "2024-06-02", "Trip");

    crew()
        .args(["--db", &db_path, "--session", &u2, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));

    crew()
        .args(["--db", &db_path, "--session", &lead, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    crew()
        .args(["--db", &db_path, "--session", &lead, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("No events found"));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let db_path = setup_test_db("delete_confirm");
    let session = setup_session("delete_confirm");
    init_db(&db_path);
    login(&db_path, &session, "anna", "leader", "crew");
    add(&db_path, &session, "2024-06-01", "2024-06-01", "Keep");

    crew()
        .args(["--db", &db_path, "--session", &session, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    crew()
        .args(["--db", &db_path, "--session", &session, "list", "--period", "2024-06"])
        .assert()
        .success()
        .stdout(contains("Keep"));

    crew()
        .args(["--db", &db_path, "--session", &session, "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));
}

#[test]
fn test_add_show_prints_updated_month() {
    let db_path = setup_test_db("add_show");
    let session = setup_session("add_show");
    init_db(&db_path);
    login(&db_path, &session, "anna", "leader", "crew");

    crew()
        .args([
            "--db", &db_path, "--session", &session, "add", "2024-06-11", "--title", "Retro",
            "--show",
        ])
        .assert()
        .success()
        .stdout(contains("June 2024"))
        .stdout(contains("▌Retro"))
        .stdout(contains("added"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    let session = setup_session("log_ops");
    init_db(&db_path);
    login(&db_path, &session, "anna", "leader", "crew");
    add(&db_path, &session, "2024-06-01", "2024-06-01", "Logged");

    crew()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("login"))
        .stdout(contains("add"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    let session = setup_session("db_info");
    init_db(&db_path);
    login(&db_path, &session, "anna", "leader", "crew");
    add(&db_path, &session, "2024-06-01", "2024-06-03", "Counted");

    crew()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total events"))
        .stdout(contains("Integrity check passed"));
}
