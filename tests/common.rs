#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use crewcal::models::event::Event;
use crewcal::models::role::Role;
use crewcal::models::viewer::Viewer;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn crew() -> Command {
    cargo_bin_cmd!("crewcal")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_crewcal.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Unique session file path, removed if left over from a previous run
pub fn setup_session(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_crewcal_session.yml", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_crewcal_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    crew()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn login(db_path: &str, session: &str, id: &str, role: &str, group: &str) {
    crew()
        .args([
            "--db", db_path, "--session", session, "login", "--id", id, "--name", id, "--role",
            role, "--group", group,
        ])
        .assert()
        .success();
}

pub fn add(db_path: &str, session: &str, start: &str, end: &str, title: &str) {
    crew()
        .args([
            "--db", db_path, "--session", session, "add", start, end, "--title", title,
        ])
        .assert()
        .success();
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// In-memory event for library-level tests.
pub fn event(id: i64, start: &str, end: &str) -> Event {
    owned_event(id, start, end, "u1", Role::Leader)
}

pub fn owned_event(id: i64, start: &str, end: &str, owner: &str, role: Role) -> Event {
    Event {
        id,
        group_id: "g1".to_string(),
        owner_id: owner.to_string(),
        owner_name: owner.to_uppercase(),
        owner_role: role,
        start_date: day(start),
        end_date: day(end),
        title: format!("event {}", id),
        created_at: "2024-05-01T09:00:00+00:00".to_string(),
    }
}

pub fn viewer(id: &str, role: Role) -> Viewer {
    Viewer {
        id: id.to_string(),
        name: id.to_uppercase(),
        role,
        group_id: "g1".to_string(),
    }
}
