#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// gymsched binary with HOME pointed at a scratch dir, so a developer's own
/// configuration never leaks into the tests.
pub fn gs() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("gymsched_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("gymsched");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gymsched.sqlite", name));
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

/// Write `content` to a temp file and return its path
pub fn temp_file(name: &str, content: &str) -> String {
    let p = temp_out(name, "json");
    fs::write(&p, content).expect("write temp file");
    p
}

pub fn init_db(db_path: &str) {
    gs().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_class(db_path: &str, name: &str) {
    gs().args(["--db", db_path, "class", "add", name])
        .assert()
        .success();
}

pub fn add_session(db_path: &str, class_id: &str, day: &str, start: &str, end: &str) {
    gs().args([
        "--db", db_path, "session", "add", "--class", class_id, "--day", day, "--start", start,
        "--end", end,
    ])
    .assert()
    .success();
}

/// Init DB with two classes and two overlapping Monday sessions:
/// Spinning 09:00-10:00 (#1) and Yoga 09:30-10:30 (#2).
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_class(db_path, "Spinning");
    add_class(db_path, "Yoga");
    add_session(db_path, "1", "monday", "09:00", "10:00");
    add_session(db_path, "2", "monday", "09:30", "10:30");
}
