use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn todo(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_on_fresh_home_reports_no_todos() {
    let home = TempDir::new().unwrap();
    todo(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos"));
    assert!(!home.path().join(".todos.json").exists());
}

#[test]
fn add_list_done_scenario() {
    let home = TempDir::new().unwrap();

    todo(home.path())
        .args(["add", "buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: [1] buy milk"));

    todo(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ] 1: buy milk"));

    todo(home.path())
        .args(["add", "walk", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: [2] walk dog"));

    todo(home.path())
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed: [1] buy milk"));

    todo(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::eq("[x] 1: buy milk\n[ ] 2: walk dog\n"));

    let before = fs::read_to_string(home.path().join(".todos.json")).unwrap();
    todo(home.path())
        .args(["done", "99"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("todo 99 not found"));
    let after = fs::read_to_string(home.path().join(".todos.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn done_with_non_integer_id_exits_1() {
    let home = TempDir::new().unwrap();
    todo(home.path()).args(["add", "buy milk"]).assert().success();

    todo(home.path())
        .args(["done", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid id: abc"));

    todo(home.path())
        .args(["done", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid id: -1"));
}

#[test]
fn corrupt_file_fails_with_parse_error() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".todos.json"), "not json").unwrap();

    todo(home.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: cannot parse"));
}

#[test]
fn persisted_file_uses_id_text_done_fields() {
    let home = TempDir::new().unwrap();
    todo(home.path()).args(["add", "buy milk"]).assert().success();

    let content = fs::read_to_string(home.path().join(".todos.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "id": 1, "text": "buy milk", "done": false }])
    );
}

#[test]
fn add_without_text_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    todo(home.path()).arg("add").assert().failure();
}
