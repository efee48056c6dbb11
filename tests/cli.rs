#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn workspace() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("kinder.csv"),
        "Vorname,Nachname\nAnna,Adler\nBen,Bauer\nCarla,Cramer\nDavid,Dorn\n",
    )
    .unwrap();
    dir
}

fn cli(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("notbetreuung-cli").unwrap();
    cmd.arg("--waitlist")
        .arg(dir.join("kinder.csv"))
        .arg("--events")
        .arg(dir.join("events.json"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn list_without_events() {
    let dir = workspace();
    let out = stdout_of(cli(dir.path()).arg("list"));
    insta::assert_snapshot!(out, @r"
    Aktuell gibt es keine Notbetreuung.

    Kinder-Warteliste
    1. Anna Adler
    2. Ben Bauer
    3. Carla Cramer
    4. David Dorn
    ");
}

#[test]
fn create_list_and_delete() {
    let dir = workspace();
    cli(dir.path())
        .args(["create", "--date", "04.03.2025", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event #1 created for 2025-03-04: Anna Adler, Ben Bauer"));

    cli(dir.path())
        .args(["create", "--date", "2025-03-11", "--pick", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event #2 created"));

    let out = stdout_of(cli(dir.path()).arg("list"));
    insta::assert_snapshot!(out, @r"
    Aktuell geplante Notbetreuungen (2)
    #1 | 2025-03-04 | Anna Adler, Ben Bauer
    #2 | 2025-03-11 | David Dorn

    Kinder-Warteliste
    1. Carla Cramer
    2. Anna Adler
    3. Ben Bauer
    4. David Dorn
    ");

    cli(dir.path())
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 child(ren) moved back"));

    let csv = fs::read_to_string(dir.path().join("kinder.csv")).unwrap();
    assert_eq!(
        csv,
        "Vorname,Nachname\nAnna,Adler\nBen,Bauer\nCarla,Cramer\nDavid,Dorn\n"
    );
}

#[test]
fn show_marks_event_children() {
    let dir = workspace();
    cli(dir.path())
        .args(["create", "--date", "2025-03-04", "--count", "1"])
        .assert()
        .success();

    let out = stdout_of(cli(dir.path()).args(["show", "--id", "1"]));
    insta::assert_snapshot!(out, @r"
    Event #1 | 2025-03-04
    [ ] 1. Ben Bauer
    [ ] 2. Carla Cramer
    [ ] 3. David Dorn
    [x] 4. Anna Adler
    ");
}

#[test]
fn edit_keeps_waitlist_order() {
    let dir = workspace();
    cli(dir.path())
        .args(["create", "--date", "2025-03-04", "--count", "2"])
        .assert()
        .success();
    let before = fs::read_to_string(dir.path().join("kinder.csv")).unwrap();

    cli(dir.path())
        .args(["edit", "--id", "1", "--date", "2025-03-05", "--pick", "1"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("kinder.csv")).unwrap(), before);
    let events = fs::read_to_string(dir.path().join("events.json")).unwrap();
    assert!(events.contains("2025-03-05"));
    assert!(events.contains("Carla"));
    assert!(!events.contains("Anna"));
}

#[test]
fn too_many_children_fails_without_writing() {
    let dir = workspace();
    cli(dir.path())
        .args(["create", "--date", "2025-03-04", "--count", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not enough children available"));
    assert!(!dir.path().join("events.json").exists());
}

#[test]
fn missing_waitlist_fails() {
    let dir = tempdir().unwrap();
    cli(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("waitlist source not found"));
}

#[test]
fn import_children_appends_to_waitlist() {
    let dir = workspace();
    let extra = dir.path().join("neu.csv");
    fs::write(&extra, "Vorname,Nachname\nEmil,Engel\n").unwrap();

    cli(dir.path())
        .args(["import-children", "--csv"])
        .arg(&extra)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 child(ren) appended"));

    let csv = fs::read_to_string(dir.path().join("kinder.csv")).unwrap();
    assert!(csv.ends_with("David,Dorn\nEmil,Engel\n"));
}

#[test]
fn date_only_edit_survives_child_leaving_waitlist() {
    let dir = workspace();
    cli(dir.path())
        .args(["create", "--date", "2025-03-04", "--count", "1"])
        .assert()
        .success();
    // Anna quitte la structure : retirée du CSV à la main
    fs::write(
        dir.path().join("kinder.csv"),
        "Vorname,Nachname\nBen,Bauer\nCarla,Cramer\nDavid,Dorn\n",
    )
    .unwrap();

    cli(dir.path())
        .args(["edit", "--id", "1", "--date", "2025-03-06"])
        .assert()
        .success();

    let events = fs::read_to_string(dir.path().join("events.json")).unwrap();
    assert!(events.contains("2025-03-06"));
    assert!(events.contains("Anna"));
}
