use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

fn command() -> Command {
    Command::cargo_bin("codelaunch").expect("binary exists")
}

#[test]
fn config_set_dir_becomes_the_default_scan_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("work/api/.idea").create_dir_all().unwrap();

    let mut set_cmd = command();
    set_cmd
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("config")
        .arg("--set-dir")
        .arg(temp.child("work").path());
    set_cmd.assert().success().stdout(predicate::str::contains("Scan directory set to"));

    // Scan without a path now uses the configured directory.
    let mut scan_cmd = command();
    scan_cmd
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("scan");
    scan_cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("work/api"))
        .stdout(predicate::str::contains("Found 1 project(s)"));
}

#[test]
fn config_set_dir_rejects_a_missing_directory() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("config")
        .arg("--set-dir")
        .arg(temp.child("nowhere").path());

    cmd.assert().failure().stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn ignore_list_is_normalized_on_save() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_root = temp.child("config");

    for project in ["/b/proj", "/a/proj", "  /b/proj  "] {
        let mut cmd = command();
        cmd.env("HOME", temp.path())
            .env("XDG_CONFIG_HOME", config_root.path())
            .arg("config")
            .arg("--ignore")
            .arg(project);
        cmd.assert().success();
    }

    let contents =
        fs::read_to_string(config_root.child("codelaunch/config.toml").path()).unwrap();
    let a_index = contents.find("/a/proj").expect("contains /a/proj");
    let b_index = contents.find("/b/proj").expect("contains /b/proj");
    assert!(a_index < b_index, "entries are sorted");
    assert_eq!(contents.matches("/b/proj").count(), 1, "entries are deduplicated");
}

#[test]
fn unignore_removes_an_entry() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_root = temp.child("config");

    let mut ignore_cmd = command();
    ignore_cmd
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--ignore")
        .arg("/a/proj");
    ignore_cmd.assert().success();

    let mut unignore_cmd = command();
    unignore_cmd
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("config")
        .arg("--unignore")
        .arg("/a/proj");
    unignore_cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("No longer ignoring project '/a/proj'"));

    let contents =
        fs::read_to_string(config_root.child("codelaunch/config.toml").path()).unwrap();
    assert!(!contents.contains("/a/proj"));
}

#[test]
fn config_path_prints_location() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("config")
        .arg("--path");

    cmd.assert().success().stdout(predicate::str::contains("codelaunch/config.toml"));
}

#[test]
fn bare_config_summarizes_current_settings() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("config");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scan directory: (not set)"))
        .stdout(predicate::str::contains("Ignored projects: (none)"));
}
