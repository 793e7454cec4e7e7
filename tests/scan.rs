use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn command() -> Command {
    Command::cargo_bin("codelaunch").expect("binary exists")
}

#[test]
fn scan_lists_projects_with_toolchains() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("work/api/.idea").create_dir_all().unwrap();
    temp.child("work/api/go.mod").write_str("module api\n").unwrap();
    temp.child("work/site/.git").create_dir_all().unwrap();
    temp.child("work/site/package.json").write_str("{}").unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("scan")
        .arg(temp.child("work").path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("work/api"))
        .stdout(predicate::str::contains("[goland]"))
        .stdout(predicate::str::contains("work/site"))
        .stdout(predicate::str::contains("[webstorm]"))
        .stdout(predicate::str::contains("Found 2 project(s)"));
}

#[test]
fn scan_verbose_shows_paths() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("work/api/.idea").create_dir_all().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("scan")
        .arg("--verbose")
        .arg(temp.child("work").path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("~/work/api"));
}

#[test]
fn scan_json_emits_machine_readable_entries() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("work/api/.idea").create_dir_all().unwrap();
    temp.child("work/api/Cargo.toml").write_str("[package]\n").unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("scan")
        .arg("--json")
        .arg(temp.child("work").path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"work/api\""))
        .stdout(predicate::str::contains("\"toolchain\": \"rustrover\""));
}

#[test]
fn scan_search_filters_by_label() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("work/api/.idea").create_dir_all().unwrap();
    temp.child("work/site/.idea").create_dir_all().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("scan")
        .arg("--search")
        .arg("API")
        .arg(temp.child("work").path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("work/api"))
        .stdout(predicate::str::contains("work/site").not())
        .stdout(predicate::str::contains("Found 1 project(s)"));
}

#[test]
fn scan_respects_the_ignore_list() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("work/api/.idea").create_dir_all().unwrap();
    temp.child("work/site/.idea").create_dir_all().unwrap();

    let ignored = temp.child("work/site").path().display().to_string();
    let mut ignore_cmd = command();
    ignore_cmd
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("config")
        .arg("--ignore")
        .arg(&ignored);
    ignore_cmd.assert().success();

    let mut scan_cmd = command();
    scan_cmd
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("scan")
        .arg(temp.child("work").path());

    scan_cmd
        .assert()
        .success()
        .stdout(predicate::str::contains("work/api"))
        .stdout(predicate::str::contains("work/site").not());
}

#[test]
fn scan_skips_node_modules_and_nested_projects() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("work/app/.git").create_dir_all().unwrap();
    temp.child("work/app/vendored/.idea").create_dir_all().unwrap();
    temp.child("work/node_modules/dep/.idea").create_dir_all().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("scan")
        .arg(temp.child("work").path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("work/app"))
        .stdout(predicate::str::contains("vendored").not())
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains("Found 1 project(s)"));
}

#[test]
fn scan_without_root_or_config_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("scan");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No scan directory configured"));
}

#[test]
fn scan_rejects_a_missing_root() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("scan")
        .arg(temp.child("nowhere").path());

    cmd.assert().failure().stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn version_flag_works() {
    let mut cmd = command();
    cmd.arg("--version");

    cmd.assert().success();
}
