//! Specs for roused --check

use assert_cmd::Command;

#[test]
fn check_accepts_a_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rouse.toml");
    std::fs::write(
        &path,
        r#"
log_filter = "debug"

[calendar]
source = "static"
weekends = true
dates = ["2026-12-25"]
"#,
    )
    .unwrap();

    Command::cargo_bin("roused")
        .unwrap()
        .arg("--check")
        .arg(&path)
        .assert()
        .success()
        .stdout("config ok\n");
}

#[test]
fn check_without_a_config_validates_defaults() {
    Command::cargo_bin("roused")
        .unwrap()
        .arg("--check")
        .assert()
        .success()
        .stdout("config ok\n");
}

#[test]
fn check_rejects_an_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rouse.toml");
    std::fs::write(&path, "[calendar]\nsource = \"bogus\"\n").unwrap();

    Command::cargo_bin("roused")
        .unwrap()
        .arg("--check")
        .arg(&path)
        .assert()
        .failure()
        .code(1);
}

#[test]
fn default_config_resolves_paths_under_data_dir() {
    let config = rouse_daemon::DaemonConfig::default();

    assert!(config.log_path().starts_with(&config.data_dir));
    assert!(config.alarms_dir().starts_with(&config.data_dir));
}

#[test]
fn check_rejects_a_missing_config_file() {
    Command::cargo_bin("roused")
        .unwrap()
        .arg("--check")
        .arg("/nonexistent/rouse.toml")
        .assert()
        .failure()
        .code(1);
}
