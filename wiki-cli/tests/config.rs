use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn html_options_come_from_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("page.md");
    fs::write(&input_path, ":::note\nHi\n:::\n").unwrap();

    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"[convert.html]
standalone = true
icons = false
"#,
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("wiki");
    cmd.arg(input_path.as_os_str())
        .arg("--to")
        .arg("html")
        .arg("--config")
        .arg(config_path.as_os_str());

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.starts_with("<!DOCTYPE html>"));
    assert!(!stdout.contains("<svg"));
}

#[test]
fn extra_params_override_config() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("page.md");
    fs::write(&input_path, ":::note\nHi\n:::\n").unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(&config_path, "[convert.html]\nstandalone = true\n").unwrap();

    cargo_bin_cmd!("wiki")
        .arg(input_path.as_os_str())
        .arg("--to")
        .arg("html")
        .arg("--config")
        .arg(config_path.as_os_str())
        .arg("--extra-standalone")
        .arg("false")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<aside"));
}

#[test]
fn missing_config_file_fails() {
    cargo_bin_cmd!("wiki")
        .arg("--list-formats")
        .arg("--config")
        .arg("/nonexistent/wiki.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn wiki_toml_in_working_directory_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("page.md"), ":::tip\nHi\n:::\n").unwrap();
    fs::write(dir.path().join("wiki.toml"), "[convert.html]\nicons = false\n").unwrap();

    cargo_bin_cmd!("wiki")
        .current_dir(dir.path())
        .arg("page.md")
        .arg("--to")
        .arg("html")
        .assert()
        .success()
        .stdout(predicate::str::contains("<div class=\"callout-title\"><span>Tip</span></div>"));
}

#[test]
fn extra_params_keep_unnamed_config_options() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("page.md");
    fs::write(&input_path, ":::tip\nHi\n:::\n").unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(&config_path, "[convert.html]\nicons = false\n").unwrap();

    cargo_bin_cmd!("wiki")
        .arg(input_path.as_os_str())
        .arg("--to")
        .arg("html")
        .arg("--config")
        .arg(config_path.as_os_str())
        .arg("--extra-standalone")
        .arg("true")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<svg").not());
}
