use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dirsize() -> Command {
    Command::cargo_bin("dirsize").unwrap()
}

#[test]
fn shows_help() {
    dirsize()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("category"));
}

#[test]
fn shows_version() {
    dirsize()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    dirsize()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn scan_subcommand_help() {
    dirsize()
        .args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-depth"))
        .stdout(predicate::str::contains("--error-log"));
}

#[test]
fn completions_for_bash() {
    dirsize()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dirsize"));
}

#[test]
fn invalid_config_path_fails() {
    let dir = TempDir::new().unwrap();
    dirsize()
        .args(["--config", "/nonexistent/path.toml", "scan"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn config_changes_indent_marker() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("child")).unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[report]\nindent_marker = \"#\"\n").unwrap();

    dirsize()
        .arg("--config")
        .arg(&config)
        .arg("scan")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("# child | 0B"));
}
