use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("tabtint").unwrap()
}

#[test]
fn help_flag_prints_usage_with_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("image"))
        .stdout(predicate::str::contains("page"));
}

#[test]
fn image_subcommand_help() {
    cmd()
        .args(["image", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--psm"));
}

#[test]
fn page_subcommand_help() {
    cmd()
        .args(["page", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn missing_subcommand_fails() {
    cmd().assert().failure();
}

#[test]
fn image_with_nonexistent_file_fails() {
    cmd()
        .args(["image", "/nonexistent/scan.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn page_with_nonexistent_file_fails() {
    cmd()
        .args(["page", "/nonexistent/page.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn invalid_format_value_rejected() {
    cmd()
        .args(["page", "page.json", "--format", "xml"])
        .assert()
        .failure();
}
