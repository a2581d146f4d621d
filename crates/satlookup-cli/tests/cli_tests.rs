//! Integration tests for the `satlookup` binary.
//!
//! These tests use `assert_cmd` and never reach the real Space-Track host:
//! credentials are either removed or the base URL points at a closed local
//! port.

use assert_cmd::Command;
use predicates::prelude::*;

const UNREACHABLE: &str = "http://127.0.0.1:1";

fn satlookup() -> Command {
    let mut cmd = Command::cargo_bin("satlookup").expect("binary exists");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn without_credentials(cmd: &mut Command) -> &mut Command {
    cmd.env_remove("SPACE_TRACK_USERNAME")
        .env_remove("SPACE_TRACK_PASSWORD")
        .env_remove("SPACE_TRACK_BASE_URL")
}

fn with_unreachable_service(cmd: &mut Command) -> &mut Command {
    cmd.env("SPACE_TRACK_USERNAME", "operator@example.com")
        .env("SPACE_TRACK_PASSWORD", "not-a-real-password")
        .env("SPACE_TRACK_BASE_URL", UNREACHABLE)
}

#[test]
fn help_lists_subcommands() {
    satlookup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("menu"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("tle"));
}

#[test]
fn tle_without_credentials_fails() {
    let mut cmd = satlookup();
    without_credentials(&mut cmd)
        .args(["tle", "25544"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SPACE_TRACK_USERNAME"));
}

#[test]
fn tle_reports_unreachable_service() {
    let mut cmd = satlookup();
    with_unreachable_service(&mut cmd)
        .args(["tle", "25544"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[!] ERROR: API REQUEST TO SPACE TRACK"))
        .stderr(predicate::str::contains("25544"));
}

#[test]
fn tle_rejects_path_like_id_before_any_request() {
    let mut cmd = satlookup();
    with_unreachable_service(&mut cmd)
        .args(["tle", "25544/format/json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid catalog identifier"));
}

#[test]
fn browse_reports_unreachable_service() {
    let mut cmd = satlookup();
    with_unreachable_service(&mut cmd)
        .arg("browse")
        .assert()
        .success()
        .stdout(predicate::str::contains("[!] ERROR: API REQUEST TO SPACE TRACK"));
}

#[test]
fn menu_retries_invalid_input_then_escapes() {
    let mut cmd = satlookup();
    without_credentials(&mut cmd)
        .arg("menu")
        .write_stdin("abc\n9\n0\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("S A T L O O K U P"))
        .stdout(predicate::str::contains("[!] INVALID INPUT").count(2))
        .stdout(predicate::str::contains("Escaping Orbit..."));
}

#[test]
fn menu_is_the_default_command() {
    let mut cmd = satlookup();
    without_credentials(&mut cmd)
        .write_stdin("0\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[1] Browse satellite catalog"))
        .stdout(predicate::str::contains("Escaping Orbit..."));
}

#[test]
fn menu_lookup_without_credentials_keeps_running() {
    let mut cmd = satlookup();
    without_credentials(&mut cmd)
        .write_stdin("2\n25544\n0\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CATALOG ID >"))
        .stdout(predicate::str::contains(
            "environment variable SPACE_TRACK_USERNAME is not set",
        ))
        .stdout(predicate::str::contains("[0] Exit").count(2));
}

#[test]
fn menu_exits_when_input_closes() {
    let mut cmd = satlookup();
    without_credentials(&mut cmd)
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Escaping Orbit..."));
}
