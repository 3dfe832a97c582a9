// tests/version_output.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_banner_is_printed() {
    Command::cargo_bin("relpath")
        .unwrap()
        .env_remove("RELPATH_PROGRAM_NAME")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "relpath {}\n",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("Host platform:"));
}

#[test]
fn quiet_suppresses_version() {
    Command::cargo_bin("relpath")
        .unwrap()
        .args(["-q", "-V"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn program_name_override() {
    Command::cargo_bin("relpath")
        .unwrap()
        .env("RELPATH_PROGRAM_NAME", "rp")
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rp "));
}
