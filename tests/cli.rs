//! Command line tests for the pivot-forge binary

use assert_cmd::Command;
use predicates::prelude::*;

fn pivot_forge() -> Command {
    let mut cmd = Command::cargo_bin("pivot-forge").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("PIVOT_FORGE_MAX_VARIANTS")
        .env_remove("PIVOT_FORGE_SUFFIXES")
        .env_remove("PIVOT_FORGE_LOG");
    cmd
}

#[test]
fn test_help() {
    pivot_forge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("PIVOT_FORGE_MAX_VARIANTS"));
}

#[test]
fn test_username_variants() {
    pivot_forge()
        .args(["username", "Me", "elad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("@meelad786"))
        .stdout(predicate::str::contains("@daleem"))
        .stdout(predicate::str::contains("https://github.com/meelad_pk"));
}

#[test]
fn test_domain_json() {
    let output = pivot_forge()
        .args(["--json", "domain", "example.com"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let section = &json["sections"][0];
    assert_eq!(section["kind"], "domain");
    assert_eq!(section["intel"]["tld"], "com");
    assert_eq!(section["intel"]["risk"], "Low");
    assert_eq!(section["links"][0]["url"], "https://who.is/whois/example.com");
}

#[test]
fn test_report_text() {
    pivot_forge()
        .args(["report", "--ip", "8.8.8.8", "--phone", "+92 300 1234567"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monitor"))
        .stdout(predicate::str::contains("Pakistan"))
        .stdout(predicate::str::contains("https://wa.me/923001234567"));
}

#[test]
fn test_max_variants_from_env() {
    let output = pivot_forge()
        .env("PIVOT_FORGE_MAX_VARIANTS", "3")
        .args(["--json", "username", "meelad"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variants"].as_array().unwrap().len(), 3);
}

#[test]
fn test_bad_config_fails() {
    pivot_forge()
        .env("PIVOT_FORGE_MAX_VARIANTS", "zero")
        .args(["ip", "1.1.1.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration problem"));
}

#[test]
fn test_unknown_kind_fails() {
    pivot_forge()
        .args(["fax", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown input kind"));
}

#[test]
fn test_missing_value_fails() {
    pivot_forge()
        .arg("email")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No value given for email"));
}

#[test]
fn test_note_line() {
    pivot_forge()
        .args(["note", "Reused avatar", "https://x.com/meelad", "High"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(
                r"^\[\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z\] - Reused avatar - https://x.com/meelad - High\n$",
            )
            .unwrap(),
        );
}
