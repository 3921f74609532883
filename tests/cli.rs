//! CLI integration tests for utf64
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn utf64() -> Command {
    Command::cargo_bin("utf64").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    utf64()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encode text through UTF-8 to Base64"));
}

#[test]
fn test_list_alphabets() {
    utf64()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("standard"))
        .stdout(predicate::str::contains("url_safe"));
}

// ============================================================================
// Encode/Decode Round-trips
// ============================================================================

#[test]
fn test_encode_ascii() {
    utf64()
        .write_stdin("A")
        .assert()
        .success()
        .stdout("QQ==\n");
}

#[test]
fn test_encode_multibyte() {
    utf64()
        .write_stdin("€")
        .assert()
        .success()
        .stdout("4oKs\n");
}

#[test]
fn test_decode() {
    utf64()
        .arg("--decode")
        .write_stdin("8J2UmA==")
        .assert()
        .success()
        .stdout("𝔘");
}

#[test]
fn test_roundtrip_through_binary() {
    let encoded = utf64()
        .write_stdin("héllo 𝔘orld")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let encoded_str = String::from_utf8(encoded).unwrap();

    utf64()
        .arg("--decode")
        .write_stdin(encoded_str.trim().to_string())
        .assert()
        .success()
        .stdout("héllo 𝔘orld");
}

#[test]
fn test_url_safe_alphabet() {
    utf64()
        .args(["--alphabet", "url_safe", "--raw"])
        .write_stdin(&b"\xFF\xFF\xFF"[..])
        .assert()
        .success()
        .stdout("____\n");
}

#[test]
fn test_raw_roundtrip() {
    let encoded = utf64()
        .arg("--raw")
        .write_stdin(&b"\x00\x01\xFE\xFF"[..])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let encoded_str = String::from_utf8(encoded).unwrap();

    utf64()
        .args(["--raw", "--decode"])
        .write_stdin(encoded_str.trim().to_string())
        .assert()
        .success()
        .stdout(predicate::eq(&b"\x00\x01\xFE\xFF"[..]));
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn test_unknown_alphabet_fails() {
    utf64()
        .args(["--alphabet", "base65"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_decode_invalid_symbol_fails() {
    utf64()
        .arg("--decode")
        .write_stdin("QQ!=")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid symbol"));
}

#[test]
fn test_decode_malformed_sequence_fails() {
    // "ww==" decodes to the single byte 0xC3, a truncated two-byte leader
    utf64()
        .arg("--decode")
        .write_stdin("ww==")
        .assert()
        .failure()
        .stderr(predicate::str::contains("truncated"));
}
