//! End-to-end tests for the `token-logos clone` command.

mod common;
use common::prelude::*;

#[test]
fn test_clone_help() {
    LogoFixture::new()
        .command()
        .arg("clone")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copy a token image"));
}

#[test]
fn test_clone_writes_checksummed_file_and_reports_paths() {
    let fixture = LogoFixture::new()
        .with_token("usdc")
        .with_network("ethereum");

    fixture
        .command()
        .args(["clone", "usdc", "ethereum", addresses::LOWER])
        .assert()
        .success()
        .stdout(predicate::str::contains("token/usdc.jpg"))
        .stdout(predicate::str::contains(format!(
            "network/ethereum/{}.jpg",
            addresses::CHECKSUMMED
        )))
        .stdout(predicate::str::contains("[OK] Copied"));

    fixture
        .child(&format!("network/ethereum/{}.jpg", addresses::CHECKSUMMED))
        .assert(predicate::path::is_file());
    fixture
        .child(&format!("network/ethereum/{}.jpg", addresses::LOWER))
        .assert(predicate::path::missing());
}

#[test]
fn test_clone_unknown_network() {
    let fixture = LogoFixture::new()
        .with_token("usdc")
        .with_network("etherium");

    fixture
        .command()
        .args(["clone", "usdc", "etherium", addresses::LOWER])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No network for etherium"))
        .stderr(predicate::str::contains("Did you mean 'ethereum'?"));

    fixture
        .child(&format!("network/etherium/{}.jpg", addresses::CHECKSUMMED))
        .assert(predicate::path::missing());
}

#[test]
fn test_clone_missing_source() {
    let fixture = LogoFixture::new().with_network("ethereum");

    fixture
        .command()
        .args(["clone", "dai", "ethereum", addresses::LOWER])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No token found with name dai"));

    fixture
        .child(&format!("network/ethereum/{}.jpg", addresses::CHECKSUMMED))
        .assert(predicate::path::missing());
}

#[test]
fn test_clone_invalid_address() {
    let fixture = LogoFixture::new()
        .with_token("usdc")
        .with_network("ethereum");

    fixture
        .command()
        .args(["clone", "usdc", "ethereum", "0x1234"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid address 0x1234"));
}

#[test]
fn test_clone_missing_network_directory() {
    let fixture = LogoFixture::new().with_token("usdc");

    fixture
        .command()
        .args(["clone", "usdc", "kovan", addresses::LOWER])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to copy"))
        .stderr(predicate::str::contains("re-run the command"));
}

#[test]
fn test_clone_missing_arguments_is_usage_error() {
    LogoFixture::new()
        .command()
        .args(["clone", "usdc"])
        .assert()
        .code(2);
}
