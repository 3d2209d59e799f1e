mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn sign_rejects_a_missing_directory() {
    let ctx = TestContext::new();
    ctx.write_file("sign_release.ps1", "# signer");

    ctx.cli()
        .args(["sign", "release"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn sign_requires_the_signing_script() {
    let ctx = TestContext::new();
    ctx.write_file("release/module.signlist", "module.dll\n");

    ctx.cli()
        .args(["sign", "release"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Signing script not found"));
}

#[test]
fn sign_fails_when_no_manifests_exist() {
    let ctx = TestContext::new();
    ctx.write_file("sign_release.ps1", "# signer");
    ctx.write_file("release/Binaries/module.dll", "bin");

    ctx.cli()
        .args(["sign", "release"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .signlist files found"));
}

#[test]
fn sign_honors_a_custom_script_path() {
    let ctx = TestContext::new();
    ctx.write_file("release/module.signlist", "module.dll\n");

    ctx.cli()
        .args(["sign", "release", "--script", "scripts/custom.ps1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scripts/custom.ps1"));
}
