mod common;

use common::TestContext;
use predicates::prelude::*;

const PACKAGES: &str = r#"[["renderer", "1.2.0", "Plugins/renderer"]]"#;

#[test]
fn publish_requires_the_packager_env_var() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["publish", "--packages-json", PACKAGES, "--tag", "v1.2.0", "--build-number", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ARMADA_PACKAGER is not set"));
}

#[test]
fn publish_rejects_a_malformed_package_list() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "publish",
            "--packages-json",
            r#"[["missing-version-and-path"]]"#,
            "--tag",
            "v1.2.0",
            "--build-number",
            "7",
        ])
        .env("ARMADA_PACKAGER", "packctl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("package list"));
}

#[test]
fn publish_fails_when_the_tool_is_missing_from_the_workspace() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "publish",
            "--packages-json",
            PACKAGES,
            "--tag",
            "v1.2.0",
            "--build-number",
            "7",
            "--workspace",
            ".",
        ])
        .env("ARMADA_PACKAGER", "packctl")
        .env("GH_USERNAME", "releases")
        .env("GIT_EMAIL", "releases@example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Packaging tool not found"));
}

#[cfg(unix)]
#[test]
fn publish_runs_the_tool_once_per_package() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let ctx = TestContext::new();
    let tool = ctx.write_file("packctl", "#!/bin/sh\necho \"published $@\"\n");
    let mut permissions = fs::metadata(&tool).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&tool, permissions).unwrap();

    ctx.cli()
        .args([
            "publish",
            "--packages-json",
            r#"[["renderer", "1.2.0", "Plugins/renderer"], ["capture", "0.9.1", "Plugins/capture"]]"#,
            "--tag",
            "v1.2.0",
            "--build-number",
            "7",
            "--workspace",
            ".",
        ])
        .env("ARMADA_PACKAGER", "packctl")
        .env("GH_USERNAME", "releases")
        .env("GIT_EMAIL", "releases@example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully published package renderer"))
        .stdout(predicate::str::contains("Successfully published package capture"))
        .stdout(predicate::str::contains("All packages processed."));
}
