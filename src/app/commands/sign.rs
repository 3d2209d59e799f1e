//! Locate sign manifests under a release tree and sign every binary they
//! name via the platform signing script.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, signing};
use crate::ports::{CommandSpec, ProcessRunner};

/// Options for one signing run.
#[derive(Debug, Clone)]
pub struct SignOptions {
    /// Directory scanned for `.signlist` manifests.
    pub directory: PathBuf,
    /// Signing script invoked once per file.
    pub script: PathBuf,
}

/// Files handled by a signing run.
#[derive(Debug, Default)]
pub struct SignReport {
    pub signed: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Sign every file the manifests name, failing fast on the first script
/// error. Listed files that do not exist are skipped with a notice.
pub fn execute<R: ProcessRunner>(runner: &R, options: &SignOptions) -> Result<SignReport, AppError> {
    if !options.directory.is_dir() {
        return Err(AppError::configuration(format!(
            "The specified path {} is not a directory",
            options.directory.display()
        )));
    }
    if !options.script.exists() {
        return Err(AppError::SigningScriptMissing(options.script.clone()));
    }

    let manifests = signing::find_manifests(&options.directory);
    if manifests.is_empty() {
        return Err(AppError::NoSignManifests(options.directory.clone()));
    }

    let mut files = Vec::new();
    for manifest in &manifests {
        println!("Reading manifest {}", manifest.display());
        files.extend(signing::resolve_manifest(manifest)?);
    }

    let mut report = SignReport::default();
    for file in files {
        if !file.exists() {
            println!("Skipping missing file {}", file.display());
            report.skipped.push(file);
            continue;
        }
        sign_file(runner, &options.script, &file)?;
        println!("Successfully signed: {}", file.display());
        report.signed.push(file);
    }
    Ok(report)
}

fn sign_file<R: ProcessRunner>(runner: &R, script: &Path, file: &Path) -> Result<(), AppError> {
    let spec = CommandSpec::new("powershell")
        .args(["-ExecutionPolicy", "ByPass", "-File"])
        .arg(script.display().to_string())
        .arg(file.display().to_string());

    let output = runner.run(&spec)?;
    if !output.success() {
        return Err(AppError::ExternalTool {
            tool: "signing script".to_string(),
            details: format!("signing {} failed: {}", file.display(), output.stderr.trim()),
        });
    }
    Ok(())
}
