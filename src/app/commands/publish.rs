//! Batch package publishing through the ecosystem packaging tool.

use std::path::PathBuf;

use crate::domain::{AppError, PackageSpec};
use crate::ports::{CommandSpec, ProcessRunner};

/// Environment variable naming the packaging tool executable.
pub const PACKAGER_ENV: &str = "ARMADA_PACKAGER";

/// Options for one publish run.
///
/// The environment-derived fields are resolved by the CLI layer so the
/// command itself never reads process state.
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    pub packages_json: String,
    pub tag: String,
    pub build_number: String,
    pub workspace: PathBuf,
    pub tool_name: Option<String>,
    pub publisher_name: Option<String>,
    pub publisher_email: Option<String>,
}

/// Publish every listed package, failing fast on the first tool error.
pub fn execute<R: ProcessRunner>(runner: &R, options: &PublishOptions) -> Result<(), AppError> {
    let packages = PackageSpec::parse_list(&options.packages_json)?;

    for package in &packages {
        println!(
            "Publishing package: {}, version: {}, path in repo: {}",
            package.name, package.version, package.path
        );
    }

    let tool_name = options
        .tool_name
        .as_deref()
        .ok_or_else(|| AppError::configuration(format!("{} is not set", PACKAGER_ENV)))?;
    let tool_path = options.workspace.join(tool_name);
    if !tool_path.exists() {
        return Err(AppError::PackagerMissing(tool_path));
    }

    let publisher_name = options
        .publisher_name
        .as_deref()
        .ok_or_else(|| AppError::configuration("GH_USERNAME is not set"))?;
    let publisher_email = options
        .publisher_email
        .as_deref()
        .ok_or_else(|| AppError::configuration("GIT_EMAIL is not set"))?;

    for package in &packages {
        let spec = CommandSpec::new(tool_path.display().to_string())
            .arg("--workspace")
            .arg(options.workspace.display().to_string())
            .args(["publish", "--type=generic"])
            .arg("--path")
            .arg(package.path.as_str())
            .arg("--name")
            .arg(package.name.as_str())
            .arg("--version")
            .arg(package.version.as_str())
            .arg("--version-suffix")
            .arg(format!(".b{}", options.build_number))
            .arg("--verbose")
            .arg("--publisher-name")
            .arg(publisher_name)
            .arg("--publisher-email")
            .arg(publisher_email)
            .arg("--tag")
            .arg(options.tag.as_str());

        println!("Running command: {} {}", spec.program, spec.args.join(" "));
        let output = runner.run(&spec)?;
        if !output.success() {
            return Err(AppError::ExternalTool {
                tool: tool_name.to_string(),
                details: format!(
                    "publishing {} failed: {}",
                    package.name,
                    output.stderr.trim()
                ),
            });
        }
        println!("Successfully published package {}: {}", package.name, output.stdout.trim());
    }

    println!("All packages processed.");
    Ok(())
}
