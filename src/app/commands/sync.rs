//! Workflow propagation across plugin repositories.
//!
//! For each configured repository/branch the command clones the branch
//! shallowly, renders the workflow template against the repository's own
//! override file, and commits and pushes the result when it differs from
//! what is already there. Targets are independent: one failing entry is
//! counted and the run moves on.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::domain::{
    AppError, RepositoryTarget, TargetConfig, WorkflowOverrides, render_workflow,
};
use crate::ports::ProcessRunner;
use crate::services::git::{self, GitCli};

/// Path of the propagated workflow file inside each repository.
pub const WORKFLOW_PATH: &str = ".github/workflows/build.yml";

/// Commit message used for every propagated update.
pub const COMMIT_MESSAGE: &str = "Update build workflow from templates repository";

/// Options for one propagation run.
#[derive(Debug, Default)]
pub struct SyncOptions {
    pub config_path: PathBuf,
    pub token: Option<String>,
    pub dry_run: bool,
    pub repo_filter: Option<String>,
    pub branch_filter: Option<String>,
}

/// Aggregate result of a propagation run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// What processing one target amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryOutcome {
    /// Committed file already matches the rendered template.
    UpToDate,
    /// Dry-run detected a difference but changed nothing.
    WouldUpdate,
    /// Git saw no staged changes after the write (line-ending
    /// normalization can nullify a textual diff).
    NoChanges,
    /// Committed and pushed.
    Updated,
}

/// Execute a propagation run over the configured targets.
///
/// Pre-flight problems (missing token, unreadable configuration) abort the
/// run; per-target failures are counted in the report and never stop the
/// remaining targets.
pub fn execute<R: ProcessRunner>(
    runner: &R,
    options: &SyncOptions,
) -> Result<SyncReport, AppError> {
    let token = options.token.as_deref().ok_or(AppError::TokenMissing)?;
    let config = TargetConfig::load(&options.config_path)?;
    let targets =
        config.filter(options.repo_filter.as_deref(), options.branch_filter.as_deref());

    if targets.is_empty() {
        println!("No repositories to process");
        return Ok(SyncReport::default());
    }

    println!("Processing {} repository/branch combinations", targets.len());
    if options.dry_run {
        println!("DRY RUN MODE - No changes will be made");
    }

    let mut report = SyncReport::default();
    for target in &targets {
        println!("\nProcessing {} (branch: {})", target.repo, target.branch);
        match process_target(runner, target, token, options.dry_run) {
            Ok(outcome) => {
                match outcome {
                    EntryOutcome::UpToDate => println!("  Workflow file is already up to date"),
                    EntryOutcome::WouldUpdate => println!("  [DRY RUN] Would update workflow file"),
                    EntryOutcome::NoChanges => println!("  No changes to commit"),
                    EntryOutcome::Updated => println!("  Successfully updated workflow"),
                }
                report.succeeded += 1;
            }
            Err(e) => {
                eprintln!("  Error processing {}/{}: {}", target.repo, target.branch, e);
                report.failed += 1;
            }
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Summary: {} succeeded, {} failed", report.succeeded, report.failed);
    println!("{}", "=".repeat(60));

    Ok(report)
}

fn process_target<R: ProcessRunner>(
    runner: &R,
    target: &RepositoryTarget,
    token: &str,
    dry_run: bool,
) -> Result<EntryOutcome, AppError> {
    if !target.workflow_template.exists() {
        return Err(AppError::TemplateMissing(target.workflow_template.clone()));
    }
    let template = fs::read_to_string(&target.workflow_template)?;

    // The clone lives exactly as long as this entry, error paths included.
    let scratch = TempDir::new()?;
    let clone_dir = scratch.path().join("repo");

    println!("  Cloning repository...");
    git::clone_shallow(runner, &target.repo, &target.branch, token, &clone_dir)?;

    let overrides = WorkflowOverrides::load(&clone_dir);
    println!(
        "  Overrides: build_number_offset={} linux_enabled={} windows_enabled={}",
        overrides.build_number_offset, overrides.linux_enabled, overrides.windows_enabled
    );

    let rendered = render_workflow(&template, &overrides);

    let workflow_path = clone_dir.join(WORKFLOW_PATH);
    if let Ok(current) = fs::read(&workflow_path) {
        if current == rendered.as_bytes() {
            return Ok(EntryOutcome::UpToDate);
        }
    }

    if dry_run {
        return Ok(EntryOutcome::WouldUpdate);
    }

    if let Some(parent) = workflow_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&workflow_path, &rendered)?;

    let git = GitCli::new(runner, &clone_dir).with_redaction(token);
    git.set_identity(git::COMMIT_USER_NAME, git::COMMIT_USER_EMAIL)?;
    git.stage(WORKFLOW_PATH)?;
    if !git.has_changes()? {
        return Ok(EntryOutcome::NoChanges);
    }
    git.commit(COMMIT_MESSAGE)?;
    println!("  Pushing changes...");
    git.push(&target.branch)?;

    Ok(EntryOutcome::Updated)
}
