//! CLI adapter.

use std::env;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::commands::{publish, runners, sign, sync};
use crate::domain::AppError;
use crate::services::SystemProcessRunner;

#[derive(Parser)]
#[command(name = "armada")]
#[command(version)]
#[command(
    about = "CI and release automation for a fleet of plugin repositories",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Propagate workflow templates to plugin repositories
    #[clap(visible_alias = "sw")]
    Sync {
        /// Path to the repositories configuration file
        #[arg(long, default_value = "repositories.json")]
        config: PathBuf,
        /// GitHub token for authentication (or set GITHUB_TOKEN)
        #[arg(long)]
        token: Option<String>,
        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
        /// Only update this repository (format: owner/repo)
        #[arg(long)]
        repo: Option<String>,
        /// Only update this branch (requires --repo)
        #[arg(long, requires = "repo")]
        branch: Option<String>,
    },
    /// Compute the runner-label matrix for a CI event
    #[clap(visible_alias = "rl")]
    Runners {
        /// GitHub event name (e.g. push, workflow_dispatch)
        #[arg(long)]
        event_name: String,
        /// GitHub ref name (branch or tag)
        #[arg(long)]
        ref_name: String,
        /// Request a Linux runner (flag or true/false)
        #[arg(long, action = ArgAction::Set, num_args = 0..=1,
              default_value_t = false, default_missing_value = "true")]
        linux: bool,
        /// Request a Windows runner (flag or true/false)
        #[arg(long, action = ArgAction::Set, num_args = 0..=1,
              default_value_t = false, default_missing_value = "true")]
        windows: bool,
        /// Request signing on the Windows runner (flag or true/false)
        #[arg(long, action = ArgAction::Set, num_args = 0..=1,
              default_value_t = false, default_missing_value = "true")]
        sign: bool,
        /// JSON platform defaults applied to push events
        #[arg(long)]
        push_event_defaults: Option<String>,
    },
    /// Publish a batch of packages through the packaging tool
    Publish {
        /// JSON array of [name, version, path] triples
        #[arg(long)]
        packages_json: String,
        /// Tag to publish the packages against
        #[arg(long)]
        tag: String,
        /// Build number appended to each version as a suffix
        #[arg(long)]
        build_number: String,
        /// Release workspace the packaging tool operates on
        #[arg(long, default_value = "../..")]
        workspace: PathBuf,
    },
    /// Sign binaries listed in .signlist manifests under a directory
    Sign {
        /// Directory scanned for manifests
        directory: PathBuf,
        /// Signing script invoked per file
        #[arg(long, default_value = "sign_release.ps1")]
        script: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let runner = SystemProcessRunner::new();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Sync { config, token, dry_run, repo, branch } => {
            let options = sync::SyncOptions {
                config_path: config,
                token: token.or_else(|| env::var("GITHUB_TOKEN").ok()),
                dry_run,
                repo_filter: repo,
                branch_filter: branch,
            };
            sync::execute(&runner, &options)
                .map(|report| if report.failed > 0 { 1 } else { 0 })
        }
        Commands::Runners { event_name, ref_name, linux, windows, sign, push_event_defaults } => {
            let options = runners::RunnersOptions {
                event_name,
                ref_name,
                linux,
                windows,
                sign,
                push_event_defaults,
            };
            runners::execute(&options).map(|_| 0)
        }
        Commands::Publish { packages_json, tag, build_number, workspace } => {
            let options = publish::PublishOptions {
                packages_json,
                tag,
                build_number,
                workspace,
                tool_name: env::var(publish::PACKAGER_ENV).ok(),
                publisher_name: env::var("GH_USERNAME").ok(),
                publisher_email: env::var("GIT_EMAIL").ok(),
            };
            publish::execute(&runner, &options).map(|_| 0)
        }
        Commands::Sign { directory, script } => {
            let options = sign::SignOptions { directory, script };
            sign::execute(&runner, &options).map(|_| 0)
        }
    };

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
