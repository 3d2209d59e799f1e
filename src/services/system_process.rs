use std::process::Command;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandSpec, ProcessRunner};

/// `ProcessRunner` backed by `std::process::Command`.
///
/// Blocks until the child exits; no timeout is enforced.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            command.current_dir(cwd);
        }
        for (key, value) in &spec.env {
            command.env(key, value);
        }

        let output = command.output().map_err(|e| AppError::ExternalTool {
            tool: spec.program.clone(),
            details: format!("failed to execute: {}", e),
        })?;

        Ok(CommandOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
