//! Test double for the process port.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandSpec, ProcessRunner};

type Handler = Box<dyn Fn(&CommandSpec) -> Result<CommandOutput, AppError>>;

/// `ProcessRunner` that records every invocation and replays scripted
/// results in queue order.
#[derive(Default)]
pub struct ScriptedRunner {
    handlers: RefCell<VecDeque<Handler>>,
    calls: RefCell<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a handler for the next invocation.
    pub fn push<F>(&self, handler: F)
    where
        F: Fn(&CommandSpec) -> Result<CommandOutput, AppError> + 'static,
    {
        self.handlers.borrow_mut().push_back(Box::new(handler));
    }

    /// Queue a plain successful invocation.
    pub fn push_ok(&self) {
        self.push(|_| Ok(CommandOutput::default()));
    }

    /// Queue a successful invocation producing the given stdout.
    pub fn push_stdout(&self, stdout: &str) {
        let stdout = stdout.to_string();
        self.push(move |_| {
            Ok(CommandOutput { status: 0, stdout: stdout.clone(), stderr: String::new() })
        });
    }

    /// Queue a failing invocation producing the given stderr.
    pub fn push_failure(&self, stderr: &str) {
        let stderr = stderr.to_string();
        self.push(move |_| {
            Ok(CommandOutput { status: 1, stdout: String::new(), stderr: stderr.clone() })
        });
    }

    /// Every command spec seen so far, in invocation order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError> {
        self.calls.borrow_mut().push(spec.clone());
        let handler = self
            .handlers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                panic!("unexpected command: {} {}", spec.program, spec.args.join(" "))
            });
        handler(spec)
    }
}
