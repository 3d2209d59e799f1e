mod process;

pub use process::{CommandOutput, CommandSpec, ProcessRunner};
