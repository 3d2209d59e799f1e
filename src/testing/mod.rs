pub mod scripted_process;

#[allow(unused_imports)]
pub use scripted_process::ScriptedRunner;
