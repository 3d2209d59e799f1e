mod error;
mod overrides;
mod package;
mod runner_matrix;
pub mod signing;
mod target;
mod template;

pub use error::AppError;
pub use overrides::{OVERRIDE_CONFIG_PATH, PartialOverrides, WorkflowOverrides};
pub use package::PackageSpec;
pub use runner_matrix::{MatrixRequest, PushDefaults, TriggerEvent, runner_matrix};
pub use target::{RepositoryTarget, TargetConfig};
pub use template::render_workflow;
