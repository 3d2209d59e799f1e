//! armada: CI and release automation for a fleet of plugin repositories.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::commands::publish::PublishOptions;
pub use app::commands::runners::RunnersOptions;
pub use app::commands::sign::{SignOptions, SignReport};
pub use app::commands::sync::{SyncOptions, SyncReport};
pub use domain::AppError;
