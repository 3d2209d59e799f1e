use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Relative path of the per-repository override file inside a clone.
pub const OVERRIDE_CONFIG_PATH: &str = ".armada/workflow_config.json";

/// Per-repository workflow configuration after merging over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOverrides {
    pub build_number_offset: i64,
    pub linux_enabled: bool,
    pub windows_enabled: bool,
}

impl Default for WorkflowOverrides {
    fn default() -> Self {
        Self { build_number_offset: 0, linux_enabled: true, windows_enabled: true }
    }
}

/// Partial override record as written in a plugin repository.
///
/// Each present key overrides only itself; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialOverrides {
    pub build_number_offset: Option<i64>,
    pub linux_enabled: Option<bool>,
    pub windows_enabled: Option<bool>,
}

impl WorkflowOverrides {
    /// Apply a partial override record on top of the defaults.
    pub fn merged(partial: PartialOverrides) -> Self {
        let base = Self::default();
        Self {
            build_number_offset: partial.build_number_offset.unwrap_or(base.build_number_offset),
            linux_enabled: partial.linux_enabled.unwrap_or(base.linux_enabled),
            windows_enabled: partial.windows_enabled.unwrap_or(base.windows_enabled),
        }
    }

    /// Read the override file from a cloned repository.
    ///
    /// An absent or unreadable file and malformed JSON all yield the
    /// defaults; the propagator treats those as ordinary conditions, not
    /// errors.
    pub fn load(clone_root: &Path) -> Self {
        let path = clone_root.join(OVERRIDE_CONFIG_PATH);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str::<PartialOverrides>(&raw) {
            Ok(partial) => Self::merged(partial),
            Err(_) => Self::default(),
        }
    }
}
