use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// One repository/branch the propagator maintains.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryTarget {
    /// Repository in `owner/name` form.
    pub repo: String,
    /// Branch to update.
    pub branch: String,
    /// Workflow template rendered for this target.
    pub workflow_template: PathBuf,
}

/// Contents of the target-list configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetConfig {
    #[serde(default)]
    pub repositories: Vec<RepositoryTarget>,
}

impl TargetConfig {
    /// Load the target list from a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::ConfigFileMissing(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| AppError::Parse {
            what: format!("configuration file {}", path.display()),
            details: e.to_string(),
        })
    }

    /// Narrow the target list to one repository and optionally one branch.
    pub fn filter(self, repo: Option<&str>, branch: Option<&str>) -> Vec<RepositoryTarget> {
        let mut targets = self.repositories;
        if let Some(repo) = repo {
            targets.retain(|t| t.repo == repo);
            if let Some(branch) = branch {
                targets.retain(|t| t.branch == branch);
            }
        }
        targets
    }
}
