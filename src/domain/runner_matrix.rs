use serde::Deserialize;

use crate::domain::AppError;

/// CI trigger kinds the matrix computation distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    WorkflowDispatch,
    WorkflowCall,
    Push,
    /// Anything else yields an empty matrix.
    Other,
}

impl TriggerEvent {
    pub fn parse(name: &str) -> Self {
        match name {
            "workflow_dispatch" => Self::WorkflowDispatch,
            "workflow_call" => Self::WorkflowCall,
            "push" => Self::Push,
            _ => Self::Other,
        }
    }
}

/// Platform selection carried by a `push` event.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PushDefaults {
    #[serde(default)]
    pub linux: bool,
    #[serde(default)]
    pub windows: bool,
    #[serde(default)]
    pub sign: bool,
}

impl PushDefaults {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| AppError::Parse {
            what: "push event defaults".into(),
            details: e.to_string(),
        })
    }
}

/// Inputs for one matrix computation.
#[derive(Debug, Clone)]
pub struct MatrixRequest {
    pub event: TriggerEvent,
    pub ref_name: String,
    pub linux: bool,
    pub windows: bool,
    pub sign: bool,
    pub push_defaults: Option<PushDefaults>,
}

/// Compute the runner-label matrix for a CI event.
///
/// Manually dispatched (and reusable-workflow) runs honor the workflow
/// inputs; pushes honor the per-repository push defaults. A selected
/// Windows runner additionally carries the `signer` label when signing is
/// requested. Every selected runner ends with the `self-hosted` tag and
/// the ref name.
pub fn runner_matrix(request: &MatrixRequest) -> Vec<Vec<String>> {
    let (linux, windows, sign) = match request.event {
        TriggerEvent::WorkflowDispatch | TriggerEvent::WorkflowCall => {
            (request.linux, request.windows, request.sign)
        }
        TriggerEvent::Push => {
            let defaults = request.push_defaults.unwrap_or_default();
            (defaults.linux, defaults.windows, defaults.sign)
        }
        TriggerEvent::Other => (false, false, false),
    };

    let mut matrix = Vec::new();
    if linux {
        matrix.push(vec!["Linux".to_string()]);
    }
    if windows {
        let mut labels = vec!["Windows".to_string()];
        if sign {
            labels.push("signer".to_string());
        }
        matrix.push(labels);
    }

    for labels in &mut matrix {
        labels.push("self-hosted".to_string());
        labels.push(request.ref_name.clone());
    }
    matrix
}
