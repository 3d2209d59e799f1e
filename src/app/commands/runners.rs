//! Runner-label matrix computation for CI events.

use crate::domain::{AppError, MatrixRequest, PushDefaults, TriggerEvent, runner_matrix};

/// Options for one matrix computation.
#[derive(Debug, Clone, Default)]
pub struct RunnersOptions {
    pub event_name: String,
    pub ref_name: String,
    pub linux: bool,
    pub windows: bool,
    pub sign: bool,
    pub push_event_defaults: Option<String>,
}

/// Compute the matrix and print it as one JSON line for the workflow to
/// feed into `fromJSON`.
pub fn execute(options: &RunnersOptions) -> Result<Vec<Vec<String>>, AppError> {
    let push_defaults = match options.push_event_defaults.as_deref() {
        Some(raw) => Some(PushDefaults::parse(raw)?),
        None => None,
    };

    let request = MatrixRequest {
        event: TriggerEvent::parse(&options.event_name),
        ref_name: options.ref_name.clone(),
        linux: options.linux,
        windows: options.windows,
        sign: options.sign,
        push_defaults,
    };

    let matrix = runner_matrix(&request);
    let encoded = serde_json::to_string(&matrix).map_err(|e| AppError::Parse {
        what: "runner matrix".into(),
        details: e.to_string(),
    })?;
    println!("{}", encoded);
    Ok(matrix)
}
