use crate::domain::AppError;

/// One package to publish: name, version, and path inside the release tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: String,
    pub version: String,
    pub path: String,
}

impl PackageSpec {
    /// Parse the `[[name, version, path], …]` JSON argument.
    ///
    /// Anything other than an array of three-string triples is rejected.
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, AppError> {
        let triples: Vec<(String, String, String)> =
            serde_json::from_str(raw).map_err(|e| AppError::Parse {
                what: "package list".into(),
                details: e.to_string(),
            })?;
        Ok(triples
            .into_iter()
            .map(|(name, version, path)| Self { name, version, path })
            .collect())
    }
}
