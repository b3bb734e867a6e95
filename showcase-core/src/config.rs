//! Static content for the chat replica page.
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ReplicaConfigError {
    #[error("Replica config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Default version {0:?} is not one of the listed versions")]
    UnknownDefaultVersion(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelVersion {
    pub id: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplicaConfig {
    pub headline: String,
    pub versions: Vec<ModelVersion>,
    pub default_version: String,
    pub recent: Vec<String>,
    pub input_placeholder: String,
}

impl Default for ReplicaConfig {
    fn default() -> Self {
        Self {
            headline: "Hello there".to_string(),
            versions: vec![
                ModelVersion {
                    id: "2.5 Pro".to_string(),
                    description: String::new(),
                },
                ModelVersion {
                    id: "2.5 Flash".to_string(),
                    description: String::new(),
                },
            ],
            default_version: "2.5 Pro".to_string(),
            recent: Vec::new(),
            input_placeholder: "Ask anything".to_string(),
        }
    }
}

impl ReplicaConfig {
    /// Parse and validate replica content.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the default version is
    /// missing from a non-empty version list.
    pub fn from_json(json: &str) -> Result<Self, ReplicaConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if !config.versions.is_empty()
            && !config.versions.iter().any(|v| v.id == config.default_version)
        {
            return Err(ReplicaConfigError::UnknownDefaultVersion(
                config.default_version,
            ));
        }
        Ok(config)
    }
}
