use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BcaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analyzer error: {0}")]
    Analyzer(String),
}

impl BcaError {
    pub fn analyzer(message: impl Into<String>) -> Self {
        BcaError::Analyzer(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        BcaError::InvalidInput(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            BcaError::Io(e) => ErrorPayload::new(
                ErrorCategory::Io,
                e.to_string(),
                "Check snapshot file paths and permissions.",
            ),
            BcaError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Verify the snapshot file is valid JSON; run with --verbose for details.",
            ),
            BcaError::Yaml(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Verify the snapshot file is valid YAML; run with --verbose for details.",
            ),
            BcaError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("weights") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Category weights must be non-negative with a positive sum (see [weights] in the config file).",
                    )
                } else if lower.contains("threshold") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Thresholds must lie in [0, 1]; the strict color threshold must exceed the authorization threshold.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check the config file (TOML) and CLI flags.",
                    )
                }
            }
            BcaError::InvalidInput(msg) => ErrorPayload::new(
                ErrorCategory::Input,
                msg.to_string(),
                "Provide at least one non-empty snapshot (brand guidelines or scraped design data).",
            ),
            BcaError::Analyzer(msg) => ErrorPayload::new(
                ErrorCategory::Analyzer,
                msg.to_string(),
                "Inspect the analyzer inputs; rerun with --verbose for details.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, BcaError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Input,
    Analyzer,
    Io,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
