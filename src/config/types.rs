use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deposit: DepositLimits,
    #[serde(default)]
    pub document: DocumentPolicy,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// Inclusive bounds for the deposit amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositLimits {
    /// Smallest accepted deposit (default: 20,000).
    #[serde(default = "default_deposit_min")]
    pub min: f64,
    /// Largest accepted deposit (default: 50,000).
    #[serde(default = "default_deposit_max")]
    pub max: f64,
}

/// Rules applied to the proof-of-address upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPolicy {
    /// Maximum file size in bytes (default: 5 MiB).
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    /// Accepted MIME types, e.g. "image/png".
    #[serde(default = "default_accepted_types")]
    pub accepted_types: Vec<String>,
}

/// Where finalized submissions go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubmissionConfig {
    /// Append JSON lines to this file instead of stdout.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Validation constraints handed to the field validators.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Policy {
    pub deposit: DepositLimits,
    pub document: DocumentPolicy,
}

impl From<&Config> for Policy {
    fn from(config: &Config) -> Self {
        Self {
            deposit: config.deposit,
            document: config.document.clone(),
        }
    }
}

fn default_deposit_min() -> f64 {
    20_000.0
}

fn default_deposit_max() -> f64 {
    50_000.0
}

fn default_max_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_accepted_types() -> Vec<String> {
    ["image/jpeg", "image/png", "image/gif", "application/pdf"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for DepositLimits {
    fn default() -> Self {
        Self {
            min: default_deposit_min(),
            max: default_deposit_max(),
        }
    }
}

impl Default for DocumentPolicy {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            accepted_types: default_accepted_types(),
        }
    }
}

impl DocumentPolicy {
    pub fn accepts(&self, mime_type: &str) -> bool {
        self.accepted_types.iter().any(|t| t == mime_type)
    }
}
