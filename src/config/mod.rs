//! Configuration for validation limits and submission output.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DepositLimits, DocumentPolicy, Policy, SubmissionConfig};
