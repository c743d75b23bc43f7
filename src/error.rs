//! Error types for configuration and async evaluation.
//!
//! Evaluation itself never fails; these cover the plumbing around it.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Evaluation cancelled")]
    Cancelled,
    #[error("Evaluation receiver dropped")]
    ChannelClosed,
}
