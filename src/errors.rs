//! Prompt Error Types
//!
//! The prompt accessors themselves are infallible. Errors only come from
//! name lookup, contract verification, and report serialization.

use crate::contract::Convention;
use thiserror::Error;

/// Errors raised by the prompt helpers
#[derive(Debug, Error)]
pub enum PromptError {
    /// No embedded prompt goes by this name
    #[error("unknown prompt: {0}")]
    UnknownPrompt(String),

    /// The prompt text no longer mentions one or more conventions
    #[error("prompt '{prompt}' is missing conventions: {}", format_missing(.missing))]
    ContractViolation {
        prompt: String,
        missing: Vec<Convention>,
    },

    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_missing(missing: &[Convention]) -> String {
    missing
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for prompt operations
pub type PromptResult<T> = Result<T, PromptError>;
