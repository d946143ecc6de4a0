//! Error types for the interview harness.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while registering cases or running solutions.
#[derive(Debug, Error)]
pub enum InterviewError {
    /// A case type has a field the engine cannot see (`#[shape(skip)]`).
    #[error("{role} type {type_name} has a hidden field: {type_name}.{path}")]
    HiddenField {
        role: &'static str,
        type_name: String,
        path: String,
    },

    #[error("solution {name} not found")]
    SolutionNotFound { name: String },

    /// Text can only become a byte, codepoint or string value.
    #[error("cannot convert text to {type_name}")]
    ShapeConversion { type_name: String },

    /// `inputs2` is `None` for single-input harnesses.
    #[error(
        "length of inputs and outputs don't match {}",
        lengths(.inputs, .inputs2, .expected)
    )]
    LengthMismatch {
        inputs: usize,
        inputs2: Option<usize>,
        expected: usize,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid data in {}: {source}", .path.display())]
    InvalidData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid format options: {0}")]
    InvalidOptions(#[from] toml::de::Error),

    #[error("failed to write receipts: {0}")]
    Output(#[from] io::Error),
}

impl InterviewError {
    /// Returns true for caller mistakes (bad case types, mismatched case
    /// lists), as opposed to environment failures.
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            Self::HiddenField { .. } | Self::ShapeConversion { .. } | Self::LengthMismatch { .. }
        )
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn lengths(inputs: &usize, inputs2: &Option<usize>, expected: &usize) -> String {
    match inputs2 {
        Some(inputs2) => format!("{inputs}:{inputs2}:{expected}"),
        None => format!("{inputs}:{expected}"),
    }
}

/// Result alias for interview operations.
pub type Result<T> = std::result::Result<T, InterviewError>;
