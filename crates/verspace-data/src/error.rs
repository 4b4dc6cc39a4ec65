//! Errors raised while loading datasets.

use thiserror::Error;
use verspace_core::error::VersionSpaceError;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Only nominal attributes can be learned.
    #[error("line {line}: attribute '{attribute}' has unsupported type '{kind}'")]
    UnsupportedAttribute {
        line: usize,
        attribute: String,
        kind: String,
    },

    #[error("line {line}: missing value for attribute '{attribute}'")]
    MissingValue { line: usize, attribute: String },

    #[error("line {line}: value '{value}' is not declared for attribute '{attribute}'")]
    UnknownValue {
        line: usize,
        attribute: String,
        value: String,
    },

    #[error("no attribute named '{0}'")]
    UnknownAttribute(String),

    #[error(transparent)]
    Schema(#[from] VersionSpaceError),
}

impl DataError {
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        DataError::Syntax {
            line,
            message: message.into(),
        }
    }
}
