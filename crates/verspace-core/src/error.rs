//! Error types for Verspace operations.
//!
//! Version-space collapse is not an error; it is reported through
//! [`Observation::Collapsed`](crate::trainer::Observation) and
//! [`TrainingResult::collapsed_at`](crate::trainer::TrainingResult).

use thiserror::Error;

/// Result type for Verspace operations.
pub type Result<T> = std::result::Result<T, VersionSpaceError>;

/// Errors raised while configuring a learner or feeding it instances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionSpaceError {
    /// The schema has no class position; the learner never guesses one.
    #[error("no class attribute is configured on the schema")]
    MissingClass,

    /// The configured class position is outside the attribute list.
    #[error("class index {index} is out of range for {attributes} attributes")]
    InvalidClassIndex { index: usize, attributes: usize },

    /// The schema has only a class attribute.
    #[error("schema has no non-class attributes to learn from")]
    NoAttributes,

    /// The positive label is not one of the class values.
    #[error("positive label '{label}' is not a value of class attribute '{class}'")]
    UnknownPositiveLabel { label: String, class: String },

    /// An instance carries the wrong number of attribute values.
    #[error("instance has {found} attribute values, expected {expected}")]
    ArityMismatch { expected: usize, found: usize },

    /// A value lies outside its attribute's declared domain.
    #[error("value '{value}' is not in the domain of attribute '{attribute}'")]
    UnknownValue { attribute: String, value: String },

    /// A training instance has no class value.
    #[error("training instance has no class value")]
    UnlabeledInstance,

    /// A saved model does not match its own schema.
    #[error("invalid model snapshot: {0}")]
    Snapshot(String),
}

impl VersionSpaceError {
    pub fn unknown_value(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        VersionSpaceError::UnknownValue {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn snapshot(msg: impl Into<String>) -> Self {
        VersionSpaceError::Snapshot(msg.into())
    }

    /// Whether the error is raised before any example is processed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            VersionSpaceError::MissingClass
                | VersionSpaceError::InvalidClassIndex { .. }
                | VersionSpaceError::NoAttributes
                | VersionSpaceError::UnknownPositiveLabel { .. }
        )
    }
}
