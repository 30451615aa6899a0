//! Errors raised while registering and running steps.

use thiserror::Error;

use crate::{deploy::DeployError, holder::HolderError};

/// Errors raised while building a [`super::StepRegistry`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistrarError {
    /// The pattern is not a valid regular expression.
    #[error("malformed step pattern {pattern:?}: {source}")]
    MalformedPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// A handler for the pattern was already registered.
    #[error("step pattern {0:?} was already registered")]
    DuplicatePattern(String),
}

/// Failure of a single step.
///
/// Collaborator errors are wrapped transparently so the runner reports
/// their messages unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StepError {
    /// No registered pattern matches the step.
    #[error("undefined step: {0}")]
    Undefined(String),
    /// More than one registered pattern matches the step.
    #[error("ambiguous step {step:?} matches {}", .patterns.join(", "))]
    Ambiguous { step: String, patterns: Vec<String> },
    /// A handler asked for a capture group the match did not provide.
    #[error("step {step:?} has no capture group {index}")]
    MissingCapture { step: String, index: usize },
    /// The deployment resource holder could not be obtained.
    #[error(transparent)]
    Holder(#[from] HolderError),
    /// The deploy operation failed.
    #[error(transparent)]
    Deploy(#[from] DeployError),
}

/// First failing step of a scenario.
#[derive(Debug, Error)]
#[error("step {} {step:?} failed: {source}", .index + 1)]
pub struct ScenarioFailure {
    /// Zero-based position of the step in the scenario.
    pub index: usize,
    pub step: String,
    #[source]
    pub source: StepError,
}
