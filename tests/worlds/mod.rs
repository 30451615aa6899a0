//! Cucumber test worlds and shared helpers.

pub mod deploy;

pub use deploy::DeployWorld;

/// Result type returned by world methods and step definitions.
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
