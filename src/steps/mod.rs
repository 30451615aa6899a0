//! Step registration and the deployment step family.
//!
//! [`StepRegistry`] maps compiled phrase patterns to typed handlers.
//! [`deploy_files`] binds the example-service deployment phrases.

pub mod deploy_files;
pub mod error;
pub mod registry;

pub use error::{RegistrarError, ScenarioFailure, StepError};
pub use registry::{StepCaptures, StepHandler, StepRegistry};
