#![doc(html_root_url = "https://docs.rs/deploy_steps/latest")]
//! Public API for the `deploy_steps` library.
//!
//! This crate provides the step definitions a behaviour-driven end-to-end
//! suite uses to deploy example services from their source trees: a step
//! registration table, the scenario context shared by every handler, and the
//! holder and deployer seams the handlers drive.

pub mod config;
pub mod context;
pub mod deploy;
pub mod holder;
pub mod logging;
pub mod source;
pub mod steps;

pub use config::SuiteConfig;
pub use context::Data;
pub use deploy::{
    CliDeployer,
    CommandRunner,
    CrdDeployer,
    DeployError,
    Deployer,
    InstallerRouter,
    InstallerType,
    SystemRunner,
};
pub use holder::{
    AppHolder,
    DeploymentResource,
    HolderError,
    HolderProvider,
    ParameterTable,
    Runtime,
    TemplateHolderProvider,
};
pub use source::{SOURCE_LOCATION, SourcePath};
pub use steps::{RegistrarError, ScenarioFailure, StepCaptures, StepError, StepRegistry};
