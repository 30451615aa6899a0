//! Deployment resource holders.
//!
//! A holder wraps the declarative [`DeploymentResource`] describing how a
//! service should be built and run. Step handlers obtain one per invocation
//! from a [`HolderProvider`], adjust it, and hand it to a deployer.

pub mod error;
pub mod provider;
pub mod resource;
pub mod table;

pub use error::HolderError;
pub use provider::{HolderProvider, TemplateHolderProvider, validate_service_name};
pub use resource::{
    API_VERSION,
    AppHolder,
    AppSpec,
    BuildSpec,
    DeploymentResource,
    GitSource,
    KIND,
    ObjectMeta,
    Runtime,
};
pub use table::ParameterTable;
