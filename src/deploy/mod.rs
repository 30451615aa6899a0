//! Submission of deployment resources to the cluster.
//!
//! A [`Deployer`] receives a finished [`DeploymentResource`] together with an
//! [`InstallerType`] naming the mechanism that performs the submission. The
//! CLI installer drives the deployment command-line tool; the CRD installer
//! applies the resource manifest directly. [`InstallerRouter`] picks between
//! them per call.

pub mod cli_installer;
pub mod crd_installer;
pub mod error;
pub mod router;
pub mod runner;

use std::{fmt, str::FromStr};

pub use cli_installer::CliDeployer;
pub use crd_installer::CrdDeployer;
pub use error::DeployError;
pub use router::InstallerRouter;
pub use runner::{CommandOutput, CommandRunner, CommandSpec, SystemRunner};

use crate::holder::DeploymentResource;

/// Mechanism that submits a deployment resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InstallerType {
    /// Deployment command-line tool.
    Cli,
    /// Direct application of the resource manifest.
    Crd,
}

impl InstallerType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Crd => "crd",
        }
    }
}

impl fmt::Display for InstallerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for InstallerType {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cli" => Ok(Self::Cli),
            "crd" => Ok(Self::Crd),
            _ => Err(DeployError::UnknownInstaller(s.to_owned())),
        }
    }
}

/// Submits deployment resources into a namespace.
pub trait Deployer: Send + Sync {
    /// Deploy `app` into `namespace` using `installer`.
    ///
    /// # Errors
    ///
    /// Returns a [`DeployError`] when the request is invalid or the
    /// submission is rejected.
    fn deploy_service(
        &self,
        namespace: &str,
        installer: InstallerType,
        app: &DeploymentResource,
    ) -> Result<(), DeployError>;
}

/// Reject requests no installer could submit.
///
/// # Errors
///
/// Returns [`DeployError::Validation`] if the resource has no name or
/// belongs to another namespace.
pub(crate) fn validate_request(namespace: &str, app: &DeploymentResource) -> Result<(), DeployError> {
    if app.name().is_empty() {
        return Err(DeployError::Validation {
            name: String::new(),
            reason: "resource has no name".into(),
        });
    }
    if app.namespace() != namespace {
        return Err(DeployError::Validation {
            name: app.name().to_owned(),
            reason: format!(
                "resource belongs to namespace {} but was submitted to {namespace}",
                app.namespace()
            ),
        });
    }
    Ok(())
}
