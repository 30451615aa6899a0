//! Errors raised by [`super::Deployer`] implementations.

use std::io;

use thiserror::Error;

use super::InstallerType;

/// Failures to submit a deployment resource.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeployError {
    /// The request was refused before anything was submitted.
    #[error("invalid deployment request for {name:?}: {reason}")]
    Validation { name: String, reason: String },
    /// The deployer cannot submit through the requested installer.
    #[error("installer {0} is not supported by this deployer")]
    UnsupportedInstaller(InstallerType),
    /// An installer selector did not name a known installer.
    #[error("unknown installer {0:?}")]
    UnknownInstaller(String),
    /// The installer process could not be started.
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The installer ran but refused the deployment.
    #[error("{program} rejected deployment of {name} ({status}): {stderr}")]
    Rejected {
        program: String,
        name: String,
        status: String,
        stderr: String,
    },
    /// The resource manifest could not be encoded.
    #[error("failed to encode manifest for {name}: {source}")]
    Manifest {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
