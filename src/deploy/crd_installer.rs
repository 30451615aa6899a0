//! Deployment by applying the resource manifest.

use std::sync::Arc;

use log::debug;

use super::{
    DeployError,
    Deployer,
    InstallerType,
    runner::{CommandRunner, CommandSpec},
    validate_request,
};
use crate::holder::DeploymentResource;

/// Deploys services by piping their JSON manifest to `<kubectl> apply`.
#[derive(Clone)]
pub struct CrdDeployer {
    kubectl: String,
    runner: Arc<dyn CommandRunner>,
}

impl CrdDeployer {
    #[must_use]
    pub fn new(kubectl: impl Into<String>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            kubectl: kubectl.into(),
            runner,
        }
    }

    /// Build the `apply` invocation for `app`, manifest included.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Validation`] for requests targeting another
    /// namespace and [`DeployError::Manifest`] if encoding fails.
    pub fn command(&self, namespace: &str, app: &DeploymentResource) -> Result<CommandSpec, DeployError> {
        validate_request(namespace, app)?;
        let manifest = serde_json::to_vec_pretty(app).map_err(|source| DeployError::Manifest {
            name: app.name().to_owned(),
            source,
        })?;
        Ok(CommandSpec::new(self.kubectl.as_str())
            .arg("apply")
            .arg("-n")
            .arg(namespace)
            .arg("-f")
            .arg("-")
            .stdin(manifest))
    }
}

impl std::fmt::Debug for CrdDeployer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrdDeployer")
            .field("kubectl", &self.kubectl)
            .finish_non_exhaustive()
    }
}

impl Deployer for CrdDeployer {
    fn deploy_service(
        &self,
        namespace: &str,
        installer: InstallerType,
        app: &DeploymentResource,
    ) -> Result<(), DeployError> {
        if installer != InstallerType::Crd {
            return Err(DeployError::UnsupportedInstaller(installer));
        }
        let command = self.command(namespace, app)?;
        debug!("running {}", command.display());

        let output = self.runner.run(&command).map_err(|source| DeployError::Spawn {
            program: self.kubectl.clone(),
            source,
        })?;
        if !output.success() {
            return Err(DeployError::Rejected {
                program: self.kubectl.clone(),
                name: app.name().to_owned(),
                status: output.status(),
                stderr: output.stderr.trim().to_owned(),
            });
        }
        Ok(())
    }
}
