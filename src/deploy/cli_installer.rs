//! Deployment through the deployment command-line tool.

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

/// Deploys services by invoking `<binary> deploy-service`.
#[derive(Clone)]
pub struct CliDeployer {
    binary: String,
    runner: Arc<dyn CommandRunner>,
}

impl CliDeployer {
    #[must_use]
    pub fn new(binary: impl Into<String>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            binary: binary.into(),
            runner,
        }
    }

    /// Build the command line submitting `app` into `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Validation`] if the resource has no source URI.
    pub fn command(&self, namespace: &str, app: &DeploymentResource) -> Result<CommandSpec, DeployError> {
        validate_request(namespace, app)?;
        if app.source_uri().is_empty() {
            return Err(DeployError::Validation {
                name: app.name().to_owned(),
                reason: "build source URI is empty".into(),
            });
        }

        let spec = &app.spec;
        let mut command = CommandSpec::new(self.binary.as_str())
            .arg("deploy-service")
            .arg(app.name())
            .arg(app.source_uri())
            .arg("--project")
            .arg(namespace)
            .arg("--runtime")
            .arg(spec.runtime.as_str());
        if spec.replicas != 1 {
            command = command.arg("--replicas").arg(spec.replicas.to_string());
        }
        if let Some(dir) = &spec.build.git_source.context_dir {
            command = command.arg("--context-dir").arg(dir.as_str());
        }
        if let Some(reference) = &spec.build.git_source.reference {
            command = command.arg("--branch").arg(reference.as_str());
        }
        if spec.build.native {
            command = command.arg("--native");
        }
        Ok(command)
    }
}

impl std::fmt::Debug for CliDeployer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliDeployer")
            .field("binary", &self.binary)
            .finish_non_exhaustive()
    }
}

impl Deployer for CliDeployer {
    fn deploy_service(
        &self,
        namespace: &str,
        installer: InstallerType,
        app: &DeploymentResource,
    ) -> Result<(), DeployError> {
        if installer != InstallerType::Cli {
            return Err(DeployError::UnsupportedInstaller(installer));
        }
        let command = self.command(namespace, app)?;
        debug!("running {}", command.display());

        let output = self.runner.run(&command).map_err(|source| DeployError::Spawn {
            program: self.binary.clone(),
            source,
        })?;
        if !output.success() {
            return Err(DeployError::Rejected {
                program: self.binary.clone(),
                name: app.name().to_owned(),
                status: output.status(),
                stderr: output.stderr.trim().to_owned(),
            });
        }
        Ok(())
    }
}
