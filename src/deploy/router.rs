//! Dispatch of deployments to the installer named by the caller.

use super::{DeployError, Deployer, InstallerType};
use crate::holder::DeploymentResource;

/// Routes each request to the deployer registered for its installer.
pub struct InstallerRouter {
    cli: Box<dyn Deployer>,
    crd: Box<dyn Deployer>,
}

impl InstallerRouter {
    #[must_use]
    pub fn new(cli: impl Deployer + 'static, crd: impl Deployer + 'static) -> Self {
        Self {
            cli: Box::new(cli),
            crd: Box::new(crd),
        }
    }
}

impl std::fmt::Debug for InstallerRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallerRouter").finish_non_exhaustive()
    }
}

impl Deployer for InstallerRouter {
    fn deploy_service(
        &self,
        namespace: &str,
        installer: InstallerType,
        app: &DeploymentResource,
    ) -> Result<(), DeployError> {
        match installer {
            InstallerType::Cli => self.cli.deploy_service(namespace, installer, app),
            InstallerType::Crd => self.crd.deploy_service(namespace, installer, app),
        }
    }
}
