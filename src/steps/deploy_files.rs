//! Steps deploying example services from their source files.
//!
//! Both steps resolve a location under the service's resource directory,
//! point a fresh holder's build source at it, and submit the holder through
//! the CLI installer:
//!
//! ```text
//! Deploy file "<file>" from example service "<service>"
//! Deploy folder from example service "<service>"
//! ```

use super::{
    error::{RegistrarError, StepError},
    registry::{StepCaptures, StepRegistry},
};
use crate::{
    context::Data,
    deploy::{Deployer, InstallerType},
    holder::{HolderProvider, ParameterTable},
    logging,
    source::SourcePath,
};

/// Pattern of the single-file deployment step.
pub const DEPLOY_FILE_STEP: &str = r#"^Deploy file "([^"]*)" from example service "([^"]*)"$"#;
/// Pattern of the resource-folder deployment step.
pub const DEPLOY_FOLDER_STEP: &str = r#"^Deploy folder from example service "([^"]*)"$"#;
/// Runtime every example service is built for.
pub const EXAMPLE_RUNTIME: &str = "quarkus";
/// Installer submitting example deployments.
pub const EXAMPLE_INSTALLER: InstallerType = InstallerType::Cli;

/// Register the single-file deployment step.
///
/// # Errors
///
/// Returns a [`RegistrarError`] if the pattern is already registered.
pub fn register_deploy_file_step(
    registry: StepRegistry<Data>,
) -> Result<StepRegistry<Data>, RegistrarError> {
    registry.step(DEPLOY_FILE_STEP, deploy_file_step)
}

/// Register the resource-folder deployment step.
///
/// # Errors
///
/// Returns a [`RegistrarError`] if the pattern is already registered.
pub fn register_deploy_folder_step(
    registry: StepRegistry<Data>,
) -> Result<StepRegistry<Data>, RegistrarError> {
    registry.step(DEPLOY_FOLDER_STEP, deploy_folder_step)
}

/// Register both deployment steps.
///
/// # Errors
///
/// Returns a [`RegistrarError`] if either pattern is already registered.
pub fn register_deploy_files_steps(
    registry: StepRegistry<Data>,
) -> Result<StepRegistry<Data>, RegistrarError> {
    register_deploy_folder_step(register_deploy_file_step(registry)?)
}

/// Registry holding only the deployment steps.
///
/// # Errors
///
/// Returns a [`RegistrarError`] if a pattern fails to compile.
pub fn registry() -> Result<StepRegistry<Data>, RegistrarError> {
    register_deploy_files_steps(StepRegistry::new())
}

fn deploy_file_step(data: &mut Data, captures: &StepCaptures<'_>) -> Result<(), StepError> {
    data.deploy_file_from_example_service(captures.get(1)?, captures.get(2)?)
}

fn deploy_folder_step(data: &mut Data, captures: &StepCaptures<'_>) -> Result<(), StepError> {
    data.deploy_folder_from_example_service(captures.get(1)?)
}

impl Data {
    /// Deploy a single resource file of an example service.
    ///
    /// # Errors
    ///
    /// Propagates holder and deployment failures unchanged.
    pub fn deploy_file_from_example_service(&self, file: &str, service_name: &str) -> Result<(), StepError> {
        let path = SourcePath::file(&self.examples_location, service_name, file);
        deploy_source_files_from_path(self.holders(), self.deployer(), &self.namespace, service_name, &path)
    }

    /// Deploy the whole resource folder of an example service.
    ///
    /// # Errors
    ///
    /// Propagates holder and deployment failures unchanged.
    pub fn deploy_folder_from_example_service(&self, service_name: &str) -> Result<(), StepError> {
        let path = SourcePath::folder(&self.examples_location, service_name);
        deploy_source_files_from_path(self.holders(), self.deployer(), &self.namespace, service_name, &path)
    }
}

/// Deploy `service_name` into `namespace`, building from `path`.
///
/// The deployer is only called once a holder has been obtained and its
/// build source set to `path`.
///
/// # Errors
///
/// Returns [`StepError::Holder`] if no holder can be produced and
/// [`StepError::Deploy`] if the submission fails.
pub fn deploy_source_files_from_path(
    holders: &dyn HolderProvider,
    deployer: &dyn Deployer,
    namespace: &str,
    service_name: &str,
    path: &SourcePath,
) -> Result<(), StepError> {
    let log = logging::for_namespace(namespace);
    log.info(format_args!(
        "Deploy example {service_name} with source files in path {path}"
    ));

    let mut holder = holders.app_holder(namespace, EXAMPLE_RUNTIME, service_name, &ParameterTable::new())?;
    holder.set_source_uri(path.as_str());

    deployer.deploy_service(namespace, EXAMPLE_INSTALLER, holder.app())?;
    log.debug(format_args!("Submitted example {service_name} for deployment"));
    Ok(())
}
