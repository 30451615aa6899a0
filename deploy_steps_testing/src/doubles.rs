//! Recording stand-ins for the holder provider and the deployer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use deploy_steps::{
    AppHolder,
    Data,
    DeployError,
    Deployer,
    DeploymentResource,
    HolderError,
    HolderProvider,
    InstallerType,
    ParameterTable,
    TemplateHolderProvider,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> { mutex.lock().unwrap_or_else(PoisonError::into_inner) }

/// One request received by [`RecordingDeployer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployCall {
    pub namespace: String,
    pub installer: InstallerType,
    /// Resource exactly as submitted.
    pub app: DeploymentResource,
}

/// Deployer that records requests and optionally rejects them.
#[derive(Debug, Default)]
pub struct RecordingDeployer {
    rejection: Option<String>,
    calls: Mutex<Vec<DeployCall>>,
}

impl RecordingDeployer {
    /// Deployer accepting every request.
    pub fn new() -> Self { Self::default() }

    /// Deployer rejecting every request with `reason`, after recording it.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            rejection: Some(reason.into()),
            calls: Mutex::default(),
        }
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<DeployCall> { lock(&self.calls).clone() }

    /// Most recent request, if any.
    pub fn last(&self) -> Option<DeployCall> { lock(&self.calls).last().cloned() }
}

impl Deployer for RecordingDeployer {
    fn deploy_service(
        &self,
        namespace: &str,
        installer: InstallerType,
        app: &DeploymentResource,
    ) -> Result<(), DeployError> {
        lock(&self.calls).push(DeployCall {
            namespace: namespace.to_owned(),
            installer,
            app: app.clone(),
        });
        match &self.rejection {
            Some(reason) => Err(DeployError::Rejected {
                program: "recording-deployer".into(),
                name: app.name().to_owned(),
                status: "exit code 1".into(),
                stderr: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Arguments of one holder lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolderRequest {
    pub namespace: String,
    pub runtime: String,
    pub service_name: String,
    pub parameters: ParameterTable,
}

/// Holder provider delegating to [`TemplateHolderProvider`] while recording
/// lookups; it can be told to fail every lookup instead.
#[derive(Debug, Default)]
pub struct StubHolderProvider {
    failure: Option<HolderError>,
    inner: TemplateHolderProvider,
    requests: Mutex<Vec<HolderRequest>>,
}

impl StubHolderProvider {
    pub fn new() -> Self { Self::default() }

    /// Provider answering every lookup with `error`.
    pub fn failing(error: HolderError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Make later lookups for the holder's namespace and name return it.
    pub fn prepare(&self, holder: AppHolder) -> Result<(), HolderError> { self.inner.prepare(holder) }

    /// Lookups received so far, oldest first.
    pub fn requests(&self) -> Vec<HolderRequest> { lock(&self.requests).clone() }
}

impl HolderProvider for StubHolderProvider {
    fn app_holder(
        &self,
        namespace: &str,
        runtime: &str,
        service_name: &str,
        parameters: &ParameterTable,
    ) -> Result<AppHolder, HolderError> {
        lock(&self.requests).push(HolderRequest {
            namespace: namespace.to_owned(),
            runtime: runtime.to_owned(),
            service_name: service_name.to_owned(),
            parameters: parameters.clone(),
        });
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => self.inner.app_holder(namespace, runtime, service_name, parameters),
        }
    }
}

/// Scenario context wired to the given doubles.
pub fn scenario_data(
    namespace: &str,
    examples_location: &str,
    holders: &Arc<StubHolderProvider>,
    deployer: &Arc<RecordingDeployer>,
) -> Data {
    Data::new(namespace, examples_location, holders.clone(), deployer.clone())
}
