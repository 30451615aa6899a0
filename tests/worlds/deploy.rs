//! Test world for example-service deployment scenarios.

use std::sync::Arc;

use cucumber::World;
use deploy_steps::{Data, HolderError, StepRegistry, steps::deploy_files};
use deploy_steps_testing::{DeployCall, RecordingDeployer, StubHolderProvider, scenario_data};

use super::TestResult;

/// Scenario state: context settings, recording collaborators and the
/// outcome of the last deploy phrase.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct DeployWorld {
    namespace: String,
    examples_location: String,
    holders: Arc<StubHolderProvider>,
    deployer: Arc<RecordingDeployer>,
    registry: StepRegistry<Data>,
    outcome: Option<Result<(), String>>,
}

impl DeployWorld {
    fn new() -> Self {
        Self {
            namespace: "cucumber".into(),
            examples_location: "/examples".into(),
            holders: Arc::new(StubHolderProvider::new()),
            deployer: Arc::new(RecordingDeployer::new()),
            registry: deploy_files::registry().expect("register deploy steps"),
            outcome: None,
        }
    }

    pub fn set_namespace(&mut self, namespace: String) { self.namespace = namespace; }

    pub fn set_examples_location(&mut self, location: String) { self.examples_location = location; }

    /// Make every later deployment fail with `reason`.
    pub fn reject_deployments(&mut self, reason: String) {
        self.deployer = Arc::new(RecordingDeployer::rejecting(reason));
    }

    /// Make every later holder lookup fail with an unknown-runtime error.
    pub fn fail_holder_lookups(&mut self, runtime: String) {
        self.holders = Arc::new(StubHolderProvider::failing(HolderError::UnknownRuntime(runtime)));
    }

    /// Dispatch `step` through the registry, recording its outcome.
    pub fn run_step(&mut self, step: &str) {
        let mut data = scenario_data(&self.namespace, &self.examples_location, &self.holders, &self.deployer);
        self.outcome = Some(self.registry.dispatch(&mut data, step).map_err(|e| e.to_string()));
    }

    fn last_call(&self) -> TestResult<DeployCall> {
        self.deployer
            .last()
            .ok_or_else(|| "no deployment was submitted".into())
    }

    /// Assert the last deploy phrase succeeded.
    pub fn assert_succeeded(&self) -> TestResult {
        match &self.outcome {
            Some(Ok(())) => Ok(()),
            Some(Err(message)) => Err(format!("step failed: {message}").into()),
            None => Err("no deploy step ran".into()),
        }
    }

    /// Assert the last deploy phrase failed with a message containing
    /// `expected`.
    pub fn assert_failed_with(&self, expected: &str) -> TestResult {
        match &self.outcome {
            Some(Err(message)) if message.contains(expected) => Ok(()),
            Some(Err(message)) => Err(format!("expected error containing {expected:?}, got {message:?}").into()),
            Some(Ok(())) => Err("step unexpectedly succeeded".into()),
            None => Err("no deploy step ran".into()),
        }
    }

    pub fn assert_source_path(&self, expected: &str) -> TestResult {
        let call = self.last_call()?;
        if call.app.source_uri() != expected {
            return Err(format!("expected source path {expected:?}, got {:?}", call.app.source_uri()).into());
        }
        Ok(())
    }

    pub fn assert_installer(&self, expected: &str) -> TestResult {
        let call = self.last_call()?;
        if call.installer.as_str() != expected {
            return Err(format!("expected installer {expected}, got {}", call.installer).into());
        }
        Ok(())
    }

    pub fn assert_deployed_service(&self, name: &str, namespace: &str) -> TestResult {
        let call = self.last_call()?;
        if call.app.name() != name || call.namespace != namespace {
            return Err(format!(
                "expected {name} in {namespace}, got {} in {}",
                call.app.name(),
                call.namespace
            )
            .into());
        }
        Ok(())
    }

    pub fn assert_deployment_count(&self, expected: usize) -> TestResult {
        let count = self.deployer.calls().len();
        if count != expected {
            return Err(format!("expected {expected} deployments, got {count}").into());
        }
        Ok(())
    }
}
