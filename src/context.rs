//! Scenario context shared by step handlers.

use std::sync::Arc;

use crate::{config::SuiteConfig, deploy::Deployer, holder::HolderProvider};

/// State of one scenario execution.
///
/// Every step handler receives the context explicitly. Precondition steps
/// may change the namespace or examples location; the collaborators stay
/// fixed for the scenario.
#[derive(Clone)]
pub struct Data {
    /// Namespace the scenario deploys into.
    pub namespace: String,
    /// Root directory of the example services.
    pub examples_location: String,
    holders: Arc<dyn HolderProvider>,
    deployer: Arc<dyn Deployer>,
}

impl Data {
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        examples_location: impl Into<String>,
        holders: Arc<dyn HolderProvider>,
        deployer: Arc<dyn Deployer>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            examples_location: examples_location.into(),
            holders,
            deployer,
        }
    }

    /// Context for a new scenario under `config`.
    #[must_use]
    pub fn from_config(
        config: &SuiteConfig,
        holders: Arc<dyn HolderProvider>,
        deployer: Arc<dyn Deployer>,
    ) -> Self {
        Self::new(
            config.scenario_namespace(),
            config.examples_location.as_str(),
            holders,
            deployer,
        )
    }

    #[must_use]
    pub fn holders(&self) -> &dyn HolderProvider { self.holders.as_ref() }

    #[must_use]
    pub fn deployer(&self) -> &dyn Deployer { self.deployer.as_ref() }
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("namespace", &self.namespace)
            .field("examples_location", &self.examples_location)
            .field("holders", &"<holders>")
            .field("deployer", &"<deployer>")
            .finish()
    }
}
