//! Suite configuration.
//!
//! Settings shared by every scenario of a run: where example services live,
//! which namespace to deploy into, and which installer binaries to call.

use uuid::Uuid;

/// Prefix of generated namespaces.
pub const DEFAULT_NAMESPACE_PREFIX: &str = "cucumber";
/// Checkout holding the example services.
pub const DEFAULT_EXAMPLES_LOCATION: &str = "kogito-examples";
/// Deployment command-line tool used by the CLI installer.
pub const DEFAULT_CLI_BINARY: &str = "kogito";
/// Cluster client used by the CRD installer.
pub const DEFAULT_KUBECTL_BINARY: &str = "kubectl";

const NAMESPACE_SUFFIX_LEN: usize = 8;

/// Configuration for a run of deployment steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Fixed namespace; a fresh one is generated per scenario when unset.
    pub namespace: Option<String>,
    pub namespace_prefix: String,
    pub examples_location: String,
    pub cli_binary: String,
    pub kubectl_binary: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_owned(),
            examples_location: DEFAULT_EXAMPLES_LOCATION.to_owned(),
            cli_binary: DEFAULT_CLI_BINARY.to_owned(),
            kubectl_binary: DEFAULT_KUBECTL_BINARY.to_owned(),
        }
    }
}

impl SuiteConfig {
    /// Namespace a scenario should use.
    #[must_use]
    pub fn scenario_namespace(&self) -> String {
        self.namespace
            .clone()
            .unwrap_or_else(|| generate_namespace(&self.namespace_prefix))
    }
}

/// Generate a namespace name of the form `<prefix>-<8 hex digits>`.
#[must_use]
pub fn generate_namespace(prefix: &str) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(NAMESPACE_SUFFIX_LEN)
        .collect();
    format!("{prefix}-{suffix}")
}
