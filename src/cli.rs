//! Command line interface for the `deploy-steps` binary.
//!
//! Runs deployment step phrases against a cluster, reading defaults from
//! the environment so CI jobs can configure a run without flags.

use clap::Parser;

/// Command line arguments for the `deploy-steps` binary.
#[derive(Debug, Parser)]
#[command(
    name = "deploy-steps",
    version,
    about = "Deploy example services from their source trees"
)]
pub struct Cli {
    /// Namespace to deploy into; a fresh one is generated when omitted.
    #[arg(short, long, env = "DEPLOY_STEPS_NAMESPACE")]
    pub namespace: Option<String>,
    /// Prefix of generated namespaces.
    #[arg(long, env = "DEPLOY_STEPS_NAMESPACE_PREFIX", default_value = "cucumber")]
    pub namespace_prefix: String,
    /// Directory containing the example services.
    #[arg(
        short,
        long,
        env = "DEPLOY_STEPS_EXAMPLES_LOCATION",
        default_value = "kogito-examples"
    )]
    pub examples_location: String,
    /// Deployment command-line tool used by the CLI installer.
    #[arg(long, env = "DEPLOY_STEPS_CLI", default_value = "kogito")]
    pub cli_binary: String,
    /// Cluster client used by the CRD installer.
    #[arg(long, env = "DEPLOY_STEPS_KUBECTL", default_value = "kubectl")]
    pub kubectl_binary: String,
    /// Step phrases to run in order.
    #[arg(required = true)]
    pub steps: Vec<String>,
}
