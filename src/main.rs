//! Binary running example-service deployment steps.
//!
//! Each positional argument is one step phrase; the run stops at the first
//! failing step.

mod cli;

use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use deploy_steps::{
    CliDeployer,
    CommandRunner,
    CrdDeployer,
    Data,
    InstallerRouter,
    SuiteConfig,
    SystemRunner,
    TemplateHolderProvider,
    steps::deploy_files,
};

fn config_from(cli: &cli::Cli) -> SuiteConfig {
    SuiteConfig {
        namespace: cli.namespace.clone(),
        namespace_prefix: cli.namespace_prefix.clone(),
        examples_location: cli.examples_location.clone(),
        cli_binary: cli.cli_binary.clone(),
        kubectl_binary: cli.kubectl_binary.clone(),
    }
}

fn main() -> ExitCode {
    // Applications embedding the library should install their own subscriber.
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();
    let config = config_from(&cli);

    let registry = match deploy_files::registry() {
        Ok(registry) => registry,
        Err(error) => {
            tracing::error!(%error, "step registration failed");
            return ExitCode::FAILURE;
        }
    };

    let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner);
    let deployer = InstallerRouter::new(
        CliDeployer::new(config.cli_binary.as_str(), runner.clone()),
        CrdDeployer::new(config.kubectl_binary.as_str(), runner),
    );
    let mut data = Data::from_config(
        &config,
        Arc::new(TemplateHolderProvider::new()),
        Arc::new(deployer),
    );
    tracing::info!(namespace = %data.namespace, "running {} step(s)", cli.steps.len());

    match registry.run_scenario(&mut data, &cli.steps) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            tracing::error!(namespace = %data.namespace, "{failure}");
            ExitCode::FAILURE
        }
    }
}
