//! Step definitions for example-service deployment scenarios.
//!
//! Deploy phrases themselves are not defined here: a single catch-all step
//! hands them to the crate's registry.

use cucumber::{given, then, when};

use crate::worlds::{DeployWorld, TestResult};

#[given(regex = r#"^the examples are located at "([^"]*)"$"#)]
fn examples_location(world: &mut DeployWorld, location: String) { world.set_examples_location(location); }

#[given(regex = r#"^the scenario namespace is "([^"]*)"$"#)]
fn scenario_namespace(world: &mut DeployWorld, namespace: String) { world.set_namespace(namespace); }

#[given(regex = r#"^the cluster rejects deployments with "([^"]*)"$"#)]
fn cluster_rejects(world: &mut DeployWorld, reason: String) { world.reject_deployments(reason); }

#[given(regex = r#"^no holder can be built for runtime "([^"]*)"$"#)]
fn holder_lookups_fail(world: &mut DeployWorld, runtime: String) { world.fail_holder_lookups(runtime); }

#[when(regex = r"^(Deploy .*)$")]
fn deploy_phrase(world: &mut DeployWorld, phrase: String) { world.run_step(&phrase); }

#[then("the step succeeds")]
fn step_succeeds(world: &mut DeployWorld) -> TestResult { world.assert_succeeded() }

#[then(regex = r#"^the step fails with "([^"]*)"$"#)]
fn step_fails(world: &mut DeployWorld, expected: String) -> TestResult { world.assert_failed_with(&expected) }

#[then(regex = r#"^the submitted source path is "([^"]*)"$"#)]
fn source_path(world: &mut DeployWorld, expected: String) -> TestResult { world.assert_source_path(&expected) }

#[then(regex = r#"^the deployment used the "([^"]*)" installer$"#)]
fn installer(world: &mut DeployWorld, expected: String) -> TestResult { world.assert_installer(&expected) }

#[then(regex = r#"^service "([^"]*)" was submitted to namespace "([^"]*)"$"#)]
fn deployed_service(world: &mut DeployWorld, name: String, namespace: String) -> TestResult {
    world.assert_deployed_service(&name, &namespace)
}

#[then(regex = r"^(\d+) deployments? (?:was|were) submitted$")]
fn deployment_count(world: &mut DeployWorld, expected: usize) -> TestResult {
    world.assert_deployment_count(expected)
}
